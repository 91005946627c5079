use regex::bytes::Regex;
use std::ffi::OsStr;

use crate::error::ConfigError;

/// Filters file names against an optional regular expression.
///
/// Matching runs on the raw name bytes, so names that are not valid UTF-8
/// can still match.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    regex: Option<Regex>,
}

impl Matcher {
    /// Compile `pattern`, or match everything when it is absent or empty.
    ///
    /// Patterns written as `/expr/` have the surrounding slashes removed.
    pub fn new(pattern: Option<&str>) -> Result<Self, ConfigError> {
        let Some(raw) = pattern else {
            return Ok(Self::default());
        };

        let pattern = strip_slashes(raw);
        if pattern.is_empty() {
            return Ok(Self::default());
        }

        let regex = Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self { regex: Some(regex) })
    }

    pub fn matches(&self, file_name: impl AsRef<OsStr>) -> bool {
        self.regex.as_ref().map_or(true, |regex| {
            regex.is_match(file_name.as_ref().as_encoded_bytes())
        })
    }

    pub fn pattern(&self) -> Option<&str> {
        self.regex.as_ref().map(Regex::as_str)
    }
}

fn strip_slashes(pattern: &str) -> &str {
    pattern.trim_start_matches('/').trim_end_matches('/')
}
