use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;

/// Whether matching files are moved or duplicated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferMode {
    #[default]
    Rename,
    Copy,
}

impl TransferMode {
    pub fn from_copy_flag(copy: bool) -> Self {
        if copy {
            Self::Copy
        } else {
            Self::Rename
        }
    }

    /// Verb used in per-file action lines
    pub fn verb(self) -> &'static str {
        match self {
            Self::Rename => "Renaming",
            Self::Copy => "Copying",
        }
    }

    /// Past tense used in the final summary
    pub fn past_tense(self) -> &'static str {
        match self {
            Self::Rename => "renamed",
            Self::Copy => "copied",
        }
    }
}

/// Case conversion applied to the final file name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMode {
    #[default]
    Preserve,
    Lower,
    Upper,
}

impl CaseMode {
    pub fn from_flags(lowercase: bool, uppercase: bool) -> Result<Self, ConfigError> {
        match (lowercase, uppercase) {
            (true, true) => Err(ConfigError::ConflictingCase),
            (true, false) => Ok(Self::Lower),
            (false, true) => Ok(Self::Upper),
            (false, false) => Ok(Self::Preserve),
        }
    }

    pub fn apply(self, name: String) -> String {
        match self {
            Self::Preserve => name,
            Self::Lower => name.to_lowercase(),
            Self::Upper => name.to_uppercase(),
        }
    }

    /// Like [`CaseMode::apply`] for names that may not be valid UTF-8.
    /// Invalid byte sequences are kept as they are.
    pub fn apply_bytes(self, name: Vec<u8>) -> Vec<u8> {
        if self == Self::Preserve {
            return name;
        }

        let mut converted = Vec::with_capacity(name.len());
        for chunk in name.utf8_chunks() {
            converted.extend_from_slice(self.apply(chunk.valid().to_string()).as_bytes());
            converted.extend_from_slice(chunk.invalid());
        }
        converted
    }
}

/// Everything a run needs, built once and shared read-only
#[derive(Debug, Clone, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct RenameOptions {
    /// Filter applied to base names; `None` matches every file
    pub regex: Option<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    /// Base name that replaces the stem as `{name}_{index:04}`
    pub enumerate: Option<String>,
    /// Root of the walk; `None` means the current working directory
    pub target_dir: Option<PathBuf>,
    pub mode: TransferMode,
    pub recurse: bool,
    pub case: CaseMode,
    pub dry_run: bool,
    /// Overwrite destinations that already exist
    pub force: bool,
    /// Visit directory entries sorted by file name instead of listing order
    pub sort: bool,
}

impl RenameOptions {
    /// Empty strings are treated as if the option was never given.
    pub fn normalized(mut self) -> Self {
        for field in [
            &mut self.regex,
            &mut self.prefix,
            &mut self.suffix,
            &mut self.enumerate,
        ] {
            if field.as_deref().is_some_and(str::is_empty) {
                *field = None;
            }
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let is_set = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.is_empty());

        if !is_set(&self.prefix) && !is_set(&self.suffix) && !is_set(&self.enumerate) {
            return Err(ConfigError::NoTransform);
        }

        Ok(())
    }
}
