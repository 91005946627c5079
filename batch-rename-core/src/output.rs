use serde::{Deserialize, Serialize};
use serde_json::json;
use std::path::PathBuf;

use crate::options::TransferMode;

/// Output format for the final report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// Result of a complete run over the target directory
#[derive(Debug, Serialize, Deserialize)]
pub struct RunResult {
    pub target_dir: PathBuf,
    pub mode: TransferMode,
    pub dry_run: bool,
    /// Files actually renamed or copied; always 0 in dry-run mode
    pub processed: usize,
    /// Recoverable errors collected during the walk
    pub errors: Vec<String>,
}

impl RunResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Every collected error, one per line
    pub fn error_report(&self) -> String {
        self.errors
            .iter()
            .map(|error| format!("  {error}\n"))
            .collect()
    }
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String;
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for RunResult {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": !self.has_errors(),
            "operation": self.mode,
            "target_dir": self.target_dir,
            "dry_run": self.dry_run,
            "summary": {
                "processed": self.processed,
                "errors": self.errors.len(),
            },
            "errors": self.errors,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = format!(
            "Operation complete: {} files {}",
            self.processed,
            self.mode.past_tense()
        );

        if self.dry_run {
            output.push_str(" (dry run, nothing was changed)");
        }

        if self.has_errors() {
            output.push_str(&format!(", {} errors", self.errors.len()));
        }

        output
    }
}
