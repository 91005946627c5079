use batch_rename_core::{CaseMode, ConfigError, RenameOptions, TransferMode};
use clap::Parser;
use std::path::PathBuf;

use super::types::OutputFormat;

/// Batch rename or copy files with a prefix, suffix or enumeration
///
/// Every file in the target directory (optionally filtered by a regex) is
/// renamed or copied to a new name built from its stem. For example
/// `batch-rename -p to_sort_ -x '\.png$'` renames `a.png` to `to_sort_a.png`.
#[derive(Parser, Debug)]
#[command(name = "batch-rename")]
#[command(author, version)]
pub struct Cli {
    /// Only process files whose name matches this regex ("/regex/" also accepted)
    #[arg(short = 'x', long, value_name = "REGEX")]
    pub regex: Option<String>,

    /// Prepend this to the file stem
    #[arg(short = 'p', long, allow_hyphen_values = true)]
    pub prefix: Option<String>,

    /// Append this to the file stem, before the extension
    #[arg(short = 's', long, allow_hyphen_values = true)]
    pub suffix: Option<String>,

    /// Replace the file stem with <NAME>_0000, <NAME>_0001, ...
    #[arg(short = 'e', long, value_name = "NAME", allow_hyphen_values = true)]
    pub enumerate: Option<String>,

    /// Directory to process (defaults to the current working directory)
    #[arg(short = 't', long = "target-dir", value_name = "PATH")]
    pub target_dir: Option<PathBuf>,

    /// Copy instead of rename
    #[arg(short = 'c', long)]
    pub copy: bool,

    /// Also process files in subdirectories
    #[arg(short = 'r', long)]
    pub recurse: bool,

    /// Lowercase the final name
    #[arg(short = 'l', long, conflicts_with = "uppercase")]
    pub lowercase: bool,

    /// Uppercase the final name
    #[arg(short = 'u', long)]
    pub uppercase: bool,

    /// List what would happen without changing anything
    #[arg(short = 'n', long = "dry-run")]
    pub dry_run: bool,

    /// Overwrite destination files that already exist
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Process directory entries in file name order instead of listing order
    #[arg(long)]
    pub sort: bool,

    /// Output format for the final report
    #[arg(short = 'o', long, value_enum, default_value = "summary")]
    pub output: OutputFormat,

    /// Don't print a line for every file
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Print diagnostics to stderr. Repeat for more detail (-vv, -vvv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Build the run configuration from the parsed arguments
    pub fn to_options(&self) -> Result<RenameOptions, ConfigError> {
        let options = RenameOptions {
            regex: self.regex.clone(),
            prefix: self.prefix.clone(),
            suffix: self.suffix.clone(),
            enumerate: self.enumerate.clone(),
            target_dir: self.target_dir.clone(),
            mode: TransferMode::from_copy_flag(self.copy),
            recurse: self.recurse,
            case: CaseMode::from_flags(self.lowercase, self.uppercase)?,
            dry_run: self.dry_run,
            force: self.force,
            sort: self.sort,
        }
        .normalized();

        options.validate()?;
        Ok(options)
    }
}
