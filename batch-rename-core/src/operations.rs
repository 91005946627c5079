//! Top-level operation behind the CLI: validate, walk, summarize.

use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::error::ConfigError;
use crate::matcher::Matcher;
use crate::options::RenameOptions;
use crate::output::RunResult;
use crate::report::Reporter;
use crate::walker::Walker;

/// Run a batch rename/copy over the target directory.
///
/// Configuration problems are returned before any file is touched. Problems
/// with individual files or directories end up in [`RunResult::errors`].
pub fn run_operation(
    options: &RenameOptions,
    reporter: &mut dyn Reporter,
) -> Result<RunResult, ConfigError> {
    options.validate()?;
    let matcher = Matcher::new(options.regex.as_deref())?;
    let target_dir = resolve_target_dir(options)?;

    info!(target_dir = %target_dir.display(), "target directory");
    debug!(
        pattern = matcher.pattern().unwrap_or(""),
        prefix = options.prefix.as_deref().unwrap_or(""),
        suffix = options.suffix.as_deref().unwrap_or(""),
        enumerate = options.enumerate.as_deref().unwrap_or(""),
        mode = ?options.mode,
        recurse = options.recurse,
        case = ?options.case,
        dry_run = options.dry_run,
        force = options.force,
        "options"
    );

    let walk = Walker::new(options, &matcher, reporter).walk(&target_dir);

    Ok(RunResult {
        target_dir,
        mode: options.mode,
        dry_run: options.dry_run,
        processed: walk.processed,
        errors: walk.errors.iter().map(ToString::to_string).collect(),
    })
}

/// The configured target, or the working directory, checked to be a directory.
pub fn resolve_target_dir(options: &RenameOptions) -> Result<PathBuf, ConfigError> {
    let target_dir = match &options.target_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().map_err(ConfigError::CurrentDir)?,
    };

    let metadata = fs::metadata(&target_dir).map_err(|source| ConfigError::TargetUnreachable {
        path: target_dir.clone(),
        source,
    })?;

    if !metadata.is_dir() {
        return Err(ConfigError::NotADirectory(target_dir));
    }

    Ok(target_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ReportEvent;
    use tempfile::TempDir;

    #[test]
    fn test_missing_target_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let options = RenameOptions {
            prefix: Some("x_".to_string()),
            target_dir: Some(temp_dir.path().join("nope")),
            ..Default::default()
        };
        let err = resolve_target_dir(&options).unwrap_err();
        assert!(matches!(err, ConfigError::TargetUnreachable { .. }));
    }

    #[test]
    fn test_file_target_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("file.txt");
        fs::write(&file, "").unwrap();

        let options = RenameOptions {
            prefix: Some("x_".to_string()),
            target_dir: Some(file),
            ..Default::default()
        };
        let mut events: Vec<ReportEvent> = Vec::new();
        let err = run_operation(&options, &mut events).unwrap_err();
        assert!(matches!(err, ConfigError::NotADirectory(_)));
    }

    #[test]
    fn test_invalid_regex_touches_nothing() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.png"), "").unwrap();

        let options = RenameOptions {
            prefix: Some("x_".to_string()),
            regex: Some("(".to_string()),
            target_dir: Some(temp_dir.path().to_path_buf()),
            ..Default::default()
        };
        let mut events: Vec<ReportEvent> = Vec::new();
        let err = run_operation(&options, &mut events).unwrap_err();

        assert!(matches!(err, ConfigError::InvalidPattern { .. }));
        assert!(events.is_empty());
        assert!(temp_dir.path().join("a.png").exists());
    }

    #[test]
    fn test_missing_transform_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let options = RenameOptions {
            target_dir: Some(temp_dir.path().to_path_buf()),
            ..Default::default()
        };
        let mut events: Vec<ReportEvent> = Vec::new();
        let err = run_operation(&options, &mut events).unwrap_err();
        assert!(matches!(err, ConfigError::NoTransform));
    }
}
