use std::fs::{self, File};
use std::io;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::error::WalkError;
use crate::options::{RenameOptions, TransferMode};
use crate::report::{FileAction, ReportEvent, Reporter};

/// What happened to a single matching file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The file was renamed or copied
    Applied,
    /// Destination already existed and `force` was not set
    Skipped,
    /// Announced only, nothing on disk changed
    DryRun,
}

impl Outcome {
    pub fn applied_count(self) -> usize {
        usize::from(self == Self::Applied)
    }
}

/// Move or copy `source` to `destination` according to `options`.
pub fn apply(
    source: &Path,
    destination: &Path,
    options: &RenameOptions,
    reporter: &mut dyn Reporter,
) -> Result<Outcome, WalkError> {
    if !options.force && fs::symlink_metadata(destination).is_ok() {
        reporter.report(ReportEvent::Skipped {
            source: source.to_path_buf(),
            destination: destination.to_path_buf(),
        });
        return Ok(Outcome::Skipped);
    }

    reporter.report(ReportEvent::Action(FileAction {
        source: source.to_path_buf(),
        destination: destination.to_path_buf(),
        mode: options.mode,
        dry_run: options.dry_run,
    }));

    if options.dry_run {
        return Ok(Outcome::DryRun);
    }

    match options.mode {
        TransferMode::Rename => {
            fs::rename(source, destination).map_err(|source_err| WalkError::Rename {
                from: source.to_path_buf(),
                to: destination.to_path_buf(),
                source: source_err,
            })?;
        },
        TransferMode::Copy => {
            copy_file(source, destination, options.force).map_err(|source_err| {
                WalkError::Copy {
                    from: source.to_path_buf(),
                    to: destination.to_path_buf(),
                    source: source_err,
                }
            })?;
        },
    }

    Ok(Outcome::Applied)
}

/// Stream `source` into a temporary file next to `destination` and move it
/// into place once fully written. A failed copy leaves no partial file.
fn copy_file(source: &Path, destination: &Path, overwrite: bool) -> io::Result<()> {
    let dir = destination
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut reader = File::open(source)?;
    let permissions = reader.metadata()?.permissions();

    let mut temp = NamedTempFile::new_in(dir)?;
    io::copy(&mut reader, temp.as_file_mut())?;
    temp.as_file().sync_all()?;
    temp.as_file().set_permissions(permissions)?;

    if overwrite {
        temp.persist(destination).map_err(|err| err.error)?;
    } else {
        temp.persist_noclobber(destination).map_err(|err| err.error)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn options(mode: TransferMode) -> RenameOptions {
        RenameOptions {
            prefix: Some("new_".to_string()),
            mode,
            ..Default::default()
        }
    }

    #[test]
    fn test_rename_moves_file() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("a.txt");
        let destination = temp_dir.path().join("new_a.txt");
        fs::write(&source, "hello").unwrap();

        let mut events: Vec<ReportEvent> = Vec::new();
        let outcome = apply(&source, &destination, &options(TransferMode::Rename), &mut events)
            .unwrap();

        assert_eq!(outcome, Outcome::Applied);
        assert!(!source.exists());
        assert_eq!(fs::read_to_string(&destination).unwrap(), "hello");
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_copy_keeps_source() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("a.txt");
        let destination = temp_dir.path().join("new_a.txt");
        fs::write(&source, "hello").unwrap();

        let mut events: Vec<ReportEvent> = Vec::new();
        let outcome = apply(&source, &destination, &options(TransferMode::Copy), &mut events)
            .unwrap();

        assert_eq!(outcome, Outcome::Applied);
        assert_eq!(fs::read_to_string(&source).unwrap(), "hello");
        assert_eq!(fs::read_to_string(&destination).unwrap(), "hello");

        // Only the two real files remain, the temporary file was persisted
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 2);
    }

    #[test]
    fn test_existing_destination_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("a.txt");
        let destination = temp_dir.path().join("new_a.txt");
        fs::write(&source, "source").unwrap();
        fs::write(&destination, "existing").unwrap();

        let mut events: Vec<ReportEvent> = Vec::new();
        let outcome = apply(&source, &destination, &options(TransferMode::Rename), &mut events)
            .unwrap();

        assert_eq!(outcome, Outcome::Skipped);
        assert_eq!(outcome.applied_count(), 0);
        assert!(source.exists());
        assert_eq!(fs::read_to_string(&destination).unwrap(), "existing");
        assert!(matches!(events[0], ReportEvent::Skipped { .. }));
    }

    #[test]
    fn test_force_overwrites_destination() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("a.txt");
        let destination = temp_dir.path().join("new_a.txt");
        fs::write(&source, "source").unwrap();
        fs::write(&destination, "existing").unwrap();

        let forced = RenameOptions {
            force: true,
            ..options(TransferMode::Copy)
        };
        let mut events: Vec<ReportEvent> = Vec::new();
        let outcome = apply(&source, &destination, &forced, &mut events).unwrap();

        assert_eq!(outcome, Outcome::Applied);
        assert_eq!(fs::read_to_string(&destination).unwrap(), "source");
    }

    #[test]
    fn test_dry_run_touches_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("a.txt");
        let destination = temp_dir.path().join("new_a.txt");
        fs::write(&source, "hello").unwrap();

        let dry = RenameOptions {
            dry_run: true,
            ..options(TransferMode::Rename)
        };
        let mut events: Vec<ReportEvent> = Vec::new();
        let outcome = apply(&source, &destination, &dry, &mut events).unwrap();

        assert_eq!(outcome, Outcome::DryRun);
        assert_eq!(outcome.applied_count(), 0);
        assert!(source.exists());
        assert!(!destination.exists());
        match &events[0] {
            ReportEvent::Action(action) => assert!(action.dry_run),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_copy_of_missing_source_leaves_nothing_behind() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("missing.txt");
        let destination = temp_dir.path().join("new_missing.txt");

        let mut events: Vec<ReportEvent> = Vec::new();
        let err = apply(&source, &destination, &options(TransferMode::Copy), &mut events)
            .unwrap_err();

        assert!(matches!(err, WalkError::Copy { .. }));
        assert!(!destination.exists());
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_rename_failure_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("missing.txt");
        let destination = temp_dir.path().join("new_missing.txt");

        let mut events: Vec<ReportEvent> = Vec::new();
        let err = apply(&source, &destination, &options(TransferMode::Rename), &mut events)
            .unwrap_err();

        assert!(matches!(err, WalkError::Rename { .. }));
        assert!(err.to_string().contains("missing.txt"));
    }
}
