use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal problems detected before anything on disk is touched.
///
/// Messages leave out the underlying cause; it is reachable through
/// `source()` and printed by the error chain.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid regex '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("cannot combine --lowercase and --uppercase")]
    ConflictingCase,

    #[error("specify one of --prefix, --suffix or --enumerate")]
    NoTransform,

    #[error("could not determine current directory, please specify one with --target-dir")]
    CurrentDir(#[source] io::Error),

    #[error("target directory {} is not reachable", .path.display())]
    TargetUnreachable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("target directory {} is not a directory", .0.display())]
    NotADirectory(PathBuf),
}

/// Recoverable problems collected while walking; the walk continues past them.
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("failed to list directory {}: {source}", .path.display())]
    Listing {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("file name cannot be represented on this platform: {}", .0.display())]
    NonUtf8Name(PathBuf),

    #[error("failed to rename {} to {}: {source}", .from.display(), .to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to copy {} to {}: {source}", .from.display(), .to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}
