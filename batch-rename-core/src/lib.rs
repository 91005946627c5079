#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod error;
pub mod matcher;
pub mod naming;
pub mod operations;
pub mod operator;
pub mod options;
pub mod output;
pub mod report;
pub mod walker;

pub use error::{ConfigError, WalkError};
pub use matcher::Matcher;
pub use naming::{compute_new_name, compute_new_os_name, split_extension};
pub use operations::{resolve_target_dir, run_operation};
pub use operator::Outcome;
pub use options::{CaseMode, RenameOptions, TransferMode};
pub use output::{OutputFormat, OutputFormatter, RunResult};
pub use report::{ConsoleReporter, FileAction, ReportEvent, Reporter};
pub use walker::{WalkResult, Walker};
