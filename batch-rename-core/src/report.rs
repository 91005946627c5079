use nu_ansi_term::Color as AnsiColor;
use std::path::PathBuf;

use crate::options::TransferMode;

/// A rename or copy about to be performed (or only announced, in dry-run mode)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAction {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub mode: TransferMode,
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEvent {
    Action(FileAction),
    /// Destination already existed and `force` was not set
    Skipped {
        source: PathBuf,
        destination: PathBuf,
    },
}

/// Receives per-file events as the walk progresses
pub trait Reporter {
    fn report(&mut self, event: ReportEvent);
}

impl Reporter for Vec<ReportEvent> {
    fn report(&mut self, event: ReportEvent) {
        self.push(event);
    }
}

/// Prints actions to stdout and skip warnings to stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter {
    pub use_color: bool,
    /// Suppress action lines; warnings are still printed
    pub quiet: bool,
}

impl ConsoleReporter {
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self { use_color, quiet }
    }
}

impl Reporter for ConsoleReporter {
    fn report(&mut self, event: ReportEvent) {
        match event {
            ReportEvent::Action(action) => {
                if !self.quiet {
                    println!("{}", format_action(&action, self.use_color));
                }
            },
            ReportEvent::Skipped { destination, .. } => {
                eprintln!("{}", format_skip(&destination, self.use_color));
            },
        }
    }
}

pub fn format_action(action: &FileAction, use_color: bool) -> String {
    let verb = action.mode.verb();
    let source = action.source.display();
    let destination = action.destination.display();

    let line = if use_color {
        format!(
            "{} {} to {}",
            AnsiColor::Cyan.bold().paint(verb),
            source,
            AnsiColor::Green.paint(destination.to_string())
        )
    } else {
        format!("{verb} {source} to {destination}")
    };

    if action.dry_run {
        let tag = if use_color {
            AnsiColor::Yellow.paint("[dry-run]").to_string()
        } else {
            "[dry-run]".to_string()
        };
        format!("{tag} {line}")
    } else {
        line
    }
}

pub fn format_skip(destination: &std::path::Path, use_color: bool) -> String {
    let message = format!(
        "File {} already exists, not copying/renaming. Use --force to override",
        destination.display()
    );
    if use_color {
        format!("{} {}", AnsiColor::Yellow.bold().paint("Warning:"), message)
    } else {
        format!("Warning: {message}")
    }
}
