use std::ffi::OsStr;
use std::path::Path;
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

use crate::error::WalkError;
use crate::matcher::Matcher;
use crate::naming::compute_new_os_name;
use crate::operator::{self, Outcome};
use crate::options::RenameOptions;
use crate::report::Reporter;

/// Files processed and problems collected over one traversal
#[derive(Debug, Default)]
pub struct WalkResult {
    pub processed: usize,
    pub errors: Vec<WalkError>,
}

impl WalkResult {
    pub fn merge(&mut self, other: Self) {
        self.processed += other.processed;
        self.errors.extend(other.errors);
    }
}

/// Depth-first traversal applying the rename/copy pipeline to every file.
pub struct Walker<'a> {
    options: &'a RenameOptions,
    matcher: &'a Matcher,
    reporter: &'a mut dyn Reporter,
}

impl<'a> Walker<'a> {
    pub fn new(
        options: &'a RenameOptions,
        matcher: &'a Matcher,
        reporter: &'a mut dyn Reporter,
    ) -> Self {
        Self {
            options,
            matcher,
            reporter,
        }
    }

    /// Process every file directly inside `dir`, descending into
    /// subdirectories when recursion is enabled.
    ///
    /// Never fails: per-file and listing problems end up in the result.
    pub fn walk(&mut self, dir: &Path) -> WalkResult {
        debug!(dir = %dir.display(), "walking directory");

        let (entries, mut result) = self.list(dir);

        // Enumeration index for this directory only. It advances on every
        // file visited, matched or not.
        let mut index = 0usize;

        for entry in entries {
            if entry.file_type().is_dir() {
                if self.options.recurse {
                    let sub = self.walk(entry.path());
                    result.merge(sub);
                }
                continue;
            }

            match self.process_file(entry.path(), entry.file_name(), index) {
                Ok(outcome) => {
                    result.processed += outcome.map_or(0, Outcome::applied_count);
                },
                Err(err) => {
                    debug!(error = %err, "file failed");
                    result.errors.push(err);
                },
            }
            index += 1;
        }

        result
    }

    /// Snapshot the immediate entries of `dir` so renames made while
    /// processing never show up in the same listing.
    fn list(&self, dir: &Path) -> (Vec<DirEntry>, WalkResult) {
        let mut walker = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false);
        if self.options.sort {
            walker = walker.sort_by_file_name();
        }

        let mut entries = Vec::new();
        let mut result = WalkResult::default();
        for entry in walker {
            match entry {
                Ok(entry) => entries.push(entry),
                Err(source) => {
                    debug!(dir = %dir.display(), error = %source, "listing failed");
                    result.errors.push(WalkError::Listing {
                        path: dir.to_path_buf(),
                        source,
                    });
                },
            }
        }

        (entries, result)
    }

    /// Match, compute the new name and hand off to the file operator.
    /// Returns `None` when the file does not match the filter.
    fn process_file(
        &mut self,
        path: &Path,
        name: &OsStr,
        index: usize,
    ) -> Result<Option<Outcome>, WalkError> {
        if !self.matcher.matches(name) {
            trace!(file = %path.display(), "no match");
            return Ok(None);
        }

        let new_name = compute_new_os_name(name, self.options, index)
            .ok_or_else(|| WalkError::NonUtf8Name(path.to_path_buf()))?;
        let destination = path.with_file_name(new_name);

        operator::apply(path, &destination, self.options, &mut *self.reporter).map(Some)
    }
}
