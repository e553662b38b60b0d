//! Parallel scanning of an enumerated file list.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use todo_config::TodoConfig;
use todo_core::{CommentEntry, filter_by_assignee};
use todo_parser::{ExtractOptions, ParserError, extract_file};

/// A file that could not be turned into entries.
#[derive(Debug)]
pub struct ScanFailure {
    pub path: PathBuf,
    pub error: ParserError,
}

/// Outcome of one scan.
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Entries in file order, then source order, after the assignee filter.
    pub entries: Vec<CommentEntry>,
    /// Files that were skipped, in file order.
    pub failures: Vec<ScanFailure>,
}

/// Immutable settings for one run.
#[derive(Debug, Clone)]
pub struct Scanner {
    options: ExtractOptions,
    assignee: String,
    include_unassigned: bool,
}

impl Scanner {
    #[must_use]
    pub const fn new(options: ExtractOptions, assignee: String, include_unassigned: bool) -> Self {
        Self {
            options,
            assignee,
            include_unassigned,
        }
    }

    #[must_use]
    pub fn from_config(config: &TodoConfig) -> Self {
        Self::new(
            ExtractOptions {
                patterns: config.scan.patterns.clone(),
                rel_root: config.scan.rel_root.clone(),
            },
            config.filter.assignee.clone(),
            config.filter.include_unassigned,
        )
    }

    /// Scan `files` in parallel. Failing files are logged and reported, never
    /// fatal.
    #[must_use]
    pub fn scan(&self, files: &[PathBuf]) -> ScanReport {
        self.scan_with(files, |_| {})
    }

    /// Like [`Self::scan`], calling `on_file` once per finished file from
    /// whichever worker processed it.
    #[must_use]
    pub fn scan_with<F>(&self, files: &[PathBuf], on_file: F) -> ScanReport
    where
        F: Fn(&Path) + Sync,
    {
        let results: Vec<_> = files
            .par_iter()
            .map(|path| {
                let result = extract_file(path, &self.options);
                on_file(path);
                result
            })
            .collect();

        let mut report = ScanReport::default();
        let mut found = Vec::new();
        for (path, result) in files.iter().zip(results) {
            match result {
                Ok(entries) => found.extend(entries),
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "skipping file");
                    report.failures.push(ScanFailure {
                        path: path.clone(),
                        error,
                    });
                }
            }
        }

        let total = found.len();
        report.entries = filter_by_assignee(found, &self.assignee, self.include_unassigned);
        tracing::debug!(
            files = files.len(),
            failures = report.failures.len(),
            total,
            kept = report.entries.len(),
            "scan complete"
        );
        report
    }
}
