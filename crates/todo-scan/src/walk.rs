//! Candidate file enumeration.
//!
//! Uses the `ignore` crate for gitignore-aware directory walking with support
//! for a custom ignore file (`.todoscanignore`) and exclude globs. Hidden
//! files are walked; `.git/` never is.
//!
//! Only files whose extension has a registered front-end are candidates.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use ignore::overrides::OverrideBuilder;

use crate::error::ScanError;

/// Per-directory ignore file, same syntax as `.gitignore`.
pub const IGNORE_FILE: &str = ".todoscanignore";

/// Build a walker over the directory `root`.
///
/// `exclude` holds raw gitignore-style globs relative to `root`; they are
/// negated into override rules here.
///
/// # Errors
/// Returns `ScanError::InvalidGlob` when an exclude glob does not compile.
pub fn build_walker(root: &Path, exclude: &[String]) -> Result<ignore::Walk, ScanError> {
    let mut builder = WalkBuilder::new(root);
    builder.hidden(false);
    builder.require_git(false);
    builder.add_custom_ignore_filename(IGNORE_FILE);

    if !exclude.is_empty() {
        let mut overrides = OverrideBuilder::new(root);
        for glob in exclude {
            overrides
                .add(&format!("!{glob}"))
                .map_err(|e| ScanError::invalid_glob(glob, e))?;
        }
        let overrides = overrides
            .build()
            .map_err(|e| ScanError::invalid_glob(&exclude.join(", "), e))?;
        builder.overrides(overrides);
    }

    builder.filter_entry(|entry| {
        !(entry.file_name() == ".git" && entry.file_type().is_some_and(|ft| ft.is_dir()))
    });

    Ok(builder.build())
}

/// Enumerate candidate files under every include root.
///
/// A root naming a file is taken as-is (subject to the extension filter and
/// `exclude`). Directory roots are walked and their files sorted. Files
/// reached from more than one root are reported once, at their first position.
///
/// # Errors
/// Returns `ScanError::MissingRoot` for a root that does not exist and
/// `ScanError::InvalidGlob` for a bad exclude glob. Unreadable entries inside
/// a walk are logged and skipped.
pub fn collect_files(include: &[PathBuf], exclude: &[String]) -> Result<Vec<PathBuf>, ScanError> {
    let excluded = exclude_set(exclude)?;
    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for root in include {
        if root.is_file() {
            if is_candidate(root) && !excluded.is_match(root) && seen.insert(root.clone()) {
                files.push(root.clone());
            }
            continue;
        }
        if !root.exists() {
            return Err(ScanError::MissingRoot { path: root.clone() });
        }

        let mut found: Vec<PathBuf> = build_walker(root, exclude)?
            .filter_map(|result| match result {
                Ok(entry) => Some(entry),
                Err(error) => {
                    tracing::warn!(root = %root.display(), %error, "skipping unreadable entry");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
            .map(ignore::DirEntry::into_path)
            .filter(|path| is_candidate(path))
            .collect();
        found.sort();

        tracing::debug!(root = %root.display(), files = found.len(), "walked include root");
        for path in found {
            if seen.insert(path.clone()) {
                files.push(path);
            }
        }
    }

    Ok(files)
}

fn is_candidate(path: &Path) -> bool {
    todo_parser::frontend_for_path(path).is_some()
}

fn exclude_set(exclude: &[String]) -> Result<GlobSet, ScanError> {
    let mut builder = GlobSetBuilder::new();
    for glob in exclude {
        builder.add(Glob::new(glob).map_err(|e| ScanError::invalid_glob(glob, e))?);
    }
    builder
        .build()
        .map_err(|e| ScanError::invalid_glob(&exclude.join(", "), e))
}
