//! Scan error types for todo-scan.

use std::path::PathBuf;

/// Errors that abort file enumeration. Per-file extraction failures are not
/// errors here; they are collected in [`crate::ScanReport::failures`].
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// An include root does not exist.
    #[error("include path not found: {}", path.display())]
    MissingRoot { path: PathBuf },

    /// An exclude glob could not be compiled.
    #[error("invalid exclude glob '{glob}': {message}")]
    InvalidGlob { glob: String, message: String },
}

impl ScanError {
    pub(crate) fn invalid_glob(glob: &str, error: impl std::fmt::Display) -> Self {
        Self::InvalidGlob {
            glob: glob.to_string(),
            message: error.to_string(),
        }
    }
}
