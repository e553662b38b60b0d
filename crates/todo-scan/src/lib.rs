//! # todo-scan
//!
//! Turns include roots into a deterministic file list and scans it:
//! - [`walk`]: gitignore-aware enumeration with `.todoscanignore` and exclude
//!   globs, restricted to files some front-end can parse
//! - [`scan`]: parallel extraction with per-file failure isolation and the
//!   assignee post-filter

pub mod error;
pub mod scan;
pub mod walk;

pub use error::ScanError;
pub use scan::{ScanFailure, ScanReport, Scanner};
pub use walk::collect_files;
