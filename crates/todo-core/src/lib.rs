//! # todo-core
//!
//! Core types shared across all todoscan crates:
//! - [`CommentEntry`], the record produced for one tagged comment
//! - The assignee post-filter applied to a finished scan
//! - Severity derivation used by the CLI to pick an exit status

pub mod entry;
pub mod filter;
pub mod severity;

pub use entry::CommentEntry;
pub use filter::filter_by_assignee;
pub use severity::Severity;
