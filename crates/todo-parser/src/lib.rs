//! # todo-parser
//!
//! Tagged comment extraction for todoscan.
//!
//! Files are parsed with ast-grep; a language [`FrontEnd`] yields comment
//! groups with the span of the node each group is attached to. Every group
//! is then run through a fixed pipeline:
//! - [`context`]: the attached node rendered without comments
//! - [`tokenizer`]: one record per physical comment line
//! - [`matcher`]: tag and assignee recognition
//! - [`accumulator`]: entries opened on tag lines, extended by continuations

pub mod accumulator;
pub mod context;
pub mod error;
pub mod extract;
pub mod frontend;
pub mod matcher;
pub mod parser;
pub mod source_map;
pub mod tokenizer;

pub use error::ParserError;
pub use extract::{ExtractOptions, display_name, extract_entries, extract_file};
pub use frontend::{FrontEnd, frontend_for_path};
