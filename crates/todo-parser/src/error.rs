//! Parser error types for todo-parser.

/// Errors that can occur while turning one file into comment entries.
///
/// Every variant is per-file: callers log it and move on to the next file.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("Parse failed for {language} at line {line}: {message}")]
    Parse {
        language: String,
        line: u32,
        message: String,
    },

    #[error("File is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("Language not supported: {0}")]
    UnsupportedLanguage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
