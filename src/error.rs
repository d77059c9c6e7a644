use std::path::PathBuf;

use thiserror::Error;

/// Domain checker error types
///
/// `Domain` and `DomainChecker` never fail; these errors come from reading
/// domain lists and writing verdicts.
#[derive(Error, Debug)]
pub enum CheckerError {
    #[error("Parse error at line {line}: {message}")]
    ParseErrorAtLine { line: usize, message: String },

    #[error("Invalid count at line {line}: {value:?}")]
    InvalidCount { line: usize, value: String },

    #[error("Unexpected end of input: expected {expected} domains, found {found}")]
    UnexpectedEof { expected: usize, found: usize },

    #[error("Invalid domain at line {line}: {domain:?}")]
    InvalidDomain { line: usize, domain: String },

    #[error("Failed to read domain list '{}': {source}", .path.display())]
    FileError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CheckerError>;
