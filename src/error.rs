use std::path::PathBuf;
use thiserror::Error;

/// Failures that end an audit before any file is read
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Path does not exist: {0}")]
    PathNotFound(PathBuf),
}

/// Tokenizer acquisition failed; the run continues on the word approximation
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Could not load tokenizer '{origin}': {reason}")]
pub struct TokenizerUnavailable {
    /// Hub model id or tokenizer file that was requested
    pub origin: String,
    pub reason: String,
}

pub type Result<T> = std::result::Result<T, AuditError>;
