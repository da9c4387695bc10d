//! Error types for payline evaluation

use thiserror::Error;

/// Payline evaluator errors
#[derive(Error, Debug)]
pub enum PaylineError {
    /// Result code could not be decoded
    #[error("Invalid result code {code:?}: {reason}")]
    InvalidCode { code: String, reason: String },

    /// Wild mask was built for a line of another length
    #[error("Wild mask length {mask} does not match line length {line}")]
    MaskLengthMismatch { line: usize, mask: usize },

    #[error("Config error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PaylineError {
    pub(crate) fn invalid_code(code: &str, reason: impl Into<String>) -> Self {
        Self::InvalidCode {
            code: code.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias
pub type PaylineResult<T> = Result<T, PaylineError>;
