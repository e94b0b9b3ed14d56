//! Error type for fallible input handling

use thiserror::Error;

/// Errors raised while configuring the decoder or loading a script.
///
/// Decoding itself never fails; lookups return `Option`.
#[derive(Debug, Error)]
pub enum GestureError {
    #[error("node {0} has no permutation table (expected 1-6)")]
    InvalidNode(u8),

    #[error("script line {line}: {message}")]
    Script { line: usize, message: String },

    #[error("failed to read script: {0}")]
    Io(#[from] std::io::Error),
}

impl GestureError {
    pub fn script(line: usize, message: impl Into<String>) -> Self {
        GestureError::Script { line, message: message.into() }
    }
}
