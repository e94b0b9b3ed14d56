//! Reason codes describing what a control-loop cycle did

use serde::{Deserialize, Serialize};

/// Outcome of one control-loop cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum ReasonCode {
    // =========================================================================
    // G001: Reset
    // =========================================================================
    /// Reset input was engaged, state cleared
    G001_RESET,

    // =========================================================================
    // G002: Classification
    // =========================================================================
    /// No activation, or averaged reading below threshold on every axis
    G002_NO_MOVEMENT,
    /// Symbol appended, buffer is still a prefix of some message
    G002_SYMBOL_APPENDED,
    /// Symbol appended, but no message starts with the buffer any more
    G002_SEQUENCE_STUCK,

    // =========================================================================
    // G003: Matching
    // =========================================================================
    /// Buffer equalled a dictionary message and was replayed
    G003_MESSAGE_MATCHED,

    // =========================================================================
    // G004: Output
    // =========================================================================
    /// Buffer matched but the node has no permutation table, nothing lit
    G004_INVALID_NODE,
}

impl ReasonCode {
    /// Get the code string (for logging)
    pub fn code(&self) -> &'static str {
        match self {
            Self::G001_RESET => "G001_RESET",
            Self::G002_NO_MOVEMENT => "G002_NO_MOVEMENT",
            Self::G002_SYMBOL_APPENDED => "G002_SYMBOL_APPENDED",
            Self::G002_SEQUENCE_STUCK => "G002_SEQUENCE_STUCK",
            Self::G003_MESSAGE_MATCHED => "G003_MESSAGE_MATCHED",
            Self::G004_INVALID_NODE => "G004_INVALID_NODE",
        }
    }

    /// Get human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::G001_RESET => "State reset",
            Self::G002_NO_MOVEMENT => "No movement detected",
            Self::G002_SYMBOL_APPENDED => "Gesture added to sequence",
            Self::G002_SEQUENCE_STUCK => "Sequence can no longer match - reset to retry",
            Self::G003_MESSAGE_MATCHED => "Message recognized and replayed",
            Self::G004_INVALID_NODE => "Message recognized but node has no slot table",
        }
    }
}

impl std::fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}
