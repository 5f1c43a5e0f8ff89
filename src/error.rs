use thiserror::Error;

use crate::password::MIN_LENGTH;

/// Rejected password request. Deterministic, so callers should not retry.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidRequest {
    #[error("Password length must be at least {min} characters (got {length})")]
    LengthTooShort { length: usize, min: usize },

    #[error("Select at least one character type (uppercase, lowercase, digits, symbols)")]
    NoCharacterClass,
}

impl InvalidRequest {
    pub(crate) fn too_short(length: usize) -> Self {
        Self::LengthTooShort {
            length,
            min: MIN_LENGTH,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
