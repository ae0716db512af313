use thiserror::Error;

/// Errors produced when decoding an external identifier string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdError {
    #[error("invalid hex in identifier: {0}")]
    InvalidHex(String),

    #[error("invalid identifier length: expected {expected} hex characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}
