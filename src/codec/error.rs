//! Codec-specific error types

use crate::codes::CodeError;
use thiserror::Error;

/// Flash-file codec errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// A token was not a valid artwork code
    #[error("Invalid artwork code: {0}")]
    Code(#[from] CodeError),

    /// A run expression had a malformed count segment
    #[error("Invalid run count in token: {0}")]
    InvalidRunCount(String),

    /// A run expression had a malformed base code
    #[error("Invalid run base in token: {0}")]
    InvalidRunBase(String),
}
