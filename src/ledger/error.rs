//! Ledger-specific error types

use crate::codec::CodecError;
use crate::codes::CodeError;
use thiserror::Error;

/// Errors from loading or mutating the find-state ledger
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// The flash-file text failed to decode; no ledger state was replaced
    #[error("Flash file error: {0}")]
    Codec(#[from] CodecError),

    /// A code handed to mark/unmark was malformed
    #[error("Code error: {0}")]
    Code(#[from] CodeError),
}
