//! Catalog-specific error types

use crate::codes::CodeError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors from building or querying the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Malformed artwork code during a lookup
    #[error("Code error: {0}")]
    Code(#[from] CodeError),

    /// City prefix not declared in the catalog
    #[error("Unknown city: {0}")]
    UnknownCity(String),

    /// Code parses and the city exists, but the index is out of the
    /// declared range
    #[error("Unknown artwork: {0}")]
    UnknownArtwork(String),

    /// Descriptor or status feed failed to deserialize
    #[error("Invalid catalog document: {0}")]
    Document(#[from] serde_json::Error),

    /// Represents an I/O error while reading a catalog document
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
