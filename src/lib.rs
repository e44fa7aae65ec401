//! Flashr - a find-state ledger over a worldwide mosaic artwork catalog
//!
//! This library tracks which uniquely-coded artworks a single user has found
//! ("flashed"), grouped by city, and round-trips that state through a
//! human-editable text format (the flash file).

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod codec;
pub mod codes;
pub mod commands;
pub mod config;
pub mod ledger;
pub mod output;
pub mod visibility;
pub mod world;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum FlashrError {
    /// Malformed artwork code
    #[error("Code error: {0}")]
    CodeError(#[from] codes::CodeError),
    /// Flash-file codec error
    #[error("Flash file error: {0}")]
    CodecError(#[from] codec::CodecError),
    /// Catalog descriptor or lookup error
    #[error("Catalog error: {0}")]
    CatalogError(#[from] catalog::CatalogError),
    /// Ledger error
    #[error("Ledger error: {0}")]
    LedgerError(#[from] ledger::LedgerError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
