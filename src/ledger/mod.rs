//! The find-state ledger ("flasher")
//!
//! Tracks which artworks the user has found, grouped by city prefix, plus
//! the free-form `key: value` properties carried in flash-file comments
//! (owner name, date, rank). State is loaded from flash-file text in one
//! atomic step and can be serialized back at any time.
//!
//! # Examples
//!
//! ```
//! use flashr::codec::AliasTable;
//! use flashr::ledger::Ledger;
//!
//! let mut ledger = Ledger::from_text("# owner: ana\nPA_01 PA_03+1", &AliasTable::default()).unwrap();
//! assert_eq!(ledger.total_found(), 3);
//! assert_eq!(ledger.property("owner"), Some("ana"));
//!
//! ledger.mark("TK_119").unwrap();
//! assert!(ledger.is_found("TK_119"));
//! ```

pub mod error;
pub mod types;

pub use error::LedgerError;
pub use types::Ledger;
