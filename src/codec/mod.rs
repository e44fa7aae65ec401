//! Flash-file codec
//!
//! This module implements the lossless round trip between the human-editable
//! flash-file text format and a flat list of artwork codes.
//!
//! # Format
//!
//! A flash file is whitespace-separated tokens, three shapes:
//!
//! - a bare artwork code: `PA_0042`
//! - a run expression: `PA_03+4`, meaning `PA_03` plus the 4 next sequential
//!   codes (`PA_04` through `PA_07`)
//! - a full-line comment starting with `#`, captured with its line number
//!   rather than tokenized; comment bodies shaped `key: value` become ledger
//!   properties downstream
//!
//! Decoding also applies a data-driven table of legacy alias rewrites, so
//! historical codes in old files normalize to their current equivalents.
//!
//! # Examples
//!
//! ```
//! use flashr::codec::{decode_str, encode, AliasTable, EncodeStyle};
//!
//! let decoded = decode_str("# owner: ana\nPA_01 PA_03+2", &AliasTable::default()).unwrap();
//! assert_eq!(decoded.codes, vec!["PA_01", "PA_03", "PA_04", "PA_05"]);
//! assert_eq!(decoded.comments[0].line, 1);
//!
//! let tokens = encode(&decoded.codes, EncodeStyle::Compact);
//! assert_eq!(tokens, vec!["PA_01", "PA_03+2"]);
//! ```

pub mod error;
pub mod operations;
pub mod types;

pub use error::CodecError;
pub use operations::{decode, decode_str, encode, tokenize};
pub use types::{AliasTable, CommentLine, DecodedFile, EncodeStyle, Token, Tokenized};

/// Marker starting a full-line comment
pub const COMMENT_MARKER: char = '#';

/// Marker splitting a run expression into base code and extra count
pub const RUN_MARKER: char = '+';
