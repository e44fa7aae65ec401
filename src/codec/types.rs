//! Codec data structures
//!
//! - `Token`: one validated flash-file token (bare code or run expression)
//! - `CommentLine`: a captured comment with its 1-based source line number
//! - `Tokenized` / `DecodedFile`: the two stages of reading a flash file
//! - `AliasTable`: data-driven legacy-code rewrites applied during decode

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One syntactic token of a flash file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A single artwork code, e.g. `PA_0042`
    Code(String),
    /// A run expression `base+count`: the base code plus `count` further
    /// sequential codes
    Run { base: String, count: u32 },
}

/// A full-line comment, captured verbatim with its source position
///
/// `text` is the comment body with the leading marker stripped and trimmed.
/// The codec only locates comments; `key: value` interpretation belongs to
/// the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentLine {
    /// 1-based line number in the source text
    pub line: usize,
    pub text: String,
}

/// Output of [`tokenize`](crate::codec::tokenize)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokenized {
    pub tokens: Vec<Token>,
    pub comments: Vec<CommentLine>,
}

/// Output of [`decode_str`](crate::codec::decode_str): the expanded flat
/// code list plus the captured comments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedFile {
    pub codes: Vec<String>,
    pub comments: Vec<CommentLine>,
}

/// How [`encode`](crate::codec::encode) lays out its tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EncodeStyle {
    /// One token per code
    #[default]
    Plain,
    /// Collapse consecutive same-city sequential codes into `base+count`
    Compact,
}

/// Legacy alias rewrites, old code to current code
///
/// Historical flash files carry a handful of codes that were later
/// renumbered; decoding rewrites them so the rest of the system only ever
/// sees current codes. The table is plain data so alternative tables can be
/// injected (or shipped in configuration).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasTable {
    aliases: HashMap<String, String>,
}

impl AliasTable {
    /// An empty table, rewriting nothing
    #[must_use]
    pub fn empty() -> Self {
        Self {
            aliases: HashMap::new(),
        }
    }

    /// Build a table from explicit (old, new) pairs
    #[must_use]
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            aliases: pairs
                .iter()
                .map(|(old, new)| ((*old).to_string(), (*new).to_string()))
                .collect(),
        }
    }

    /// Rewrite a code if the table knows it, otherwise return it unchanged
    #[must_use]
    pub fn resolve<'a>(&'a self, code: &'a str) -> &'a str {
        self.aliases.get(code).map_or(code, String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

impl Default for AliasTable {
    /// The built-in historical rewrites
    ///
    /// `PA_1111` was a duplicate entry, renumbered to `PA_1057` in a later
    /// catalog wave.
    fn default() -> Self {
        Self::from_pairs(&[("PA_1111", "PA_1057")])
    }
}
