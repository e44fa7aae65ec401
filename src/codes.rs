//! Artwork code scheme
//!
//! An artwork code is `<cityPrefix>_<index>`, e.g. `PA_02`. The stored index
//! is 1-based for every city except the `LIL` prefix, which historically
//! numbered from 0. Both directions of the mapping preserve that exception.

use thiserror::Error;

/// The one prefix whose artwork numbering starts at 0 instead of 1
pub const ZERO_BASED_PREFIX: &str = "LIL";

/// Separator between city prefix and numeric index
pub const CODE_SEPARATOR: char = '_';

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodeError {
    #[error("Missing '_' separator in artwork code: {0}")]
    MissingSeparator(String),
    #[error("Empty city prefix in artwork code: {0}")]
    EmptyPrefix(String),
    #[error("Invalid numeric index in artwork code: {0}")]
    InvalidIndex(String),
}

/// The two halves of a parsed artwork code
///
/// `order` is the stored index exactly as written in the code, with no
/// 0-based/1-based adjustment applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeParts {
    pub city_code: String,
    pub order: u32,
}

/// Build the canonical code for the `sequence`-th artwork of a city
///
/// `sequence` counts from 0 for every city; the stored index shifts to
/// 1-based unless the prefix is [`ZERO_BASED_PREFIX`]. The index is
/// zero-padded to two digits, wider values pass through unpadded.
///
/// # Examples
/// ```
/// use flashr::codes::make_code;
///
/// assert_eq!(make_code("PA", 0), "PA_01");
/// assert_eq!(make_code("LIL", 0), "LIL_00");
/// assert_eq!(make_code("PA", 122), "PA_123");
/// ```
#[must_use]
pub fn make_code(city_code: &str, sequence: u32) -> String {
    let order = if city_code == ZERO_BASED_PREFIX {
        sequence
    } else {
        sequence + 1
    };
    format!("{city_code}{CODE_SEPARATOR}{order:02}")
}

/// Split an artwork code into its city prefix and stored index
///
/// # Errors
/// Returns a [`CodeError`] if the separator is missing, the prefix is empty,
/// or the index segment is not an unsigned integer. A malformed index is
/// never coerced to a default.
pub fn parse_code(code: &str) -> Result<CodeParts, CodeError> {
    let (prefix, index) = code
        .split_once(CODE_SEPARATOR)
        .ok_or_else(|| CodeError::MissingSeparator(code.to_string()))?;

    if prefix.is_empty() {
        return Err(CodeError::EmptyPrefix(code.to_string()));
    }

    let order = index
        .parse::<u32>()
        .map_err(|_| CodeError::InvalidIndex(code.to_string()))?;

    Ok(CodeParts {
        city_code: prefix.to_string(),
        order,
    })
}

/// Extract only the city prefix of a code, without touching the index
///
/// Ledger grouping derives the city this way, by splitting the code itself.
///
/// # Errors
/// Returns [`CodeError::MissingSeparator`] or [`CodeError::EmptyPrefix`]
/// on malformed input.
pub fn city_prefix(code: &str) -> Result<&str, CodeError> {
    let (prefix, _) = code
        .split_once(CODE_SEPARATOR)
        .ok_or_else(|| CodeError::MissingSeparator(code.to_string()))?;

    if prefix.is_empty() {
        return Err(CodeError::EmptyPrefix(code.to_string()));
    }

    Ok(prefix)
}
