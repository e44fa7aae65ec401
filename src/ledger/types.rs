//! The `Ledger` store and its operations

use std::collections::{BTreeMap, BTreeSet};

use crate::catalog::Catalog;
use crate::codec::{self, AliasTable, EncodeStyle};
use crate::codes;

use super::error::LedgerError;

/// Find-state store: per-city found-sets plus free-form properties
///
/// Found artworks are kept in true sets, so marking a code twice can never
/// double-count it. A city whose set empties stays in the map; that entry
/// is "ever visited" history and survives serialization round trips.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    flashed_cities: BTreeMap<String, BTreeSet<String>>,
    properties: BTreeMap<String, String>,
}

impl Ledger {
    /// An empty ledger with no properties
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from flash-file text
    ///
    /// Decodes the text (expanding runs and rewriting aliases), groups the
    /// codes by the prefix half of the code itself, and parses `key: value`
    /// properties out of the captured comments (first colon splits, both
    /// halves trimmed; comments without a colon are ignored).
    ///
    /// All-or-nothing: any decode failure leaves the caller's existing
    /// state untouched because no `Ledger` is produced at all.
    ///
    /// # Errors
    /// Returns [`LedgerError::Codec`] if the text fails to decode.
    pub fn from_text(text: &str, aliases: &AliasTable) -> Result<Self, LedgerError> {
        let decoded = codec::decode_str(text, aliases)?;

        let mut flashed_cities: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for code in decoded.codes {
            // grouping derives the city by splitting the code, decode
            // already validated the shape
            let prefix = codes::city_prefix(&code)?.to_string();
            flashed_cities.entry(prefix).or_default().insert(code);
        }

        let mut properties = BTreeMap::new();
        for comment in decoded.comments {
            if let Some((key, value)) = comment.text.split_once(':') {
                properties.insert(key.trim().to_string(), value.trim().to_string());
            }
        }

        Ok(Self {
            flashed_cities,
            properties,
        })
    }

    /// Whether a specific artwork has been found
    #[must_use]
    pub fn is_found(&self, code: &str) -> bool {
        codes::city_prefix(code).is_ok_and(|prefix| {
            self.flashed_cities
                .get(prefix)
                .is_some_and(|found| found.contains(code))
        })
    }

    /// Whether any artwork of the city has been found
    #[must_use]
    pub fn is_city_any_found(&self, city_code: &str) -> bool {
        self.flashed_cities
            .get(city_code)
            .is_some_and(|found| !found.is_empty())
    }

    /// Whether every declared artwork of the city has been found
    ///
    /// Needs the catalog for the declared count; a city the catalog does
    /// not know is never complete.
    #[must_use]
    pub fn is_city_complete(&self, city_code: &str, catalog: &Catalog) -> bool {
        catalog
            .lookup(city_code)
            .is_some_and(|city| self.city_found_count(city_code) == city.num_artworks())
    }

    /// Found count for one city, 0 if the city was never touched
    #[must_use]
    pub fn city_found_count(&self, city_code: &str) -> u32 {
        self.flashed_cities
            .get(city_code)
            .map_or(0, |found| found.len() as u32)
    }

    /// Record a find; idempotent, duplicates are never double-counted
    ///
    /// Returns `true` when the code was newly added.
    ///
    /// # Errors
    /// Returns [`LedgerError::Code`] if the code is malformed.
    pub fn mark(&mut self, code: &str) -> Result<bool, LedgerError> {
        let prefix = codes::city_prefix(code)?.to_string();
        Ok(self
            .flashed_cities
            .entry(prefix)
            .or_default()
            .insert(code.to_string()))
    }

    /// Remove a find; a non-member (or unknown city) is a no-op
    ///
    /// An emptied city entry stays in the map.
    ///
    /// # Errors
    /// Returns [`LedgerError::Code`] if the code is malformed.
    pub fn unmark(&mut self, code: &str) -> Result<bool, LedgerError> {
        let prefix = codes::city_prefix(code)?;
        Ok(self
            .flashed_cities
            .get_mut(prefix)
            .is_some_and(|found| found.remove(code)))
    }

    /// Total found artworks across all cities
    #[must_use]
    pub fn total_found(&self) -> u32 {
        self.flashed_cities
            .values()
            .map(|found| found.len() as u32)
            .sum()
    }

    /// Number of cities with at least one find
    #[must_use]
    pub fn cities_with_any_found(&self) -> u32 {
        self.flashed_cities
            .values()
            .filter(|found| !found.is_empty())
            .count() as u32
    }

    /// Number of cities where every declared artwork is found
    #[must_use]
    pub fn cities_complete(&self, catalog: &Catalog) -> u32 {
        self.flashed_cities
            .keys()
            .filter(|city_code| self.is_city_complete(city_code, catalog))
            .count() as u32
    }

    /// City prefixes the ledger has entries for (including emptied ones),
    /// with the highest stored index referenced in each
    #[must_use]
    pub fn referenced_cities(&self) -> Vec<(String, u32)> {
        self.flashed_cities
            .iter()
            .map(|(city_code, found)| {
                let max_order = found
                    .iter()
                    .filter_map(|code| codes::parse_code(code).ok())
                    .map(|parts| parts.order)
                    .max()
                    .unwrap_or(0);
                (city_code.clone(), max_order)
            })
            .collect()
    }

    /// Value of a free-form property, if the loaded file carried one
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// All properties, in key order
    #[must_use]
    pub const fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    /// Serialize back to flash-file text
    ///
    /// Found-sets flatten to a flat code list and re-encode in the given
    /// style. Properties are re-emitted as `# key: value` comment lines
    /// only when `emit_properties` is set; the historical format dropped
    /// them on save, so that remains the default elsewhere.
    #[must_use]
    pub fn serialize(&self, style: EncodeStyle, emit_properties: bool) -> String {
        let mut out = String::new();

        if emit_properties {
            for (key, value) in &self.properties {
                out.push_str(&format!("# {key}: {value}\n"));
            }
        }

        let codes: Vec<String> = self
            .flashed_cities
            .values()
            .flat_map(|found| found.iter().cloned())
            .collect();
        out.push_str(&codec::encode(&codes, style).join(" "));
        out.push('\n');
        out
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
