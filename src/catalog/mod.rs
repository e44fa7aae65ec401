//! Static city/artwork catalog
//!
//! The catalog is built once from the cities descriptor document and never
//! rebuilt; the one exception is placeholder cities synthesized when a
//! loaded ledger references a prefix the descriptor does not declare.
//!
//! # Examples
//!
//! ```
//! use flashr::catalog::Catalog;
//!
//! let json = r#"{ "cities": { "number": 1, "details": {
//!     "PA": { "name": "Paris", "prefix": "PA", "iso": "FR", "invaders": 3, "pts": 10 }
//! } } }"#;
//! let catalog = Catalog::from_json(json).unwrap();
//! assert_eq!(catalog.num_cities(), 1);
//! assert!(catalog.lookup_artwork("PA_02").is_ok());
//! ```

pub mod error;
pub mod types;

pub use error::{CatalogError, Result};
pub use types::{
    Artwork, ArtworkStatus, CitiesSection, City, CityDescriptor, StatusFeed, StatusRecord,
    WorldDescriptor,
};

use std::collections::BTreeMap;
use std::path::Path;

use crate::codes;

/// All declared cities plus a name-sorted ordering of their codes
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    cities: BTreeMap<String, City>,
    sorted_city_codes: Vec<String>,
}

impl Catalog {
    /// Build the catalog from a parsed descriptor
    ///
    /// `sorted_city_codes` orders by display name, case-insensitively; the
    /// sort is stable so equal names keep descriptor order.
    #[must_use]
    pub fn build_from(descriptor: &WorldDescriptor) -> Self {
        let mut cities = BTreeMap::new();
        for desc in descriptor.cities.details.values() {
            let city = City::from_descriptor(desc);
            cities.insert(city.prefix.clone(), city);
        }

        let mut sorted_city_codes: Vec<String> = cities.keys().cloned().collect();
        sorted_city_codes.sort_by_key(|code| cities[code].name.to_lowercase());

        Self {
            cities,
            sorted_city_codes,
        }
    }

    /// Parse and build from descriptor JSON text
    ///
    /// # Errors
    /// Returns [`CatalogError::Document`] if the JSON does not match the
    /// descriptor shape.
    pub fn from_json(json: &str) -> Result<Self> {
        let descriptor: WorldDescriptor = serde_json::from_str(json)?;
        Ok(Self::build_from(&descriptor))
    }

    /// Read and build from a descriptor file
    ///
    /// # Errors
    /// Returns [`CatalogError::Io`] or [`CatalogError::Document`].
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Apply a status feed, updating artwork statuses and last-seen dates
    ///
    /// Codes the catalog does not know are skipped; artworks the feed does
    /// not mention keep their `Unknown` status.
    pub fn apply_status_feed(&mut self, feed: &StatusFeed) {
        for (code, record) in feed {
            let Ok(parts) = codes::parse_code(code) else {
                continue;
            };
            if let Some(city) = self.cities.get_mut(&parts.city_code)
                && let Some(artwork) = city.artworks.get_mut(code)
            {
                artwork.status = record.resolve_status();
                artwork.last_seen = record.date;
            }
        }
    }

    /// Look up a city by its prefix
    #[must_use]
    pub fn lookup(&self, city_code: &str) -> Option<&City> {
        self.cities.get(city_code)
    }

    /// Look up an artwork by its full code
    ///
    /// # Errors
    /// Returns [`CatalogError::UnknownCity`] if the prefix is undeclared,
    /// [`CatalogError::UnknownArtwork`] if the index is out of the declared
    /// range, or a [`CatalogError::Code`] if the code is malformed.
    pub fn lookup_artwork(&self, code: &str) -> Result<&Artwork> {
        let parts = codes::parse_code(code)?;
        let city = self
            .cities
            .get(&parts.city_code)
            .ok_or_else(|| CatalogError::UnknownCity(parts.city_code.clone()))?;
        city.artworks
            .get(code)
            .ok_or_else(|| CatalogError::UnknownArtwork(code.to_string()))
    }

    /// City codes ordered by display name (synthetic cities appended in
    /// the order they were discovered)
    #[must_use]
    pub fn sorted_city_codes(&self) -> &[String] {
        &self.sorted_city_codes
    }

    #[must_use]
    pub fn num_cities(&self) -> u32 {
        self.cities.len() as u32
    }

    /// Total declared artworks across all cities
    #[must_use]
    pub fn num_artworks(&self) -> u32 {
        self.cities.values().map(City::num_artworks).sum()
    }

    /// Whether a prefix is declared (including synthesized placeholders)
    #[must_use]
    pub fn contains(&self, city_code: &str) -> bool {
        self.cities.contains_key(city_code)
    }

    /// Create a placeholder city for an undeclared prefix a ledger
    /// references, appended after the name-sorted codes
    ///
    /// `max_order` is the highest stored index seen for that prefix. No-op
    /// if the city already exists.
    pub fn add_synthetic_city(&mut self, prefix: &str, max_order: u32) {
        if self.cities.contains_key(prefix) {
            return;
        }
        self.cities
            .insert(prefix.to_string(), City::synthetic(prefix, max_order));
        self.sorted_city_codes.push(prefix.to_string());
    }
}
