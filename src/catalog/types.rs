//! Catalog data structures
//!
//! - `ArtworkStatus`: closed health-tag set, with the feed's letter codes
//! - `Artwork` / `City`: the static catalog records
//! - `WorldDescriptor` / `CityDescriptor`: serde models of the cities
//!   descriptor document
//! - `StatusFeed` / `StatusRecord`: serde models of the status feed

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::codes::{self, ZERO_BASED_PREFIX};

/// Health tag of a single artwork, a closed set
///
/// The status feed historically used single letters; both the letters and
/// spelled-out names are accepted. Anything else degrades to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtworkStatus {
    /// In place and visitable
    Active,
    /// Damaged but still present
    Degraded,
    /// Gone; no longer discoverable
    Destroyed,
    /// No status information
    #[default]
    Unknown,
}

impl ArtworkStatus {
    /// Map a feed tag to a status; total, never errors
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "A" | "active" => Self::Active,
            "D" | "degraded" => Self::Degraded,
            "X" | "destroyed" => Self::Destroyed,
            _ => Self::Unknown,
        }
    }

    /// Whether an unfound artwork with this status still counts as
    /// discoverable (flashable)
    #[must_use]
    pub const fn is_discoverable(self) -> bool {
        matches!(self, Self::Active | Self::Degraded)
    }
}

/// One catalogued artwork
///
/// Code, city, and index are fixed at build time; only the status and
/// last-seen date ever change, fed by the status feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artwork {
    pub code: String,
    pub city_code: String,
    /// Stored index, exactly as it appears in the code
    pub order: u32,
    pub status: ArtworkStatus,
    pub last_seen: Option<NaiveDate>,
}

impl Artwork {
    #[must_use]
    pub fn new(code: String, city_code: String, order: u32) -> Self {
        Self {
            code,
            city_code,
            order,
            status: ArtworkStatus::Unknown,
            last_seen: None,
        }
    }
}

/// A named grouping of artworks sharing a code prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    pub name: String,
    pub prefix: String,
    pub isocountry: String,
    pub points: u32,
    /// Code → artwork, one entry per declared artwork
    pub artworks: BTreeMap<String, Artwork>,
}

impl City {
    /// Build a city from its descriptor entry, pre-computing every member
    /// code through the code scheme
    #[must_use]
    pub fn from_descriptor(desc: &CityDescriptor) -> Self {
        let mut city = Self {
            name: desc.name.clone(),
            prefix: desc.prefix.clone(),
            isocountry: desc.iso.clone(),
            points: desc.pts,
            artworks: BTreeMap::new(),
        };
        city.populate(desc.invaders);
        city
    }

    /// Build a placeholder for a city the catalog never declared but a
    /// ledger references: its own code as name, zero points, just enough
    /// artworks to cover the highest referenced index
    #[must_use]
    pub fn synthetic(prefix: &str, max_order: u32) -> Self {
        let count = if prefix == ZERO_BASED_PREFIX {
            max_order + 1
        } else {
            max_order
        };
        let mut city = Self {
            name: prefix.to_string(),
            prefix: prefix.to_string(),
            isocountry: String::new(),
            points: 0,
            artworks: BTreeMap::new(),
        };
        city.populate(count);
        city
    }

    fn populate(&mut self, count: u32) {
        for i in 0..count {
            let code = codes::make_code(&self.prefix, i);
            // `order` is the stored index as written in the code, which is
            // the sequence shifted by one except for the zero-based prefix
            let order = if self.prefix == ZERO_BASED_PREFIX { i } else { i + 1 };
            self.artworks
                .insert(code.clone(), Artwork::new(code, self.prefix.clone(), order));
        }
    }

    /// Declared artwork count; always equal to the number of records
    #[must_use]
    pub fn num_artworks(&self) -> u32 {
        self.artworks.len() as u32
    }
}

/// Descriptor entry for one city, as found in the cities document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityDescriptor {
    pub name: String,
    pub prefix: String,
    #[serde(default)]
    pub iso: String,
    pub invaders: u32,
    #[serde(default)]
    pub pts: u32,
}

/// The cities descriptor document: `{ "cities": { "number": N, "details": { ... } } }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldDescriptor {
    pub cities: CitiesSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitiesSection {
    /// Declared city count; informational, the details map is authoritative
    pub number: u32,
    pub details: BTreeMap<String, CityDescriptor>,
}

/// One entry of the status feed document
///
/// A record present without a `status` field means the artwork is known
/// good; codes absent from the feed entirely stay `Unknown`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRecord {
    #[serde(default)]
    pub status: Option<String>,
    /// Last-seen date, `YYYY-MM-DD`
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl StatusRecord {
    #[must_use]
    pub fn resolve_status(&self) -> ArtworkStatus {
        self.status
            .as_deref()
            .map_or(ArtworkStatus::Active, ArtworkStatus::from_tag)
    }
}

/// The status feed: artwork code → status record
pub type StatusFeed = HashMap<String, StatusRecord>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_tag() {
        assert_eq!(ArtworkStatus::from_tag("A"), ArtworkStatus::Active);
        assert_eq!(ArtworkStatus::from_tag("active"), ArtworkStatus::Active);
        assert_eq!(ArtworkStatus::from_tag("D"), ArtworkStatus::Degraded);
        assert_eq!(ArtworkStatus::from_tag("X"), ArtworkStatus::Destroyed);
        assert_eq!(ArtworkStatus::from_tag("??"), ArtworkStatus::Unknown);
    }

    #[test]
    fn test_status_discoverable() {
        assert!(ArtworkStatus::Active.is_discoverable());
        assert!(ArtworkStatus::Degraded.is_discoverable());
        assert!(!ArtworkStatus::Destroyed.is_discoverable());
        assert!(!ArtworkStatus::Unknown.is_discoverable());
    }

    #[test]
    fn test_city_from_descriptor_codes() {
        let desc = CityDescriptor {
            name: "Paris".into(),
            prefix: "PA".into(),
            iso: "FR".into(),
            invaders: 3,
            pts: 10,
        };
        let city = City::from_descriptor(&desc);
        assert_eq!(city.num_artworks(), 3);
        let codes: Vec<_> = city.artworks.keys().cloned().collect();
        assert_eq!(codes, vec!["PA_01", "PA_02", "PA_03"]);
    }

    #[test]
    fn test_artwork_order_is_stored_index() {
        let desc = CityDescriptor {
            name: "Paris".into(),
            prefix: "PA".into(),
            iso: "FR".into(),
            invaders: 3,
            pts: 10,
        };
        let city = City::from_descriptor(&desc);
        for (code, artwork) in &city.artworks {
            let parts = codes::parse_code(code).unwrap();
            assert_eq!(artwork.order, parts.order);
        }
        assert_eq!(city.artworks["PA_01"].order, 1);
        assert_eq!(city.artworks["PA_03"].order, 3);
    }

    #[test]
    fn test_artwork_order_zero_based_prefix() {
        let city = City::synthetic("LIL", 1);
        assert_eq!(city.artworks["LIL_00"].order, 0);
        assert_eq!(city.artworks["LIL_01"].order, 1);
    }

    #[test]
    fn test_city_zero_based_prefix_codes() {
        let desc = CityDescriptor {
            name: "Lille".into(),
            prefix: "LIL".into(),
            iso: "FR".into(),
            invaders: 2,
            pts: 5,
        };
        let city = City::from_descriptor(&desc);
        let codes: Vec<_> = city.artworks.keys().cloned().collect();
        assert_eq!(codes, vec!["LIL_00", "LIL_01"]);
    }

    #[test]
    fn test_synthetic_city_shape() {
        let city = City::synthetic("ZZ", 1);
        assert_eq!(city.name, "ZZ");
        assert_eq!(city.points, 0);
        assert_eq!(city.num_artworks(), 1);
        assert!(city.artworks.contains_key("ZZ_01"));
    }

    #[test]
    fn test_synthetic_city_zero_based() {
        let city = City::synthetic("LIL", 1);
        assert_eq!(city.num_artworks(), 2);
        assert!(city.artworks.contains_key("LIL_00"));
        assert!(city.artworks.contains_key("LIL_01"));
    }

    #[test]
    fn test_status_record_defaults() {
        let record = StatusRecord::default();
        assert_eq!(record.resolve_status(), ArtworkStatus::Active);

        let record = StatusRecord {
            status: Some("D".into()),
            date: None,
        };
        assert_eq!(record.resolve_status(), ArtworkStatus::Degraded);
    }

    #[test]
    fn test_descriptor_document_shape() {
        let json = r#"{
            "cities": {
                "number": 1,
                "details": {
                    "PA": { "name": "Paris", "prefix": "PA", "iso": "FR", "invaders": 3, "pts": 10 }
                }
            }
        }"#;
        let desc: WorldDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(desc.cities.number, 1);
        assert_eq!(desc.cities.details["PA"].invaders, 3);
    }
}
