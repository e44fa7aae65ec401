//! Testing utilities for flashr
//!
//! Shared fixtures: a small three-city descriptor (including the 0-based
//! `LIL` prefix), a status feed, and builders for catalogs and worlds.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalog::{Catalog, StatusFeed};
use crate::world::World;

/// Three cities: Paris (3 artworks), Lille (2, 0-based codes), Tokyo (4)
pub const SAMPLE_DESCRIPTOR: &str = r#"{
    "cities": {
        "number": 3,
        "details": {
            "PA":  { "name": "Paris", "prefix": "PA",  "iso": "FR", "invaders": 3, "pts": 10 },
            "LIL": { "name": "Lille", "prefix": "LIL", "iso": "FR", "invaders": 2, "pts": 20 },
            "TK":  { "name": "Tokyo", "prefix": "TK",  "iso": "JP", "invaders": 4, "pts": 50 }
        }
    }
}"#;

/// Statuses for Paris: active, degraded, destroyed; `PA_02` also carries a
/// last-seen date. Everything unmentioned stays unknown.
pub const SAMPLE_STATUS_FEED: &str = r#"{
    "PA_01": { "status": "A" },
    "PA_02": { "status": "D", "date": "2025-07-10" },
    "PA_03": { "status": "X" }
}"#;

/// Catalog built from [`SAMPLE_DESCRIPTOR`], no statuses applied
///
/// # Panics
/// Panics if the fixture descriptor fails to parse.
#[must_use]
pub fn sample_catalog() -> Catalog {
    Catalog::from_json(SAMPLE_DESCRIPTOR).expect("fixture descriptor parses")
}

/// Catalog with [`SAMPLE_STATUS_FEED`] applied on top
///
/// # Panics
/// Panics if a fixture document fails to parse.
#[must_use]
pub fn sample_catalog_with_statuses() -> Catalog {
    let mut catalog = sample_catalog();
    let feed: StatusFeed =
        serde_json::from_str(SAMPLE_STATUS_FEED).expect("fixture feed parses");
    catalog.apply_status_feed(&feed);
    catalog
}

/// Full world from the fixtures, loaded with the given flash-file text
///
/// # Panics
/// Panics if a fixture document or the ledger text fails to parse.
#[must_use]
pub fn test_world(ledger_text: &str) -> World {
    World::build(
        SAMPLE_DESCRIPTOR,
        Some(SAMPLE_STATUS_FEED),
        Some(ledger_text),
    )
    .expect("fixture world builds")
}
