//! Integration tests for flashr
//!
//! These tests verify end-to-end behavior of the core: catalog building,
//! flash-file round trips, ledger mutation, and visibility queries, all
//! through the public `World` API.

use flashr::catalog::ArtworkStatus;
use flashr::codec::EncodeStyle;
use flashr::visibility::{self, ViewMode};
use flashr::world::World;
use std::fs;

const DESCRIPTOR: &str = r#"{
    "cities": {
        "number": 3,
        "details": {
            "PA":  { "name": "Paris", "prefix": "PA",  "iso": "FR", "invaders": 3, "pts": 10 },
            "LIL": { "name": "Lille", "prefix": "LIL", "iso": "FR", "invaders": 2, "pts": 20 },
            "TK":  { "name": "Tokyo", "prefix": "TK",  "iso": "JP", "invaders": 4, "pts": 50 }
        }
    }
}"#;

const STATUS_FEED: &str = r#"{
    "PA_01": { "status": "A" },
    "PA_02": { "status": "D" },
    "PA_03": { "status": "X" },
    "TK_01": { "status": "A" },
    "TK_02": { "status": "A" }
}"#;

fn world(ledger_text: &str) -> World {
    World::build(DESCRIPTOR, Some(STATUS_FEED), Some(ledger_text)).unwrap()
}

#[test]
fn test_partial_city_counts() {
    let world = world("PA_01 PA_02");
    let ledger = world.ledger();

    assert!(ledger.is_city_any_found("PA"));
    assert!(!ledger.is_city_complete("PA", world.catalog()));
    assert_eq!(ledger.total_found(), 2);
}

#[test]
fn test_complete_city_hidden_in_missing_mode() {
    let world = world("PA_01 PA_02 PA_03");
    let ledger = world.ledger();
    let catalog = world.catalog();

    assert!(ledger.is_city_complete("PA", catalog));
    assert!(!visibility::city_visible(ViewMode::Missing, "PA", ledger, catalog));
    assert!(visibility::city_visible(ViewMode::FullCity, "PA", ledger, catalog));
    // unfinished cities still show as missing
    assert!(visibility::city_visible(ViewMode::Missing, "TK", ledger, catalog));
}

#[test]
fn test_unmark_reopens_city() {
    let mut world = world("PA_01 PA_02 PA_03");
    world.unmark("PA_02").unwrap();

    assert_eq!(world.ledger().total_found(), 2);
    assert!(!world.ledger().is_city_complete("PA", world.catalog()));
    assert!(visibility::city_visible(
        ViewMode::Missing,
        "PA",
        world.ledger(),
        world.catalog()
    ));
}

#[test]
fn test_unknown_city_synthesized_into_listing() {
    let world = world("ZZ_01");
    let catalog = world.catalog();

    let city = catalog.lookup("ZZ").expect("synthetic city exists");
    assert_eq!(city.name, "ZZ");
    assert_eq!(city.num_artworks(), 1);
    assert_eq!(city.points, 0);
    assert!(catalog.sorted_city_codes().contains(&"ZZ".to_string()));
}

#[test]
fn test_status_feed_drives_flashable() {
    let world = world("");
    let ledger = world.ledger();
    let catalog = world.catalog();

    // PA: active + degraded discoverable, destroyed not
    assert_eq!(visibility::flashable_count("PA", ledger, catalog), 2);
    // TK: two active, two absent from the feed (unknown)
    assert_eq!(visibility::flashable_count("TK", ledger, catalog), 2);
    // LIL: nothing in the feed at all
    assert_eq!(visibility::flashable_count("LIL", ledger, catalog), 0);
    assert!(!visibility::city_visible(ViewMode::Flashable, "LIL", ledger, catalog));

    assert_eq!(
        catalog.lookup_artwork("LIL_00").unwrap().status,
        ArtworkStatus::Unknown
    );
}

#[test]
fn test_run_expressions_and_comments() {
    let world = world("# owner: ana\n# date: 2025-07-10\nPA_01+2 LIL_00");
    let ledger = world.ledger();

    assert_eq!(ledger.total_found(), 4);
    assert!(ledger.is_city_complete("PA", world.catalog()));
    assert_eq!(ledger.property("owner"), Some("ana"));
    assert_eq!(ledger.property("date"), Some("2025-07-10"));
}

#[test]
fn test_legacy_alias_rewritten_on_load() {
    let world = world("PA_1111");
    assert!(world.ledger().is_found("PA_1057"));
    assert!(!world.ledger().is_found("PA_1111"));
}

#[test]
fn test_flash_file_roundtrip_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let descriptor_path = dir.path().join("cities.json");
    let flash_path = dir.path().join("flashfile.txt");
    fs::write(&descriptor_path, DESCRIPTOR).unwrap();
    fs::write(&flash_path, "# owner: ana\nPA_01 PA_02 TK_119").unwrap();

    let world = World::build_from_files(&descriptor_path, None, Some(flash_path.as_path())).unwrap();
    assert_eq!(world.ledger().total_found(), 3);
    // TK_119 is outside TK's declared range but still a TK find
    assert_eq!(world.ledger().city_found_count("TK"), 1);

    let exported = world.serialize_ledger(EncodeStyle::Compact, true);
    fs::write(&flash_path, &exported).unwrap();

    let reloaded = World::build_from_files(&descriptor_path, None, Some(flash_path.as_path())).unwrap();
    assert_eq!(reloaded.ledger().total_found(), 3);
    assert!(reloaded.ledger().is_found("PA_01"));
    assert!(reloaded.ledger().is_found("TK_119"));
    assert_eq!(reloaded.ledger().property("owner"), Some("ana"));
}

#[test]
fn test_missing_flash_file_means_empty_ledger() {
    let dir = tempfile::tempdir().unwrap();
    let descriptor_path = dir.path().join("cities.json");
    fs::write(&descriptor_path, DESCRIPTOR).unwrap();

    let world = World::build_from_files(
        &descriptor_path,
        None,
        Some(dir.path().join("does_not_exist.txt").as_path()),
    )
    .unwrap();
    assert_eq!(world.ledger().total_found(), 0);
}

#[test]
fn test_mark_persists_through_serialize() {
    let mut world = world("");
    world.mark("LIL_00").unwrap();
    world.mark("LIL_01").unwrap();
    world.mark("LIL_01").unwrap(); // duplicate, not double-counted

    assert_eq!(world.ledger().total_found(), 2);
    assert!(world.ledger().is_city_complete("LIL", world.catalog()));

    let text = world.serialize_ledger(EncodeStyle::Plain, false);
    let mut reloaded = world.clone();
    reloaded.reload_ledger(&text).unwrap();
    assert!(reloaded.ledger().is_city_complete("LIL", reloaded.catalog()));
}
