//! Visibility-mode query engine
//!
//! A view mode is a named filter deciding which cities and artworks are in
//! scope for a display pass. Modes are a closed enum; the string boundary
//! (`ViewMode::parse`) fails closed, so presentation code handing in an
//! unrecognized mode name sees nothing rather than everything.
//!
//! All predicates are pure reads over the ledger and catalog.

use crate::catalog::Catalog;
use crate::ledger::Ledger;

/// Named visibility filter, a closed set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Everything
    All,
    /// Cities not yet complete
    Missing,
    /// Only found artworks and the cities holding them
    FlashedOnly,
    /// Only complete cities
    FullCity,
    /// Cities still offering something discoverable and unfound
    #[default]
    Flashable,
}

impl ViewMode {
    /// Every mode, in cycling order
    pub const ALL_MODES: [Self; 5] = [
        Self::All,
        Self::Missing,
        Self::FlashedOnly,
        Self::FullCity,
        Self::Flashable,
    ];

    /// Parse a mode name; `None` for anything outside the closed set
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "all" => Some(Self::All),
            "missing" => Some(Self::Missing),
            "flashedonly" => Some(Self::FlashedOnly),
            "fullcity" => Some(Self::FullCity),
            "flashable" => Some(Self::Flashable),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Missing => "missing",
            Self::FlashedOnly => "flashedonly",
            Self::FullCity => "fullcity",
            Self::Flashable => "flashable",
        }
    }
}

/// Whether a city is in view under the given mode
#[must_use]
pub fn city_visible(mode: ViewMode, city_code: &str, ledger: &Ledger, catalog: &Catalog) -> bool {
    match mode {
        ViewMode::All => true,
        ViewMode::FlashedOnly => ledger.is_city_any_found(city_code),
        ViewMode::Missing => !ledger.is_city_complete(city_code, catalog),
        ViewMode::FullCity => ledger.is_city_complete(city_code, catalog),
        ViewMode::Flashable => flashable_count(city_code, ledger, catalog) > 0,
    }
}

/// City visibility from a raw mode name; unrecognized names fail closed
#[must_use]
pub fn city_visible_named(
    mode: &str,
    city_code: &str,
    ledger: &Ledger,
    catalog: &Catalog,
) -> bool {
    ViewMode::parse(mode)
        .is_some_and(|mode| city_visible(mode, city_code, ledger, catalog))
}

/// Whether an individual artwork is in view under the given mode
///
/// The owning city must pass first; a malformed code is never visible.
#[must_use]
pub fn artwork_visible(mode: ViewMode, code: &str, ledger: &Ledger, catalog: &Catalog) -> bool {
    let Ok(parts) = crate::codes::parse_code(code) else {
        return false;
    };
    if !city_visible(mode, &parts.city_code, ledger, catalog) {
        return false;
    }

    match mode {
        ViewMode::All | ViewMode::FullCity => true,
        ViewMode::FlashedOnly => ledger.is_found(code),
        ViewMode::Missing => !ledger.is_found(code),
        ViewMode::Flashable => {
            !ledger.is_found(code)
                && catalog
                    .lookup_artwork(code)
                    .is_ok_and(|artwork| artwork.status.is_discoverable())
        }
    }
}

/// Artwork visibility from a raw mode name; unrecognized names fail closed
#[must_use]
pub fn artwork_visible_named(mode: &str, code: &str, ledger: &Ledger, catalog: &Catalog) -> bool {
    ViewMode::parse(mode).is_some_and(|mode| artwork_visible(mode, code, ledger, catalog))
}

/// How many artworks of a city are still flashable: discoverable by status
/// and not yet found
///
/// A complete city short-circuits to 0 regardless of per-artwork statuses;
/// so does a city the catalog does not know.
#[must_use]
pub fn flashable_count(city_code: &str, ledger: &Ledger, catalog: &Catalog) -> u32 {
    if ledger.is_city_complete(city_code, catalog) {
        return 0;
    }
    let Some(city) = catalog.lookup(city_code) else {
        return 0;
    };

    city.artworks
        .values()
        .filter(|artwork| artwork.status.is_discoverable() && !ledger.is_found(&artwork.code))
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::AliasTable;
    use crate::testing::{sample_catalog, sample_catalog_with_statuses};

    fn ledger(text: &str) -> Ledger {
        Ledger::from_text(text, &AliasTable::default()).unwrap()
    }

    #[test]
    fn test_parse_known_modes() {
        for mode in ViewMode::ALL_MODES {
            assert_eq!(ViewMode::parse(mode.as_str()), Some(mode));
        }
    }

    #[test]
    fn test_parse_unknown_mode() {
        assert_eq!(ViewMode::parse("everything"), None);
        assert_eq!(ViewMode::parse(""), None);
    }

    #[test]
    fn test_city_all_always_visible() {
        let catalog = sample_catalog();
        let ledger = ledger("");
        assert!(city_visible(ViewMode::All, "PA", &ledger, &catalog));
        assert!(city_visible(ViewMode::All, "ZZ", &ledger, &catalog));
    }

    #[test]
    fn test_city_flashedonly() {
        let catalog = sample_catalog();
        let ledger = ledger("PA_01");
        assert!(city_visible(ViewMode::FlashedOnly, "PA", &ledger, &catalog));
        assert!(!city_visible(ViewMode::FlashedOnly, "TK", &ledger, &catalog));
    }

    #[test]
    fn test_city_missing_and_fullcity() {
        let catalog = sample_catalog();
        let ledger = ledger("PA_01 PA_02 PA_03");
        assert!(!city_visible(ViewMode::Missing, "PA", &ledger, &catalog));
        assert!(city_visible(ViewMode::FullCity, "PA", &ledger, &catalog));
        assert!(city_visible(ViewMode::Missing, "TK", &ledger, &catalog));
        assert!(!city_visible(ViewMode::FullCity, "TK", &ledger, &catalog));
    }

    #[test]
    fn test_city_flashable_needs_discoverable_unfound() {
        // statuses: PA_01 active, PA_02 degraded, PA_03 destroyed
        let catalog = sample_catalog_with_statuses();
        let empty = ledger("");
        assert!(city_visible(ViewMode::Flashable, "PA", &empty, &catalog));
        assert_eq!(flashable_count("PA", &empty, &catalog), 2);

        let partial = ledger("PA_01 PA_02");
        // only the destroyed one is left unfound
        assert_eq!(flashable_count("PA", &partial, &catalog), 0);
        assert!(!city_visible(ViewMode::Flashable, "PA", &partial, &catalog));
    }

    #[test]
    fn test_flashable_zero_once_complete() {
        let catalog = sample_catalog_with_statuses();
        let full = ledger("PA_01 PA_02 PA_03");
        assert_eq!(flashable_count("PA", &full, &catalog), 0);
    }

    #[test]
    fn test_flashable_unknown_city_is_zero() {
        let catalog = sample_catalog();
        let ledger = ledger("");
        assert_eq!(flashable_count("ZZ", &ledger, &catalog), 0);
    }

    #[test]
    fn test_artwork_visibility_follows_city() {
        let catalog = sample_catalog();
        let ledger = ledger("PA_01");

        // city passes flashedonly, then only found artworks show
        assert!(artwork_visible(ViewMode::FlashedOnly, "PA_01", &ledger, &catalog));
        assert!(!artwork_visible(ViewMode::FlashedOnly, "PA_02", &ledger, &catalog));

        // city TK fails flashedonly entirely
        assert!(!artwork_visible(ViewMode::FlashedOnly, "TK_01", &ledger, &catalog));

        assert!(artwork_visible(ViewMode::Missing, "PA_02", &ledger, &catalog));
        assert!(!artwork_visible(ViewMode::Missing, "PA_01", &ledger, &catalog));
        assert!(artwork_visible(ViewMode::All, "PA_01", &ledger, &catalog));
    }

    #[test]
    fn test_artwork_malformed_code_not_visible() {
        let catalog = sample_catalog();
        let ledger = ledger("");
        assert!(!artwork_visible(ViewMode::All, "garbage", &ledger, &catalog));
    }

    #[test]
    fn test_named_queries_fail_closed() {
        let catalog = sample_catalog();
        let ledger = ledger("PA_01");
        assert!(city_visible_named("all", "PA", &ledger, &catalog));
        assert!(!city_visible_named("everything", "PA", &ledger, &catalog));
        assert!(!artwork_visible_named("bogus", "PA_01", &ledger, &catalog));
    }
}
