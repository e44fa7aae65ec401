//! Output formatting for CLI display
//!
//! This module provides utilities for formatting cities, artworks, and
//! ledger totals for the terminal.

use colored::Colorize;

use crate::catalog::{Artwork, ArtworkStatus, City};

/// Format a city line with its found/declared progress
#[must_use]
pub fn city_line(city: &City, found: u32, flashable: u32, quiet: bool) -> String {
    let declared = city.num_artworks();
    if quiet {
        return city.prefix.clone();
    }

    let progress = if found == declared && declared > 0 {
        format!("{found}/{declared}").green().bold().to_string()
    } else if found > 0 {
        format!("{found}/{declared}").yellow().to_string()
    } else {
        format!("{found}/{declared}").normal().to_string()
    };

    let mut line = format!("  {:4} {} [{}]", city.prefix, city.name, progress);
    if !city.isocountry.is_empty() {
        line.push_str(&format!(" ({})", city.isocountry));
    }
    if flashable > 0 {
        line.push_str(&format!(" {} flashable", flashable));
    }
    line
}

/// Format one artwork with its found marker and status
#[must_use]
pub fn artwork_line(artwork: &Artwork, found: bool, quiet: bool) -> String {
    if quiet {
        return artwork.code.clone();
    }

    let marker = if found {
        "F".green().bold().to_string()
    } else {
        "-".normal().to_string()
    };
    let mut line = format!("  [{marker}] {} ({})", artwork.code, status_label(artwork.status));
    if let Some(date) = artwork.last_seen {
        line.push_str(&format!(", seen {date}"));
    }
    line
}

/// Human-readable status label, colored by severity
#[must_use]
pub fn status_label(status: ArtworkStatus) -> String {
    match status {
        ArtworkStatus::Active => "active".green().to_string(),
        ArtworkStatus::Degraded => "degraded".yellow().to_string(),
        ArtworkStatus::Destroyed => "destroyed".red().to_string(),
        ArtworkStatus::Unknown => "unknown".normal().to_string(),
    }
}

/// Format a labeled total count
#[must_use]
pub fn total_line(label: &str, value: u32, quiet: bool) -> String {
    if quiet {
        value.to_string()
    } else {
        format!("  {label}: {}", value.to_string().bold())
    }
}
