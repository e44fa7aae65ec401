//! Show command - one city's artworks in view under a mode

use crate::{
    FlashrError, output,
    visibility::{self, ViewMode},
    world::World,
};

type Result<T> = std::result::Result<T, FlashrError>;

/// Execute the show command
pub fn execute(world: &World, city_code: &str, mode: ViewMode, quiet: bool) -> Result<()> {
    let catalog = world.catalog();
    let ledger = world.ledger();

    let city = catalog
        .lookup(city_code)
        .ok_or_else(|| FlashrError::InvalidInput(format!("Unknown city: {city_code}")))?;

    if !quiet {
        let found = ledger.city_found_count(city_code);
        println!(
            "{} ({}), {}/{} found, mode: {}",
            city.name,
            city.prefix,
            found,
            city.num_artworks(),
            mode.as_str()
        );
    }

    let mut shown = 0;
    for artwork in city.artworks.values() {
        if visibility::artwork_visible(mode, &artwork.code, ledger, catalog) {
            println!(
                "{}",
                output::artwork_line(artwork, ledger.is_found(&artwork.code), quiet)
            );
            shown += 1;
        }
    }

    if shown == 0 && !quiet {
        println!("  (nothing in view)");
    }

    Ok(())
}
