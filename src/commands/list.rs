//! List command - cities in view under a mode

use crate::{
    FlashrError, output,
    visibility::{self, ViewMode},
    world::World,
};

type Result<T> = std::result::Result<T, FlashrError>;

/// Execute the list command
pub fn execute(world: &World, mode: ViewMode, quiet: bool) -> Result<()> {
    let catalog = world.catalog();
    let ledger = world.ledger();

    let visible: Vec<&String> = catalog
        .sorted_city_codes()
        .iter()
        .filter(|city_code| visibility::city_visible(mode, city_code, ledger, catalog))
        .collect();

    if visible.is_empty() {
        if !quiet {
            println!("No cities in view (mode: {}).", mode.as_str());
        }
        return Ok(());
    }

    if !quiet {
        println!("Cities in view (mode: {}):", mode.as_str());
    }
    for city_code in visible {
        // sorted codes always resolve
        if let Some(city) = catalog.lookup(city_code) {
            let found = ledger.city_found_count(city_code);
            let flashable = visibility::flashable_count(city_code, ledger, catalog);
            println!("{}", output::city_line(city, found, flashable, quiet));
        }
    }

    Ok(())
}
