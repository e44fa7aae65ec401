//! Stats command - ledger and flashable totals

use crate::{FlashrError, output, visibility, world::World};

type Result<T> = std::result::Result<T, FlashrError>;

/// Execute the stats command
pub fn execute(world: &World, quiet: bool) -> Result<()> {
    let catalog = world.catalog();
    let ledger = world.ledger();

    if !quiet {
        if let Some(owner) = owner_name(world) {
            println!("Ledger of {owner}");
        }
        println!("Totals:");
    }

    let (flashable_artworks, flashable_cities) = flashable_totals(world);

    println!("{}", output::total_line("found", ledger.total_found(), quiet));
    println!(
        "{}",
        output::total_line("cities started", ledger.cities_with_any_found(), quiet)
    );
    println!(
        "{}",
        output::total_line("cities complete", ledger.cities_complete(catalog), quiet)
    );
    println!(
        "{}",
        output::total_line("flashable artworks", flashable_artworks, quiet)
    );
    println!(
        "{}",
        output::total_line("flashable cities", flashable_cities, quiet)
    );
    println!(
        "{}",
        output::total_line("catalog artworks", catalog.num_artworks(), quiet)
    );
    println!(
        "{}",
        output::total_line("catalog cities", catalog.num_cities(), quiet)
    );

    Ok(())
}

/// Owner name from the ledger header, `pseudo` first, then `owner`
#[must_use]
pub fn owner_name(world: &World) -> Option<&str> {
    let ledger = world.ledger();
    ledger.property("pseudo").or_else(|| ledger.property("owner"))
}

/// World-level flashable counts: total flashable artworks, and the number
/// of cities with at least one
#[must_use]
pub fn flashable_totals(world: &World) -> (u32, u32) {
    let catalog = world.catalog();
    let ledger = world.ledger();

    let mut artworks = 0;
    let mut cities = 0;
    for city_code in catalog.sorted_city_codes() {
        let count = visibility::flashable_count(city_code, ledger, catalog);
        if count > 0 {
            artworks += count;
            cities += 1;
        }
    }
    (artworks, cities)
}
