//! Import and export commands - move the ledger through flash-file text

use std::path::Path;

use crate::{FlashrError, codec::EncodeStyle, world::World};

type Result<T> = std::result::Result<T, FlashrError>;

/// Replace the ledger from flash-file text
///
/// The swap is atomic: a decode failure leaves the current ledger in place.
pub fn import(world: &mut World, text: &str, quiet: bool) -> Result<()> {
    world.reload_ledger(text)?;

    if !quiet {
        println!(
            "Imported {} finds across {} cities.",
            world.ledger().total_found(),
            world.ledger().cities_with_any_found()
        );
    }
    Ok(())
}

/// Write the ledger as flash-file text, to a file or stdout
pub fn export(
    world: &World,
    style: EncodeStyle,
    emit_properties: bool,
    output: Option<&Path>,
    quiet: bool,
) -> Result<()> {
    let text = world.serialize_ledger(style, emit_properties);

    match output {
        Some(path) => {
            std::fs::write(path, &text)?;
            if !quiet {
                println!("Exported {} finds to {}", world.ledger().total_found(), path.display());
            }
        }
        None => print!("{text}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::test_world;

    #[test]
    fn test_import_replaces_ledger() {
        let mut world = test_world("PA_01 PA_02");
        import(&mut world, "TK_01", true).unwrap();
        assert_eq!(world.ledger().total_found(), 1);
        assert!(world.ledger().is_found("TK_01"));
    }

    #[test]
    fn test_import_failure_keeps_ledger() {
        let mut world = test_world("PA_01");
        assert!(import(&mut world, "not a code", true).is_err());
        assert!(world.ledger().is_found("PA_01"));
    }

    #[test]
    fn test_export_to_file() {
        let world = test_world("PA_01 PA_02 PA_03");
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        export(&world, EncodeStyle::Compact, false, Some(&path), true).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.trim(), "PA_01+2");
    }
}
