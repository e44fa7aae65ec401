//! Flashr CLI application entry point
//!
//! This is the main executable for the flashr find-state ledger. It provides
//! a command-line interface for tracking which artworks of a worldwide
//! mosaic catalog have been found, backed by a human-editable flash file.
//!
//! # Usage
//!
//! ```bash
//! # Ledger totals (default command)
//! flashr
//! flashr stats
//!
//! # Cities still worth visiting
//! flashr list --mode flashable
//!
//! # Everything in one city
//! flashr show PA --mode all
//!
//! # Record finds (saves the flash file)
//! flashr mark PA_01 PA_02
//! flashr unmark PA_02
//!
//! # Move the ledger through flash-file text
//! flashr import holiday_finds.txt
//! flashr export -o backup.txt --compact
//! ```
//!
//! # Configuration
//!
//! Configuration is stored in the user's config directory
//! (`~/.config/flashr/config.toml` on Linux) and points at the cities
//! descriptor, the status feed, and the flash file. Each path can be
//! overridden per invocation with `--cities`, `--statuses`, `--flash-file`.

use flashr::{
    FlashrError,
    cli::{Cli, Commands, ConfigCommands},
    codec::EncodeStyle,
    commands::{self, mark::MarkAction},
    config::FlashrConfig,
    world::World,
};
use std::path::PathBuf;

type Result<T> = std::result::Result<T, FlashrError>;

/// Paths the world is built from, after CLI overrides are applied
struct WorldPaths {
    cities: PathBuf,
    statuses: Option<PathBuf>,
    flash_file: PathBuf,
}

/// Resolve document paths: CLI override first, then config
///
/// # Errors
/// Returns `FlashrError::InvalidInput` if no cities descriptor is known;
/// the catalog cannot be built without one.
fn resolve_paths(cli: &Cli, config: &FlashrConfig) -> Result<WorldPaths> {
    let cities = cli
        .cities
        .clone()
        .or_else(|| config.cities_file.clone())
        .ok_or_else(|| {
            FlashrError::InvalidInput(
                "No cities descriptor configured. Use 'flashr config set cities_file=<path>' or pass --cities <path>.".into(),
            )
        })?;

    let statuses = cli.statuses.clone().or_else(|| config.status_file.clone());
    let flash_file = match &cli.flash_file {
        Some(path) => path.clone(),
        None => config.flash_file_path()?,
    };

    Ok(WorldPaths {
        cities,
        statuses,
        flash_file,
    })
}

/// Write the ledger back to the flash file, creating parent directories
fn save_ledger(world: &World, path: &PathBuf, config: &FlashrConfig, quiet: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let text = world.serialize_ledger(config.encode_style, config.emit_properties);
    std::fs::write(path, text)?;
    if !quiet {
        println!("Saved {}", path.display());
    }
    Ok(())
}

/// Handle the config command - show or change configuration
fn handle_config_command(
    mut config: FlashrConfig,
    command: &ConfigCommands,
    quiet: bool,
) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            let toml_string = toml::to_string_pretty(&config)
                .map_err(|e| FlashrError::InvalidInput(format!("Cannot render config: {e}")))?;
            print!("{toml_string}");
        }
        ConfigCommands::Set { setting } => {
            let (key, value) = setting.split_once('=').ok_or_else(|| {
                FlashrError::InvalidInput(format!("Expected KEY=VALUE, got '{setting}'"))
            })?;

            match key {
                "cities_file" => config.cities_file = Some(PathBuf::from(value)),
                "status_file" => config.status_file = Some(PathBuf::from(value)),
                "flash_file" => config.flash_file = Some(PathBuf::from(value)),
                "default_mode" => {
                    commands::parse_mode(value)?;
                    config.default_mode = value.to_string();
                }
                "encode_style" => {
                    config.encode_style = match value {
                        "plain" => EncodeStyle::Plain,
                        "compact" => EncodeStyle::Compact,
                        _ => {
                            return Err(FlashrError::InvalidInput(format!(
                                "Unknown encode style '{value}' (valid: plain, compact)"
                            )));
                        }
                    };
                }
                "emit_properties" => {
                    config.emit_properties = parse_bool(key, value)?;
                }
                "quiet" => {
                    config.quiet = parse_bool(key, value)?;
                }
                _ => {
                    return Err(FlashrError::InvalidInput(format!(
                        "Unknown configuration key: {key}"
                    )));
                }
            }

            config.save()?;
            if !quiet {
                println!("Set {key} = {value}");
            }
        }
    }
    Ok(())
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    value
        .parse::<bool>()
        .map_err(|_| FlashrError::InvalidInput(format!("Expected true/false for {key}, got '{value}'")))
}

/// Main entry point for the flashr application
///
/// Loads configuration, parses command-line arguments, builds the world
/// context, and dispatches to the appropriate command handler.
///
/// # Errors
///
/// Returns `FlashrError` if configuration loading fails, the world cannot
/// be built, or any command handler returns an error.
fn main() -> Result<()> {
    let config = FlashrConfig::load()?;

    let cli = Cli::parse_args();

    let quiet = cli.quiet || config.quiet;

    let command = cli.get_command();

    if let Commands::Config { command } = &command {
        return handle_config_command(config, command, quiet);
    }

    let paths = resolve_paths(&cli, &config)?;
    let mut world = World::build_from_files(
        &paths.cities,
        paths.statuses.as_deref(),
        Some(paths.flash_file.as_path()),
    )?;

    match &command {
        Commands::Stats => {
            commands::stats(&world, quiet)?;
        }
        Commands::List { mode } => {
            let mode = commands::parse_mode(mode.as_deref().unwrap_or(&config.default_mode))?;
            commands::list(&world, mode, quiet)?;
        }
        Commands::Show { city, mode } => {
            let mode = commands::parse_mode(mode.as_deref().unwrap_or(&config.default_mode))?;
            commands::show(&world, city, mode, quiet)?;
        }
        Commands::Mark { codes } => {
            let changed = commands::mark(&mut world, codes, MarkAction::Mark, quiet)?;
            if changed > 0 {
                save_ledger(&world, &paths.flash_file, &config, quiet)?;
            }
        }
        Commands::Unmark { codes } => {
            let changed = commands::mark(&mut world, codes, MarkAction::Unmark, quiet)?;
            if changed > 0 {
                save_ledger(&world, &paths.flash_file, &config, quiet)?;
            }
        }
        Commands::Import { path } => {
            let text = std::fs::read_to_string(path)?;
            commands::import(&mut world, &text, quiet)?;
            save_ledger(&world, &paths.flash_file, &config, quiet)?;
        }
        Commands::Export {
            output,
            compact,
            properties,
        } => {
            let style = if *compact {
                EncodeStyle::Compact
            } else {
                config.encode_style
            };
            let emit_properties = *properties || config.emit_properties;
            commands::export(&world, style, emit_properties, output.as_deref(), quiet)?;
        }
        Commands::Config { .. } => unreachable!(),
    }

    Ok(())
}
