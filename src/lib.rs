pub mod archive;
pub mod cli;
pub mod config;
pub mod demos;
pub mod error;
pub mod game;
pub mod garden;
pub mod logger;
pub mod pipeline;
pub mod processing;

use clap::Parser;
use cli::{ArchiveDemo, Cli, Commands, ErrorsDemo, GardenDemo};
use config::NexusConfig;
use error::NexusResult;
use logger::{LogLevel, LOGGER};
use std::io::Write;

/// Binary entry point
///
/// Never exits non-zero: argument errors, help output and demonstration
/// failures are all printed and the function returns normally.
pub fn run() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return;
        }
    };

    let config = match &cli.config {
        Some(path) => NexusConfig::load(path).unwrap_or_else(|e| {
            eprintln!("{}; using defaults", e);
            NexusConfig::default()
        }),
        None => NexusConfig::default(),
    };

    let filter = if cli.verbose { "debug" } else { config.log_level.as_str() };
    logger::init_tracing(filter);
    let level = filter.parse::<LogLevel>().unwrap_or(LogLevel::Warn);
    LOGGER.set_min_level(level);
    tracing::debug!(command = ?cli.selected(), "starting demonstration");

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();
    if let Err(e) = run_command(&cli.selected(), &config, &mut out, &mut err) {
        let _ = writeln!(err, "Error: {}", e);
    }

    if cli.show_log {
        for entry in LOGGER.get_logs() {
            let _ = writeln!(
                out,
                "[{}] {:<5} {}: {}",
                entry.timestamp.format("%H:%M:%S%.3f"),
                entry.level.as_str(),
                entry.source,
                entry.message
            );
        }
    }
}

/// Run one demonstration against the given output channels
pub fn run_command<O: Write, E: Write>(
    command: &Commands,
    config: &NexusConfig,
    out: &mut O,
    err: &mut E,
) -> NexusResult<()> {
    use demos::{archive, errors, game, garden, pipeline};

    match command {
        Commands::Pipeline => pipeline::run_pipeline(out, config),
        Commands::Processors => pipeline::run_processors(out),
        Commands::Streams => pipeline::run_streams(out),
        Commands::Garden { demo } => match demo {
            GardenDemo::Intro => garden::run_intro(out),
            GardenDemo::Data => garden::run_data(out),
            GardenDemo::Growth => garden::run_growth(out),
            GardenDemo::Factory => garden::run_factory(out),
            GardenDemo::Security => garden::run_security(out),
            GardenDemo::Types => garden::run_types(out),
            GardenDemo::Analytics => garden::run_analytics(out),
            GardenDemo::Seeds => garden::run_seeds(out),
        },
        Commands::Errors { demo } => match demo {
            ErrorsDemo::Temperature => errors::run_temperature(out),
            ErrorsDemo::Types => errors::run_error_types(out),
            ErrorsDemo::Custom => errors::run_custom(out),
            ErrorsDemo::Watering => errors::run_watering(out, config),
            ErrorsDemo::Health => errors::run_health(out),
            ErrorsDemo::Management => errors::run_management(out),
        },
        Commands::Quest { args } => game::run_quest(out, args),
        Commands::Scores { args } => game::run_scores(out, args),
        Commands::Coords => game::run_coords(out),
        Commands::Achievements => game::run_achievements(out),
        Commands::Inventory => game::run_inventory(out),
        Commands::Events => game::run_events(out, config),
        Commands::Dashboard => game::run_dashboard(out),
        Commands::Archive { demo } => match demo {
            ArchiveDemo::Recover { path } => archive::run_recover(out, path.as_deref()),
            ArchiveDemo::Create { path } => archive::run_create(out, path.as_deref(), config),
            ArchiveDemo::Comms => {
                let stdin = std::io::stdin();
                archive::run_comms(&mut stdin.lock(), out, err)
            }
            ArchiveDemo::Vault { path } => archive::run_vault(out, path.as_deref()),
            ArchiveDemo::Crisis { paths } => archive::run_crisis(out, paths),
        },
    }
}
