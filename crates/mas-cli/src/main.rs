use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mas_cli::commands::{chronological, serve, windows};
use mas_cli::{Cli, Commands, Config};
use mas_core::ImagingService;
use mas_store::ActivityStore;

/// Load config and build the query service over the configured data file.
fn open_service(cli: &Cli) -> Result<(ImagingService<ActivityStore>, Config)> {
    let mut config =
        Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(data) = &cli.data {
        config.data_path.clone_from(data);
    }
    tracing::debug!(?config, "loaded configuration");

    let service = ImagingService::new(ActivityStore::new(&config.data_path));
    Ok((service, config))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr so JSON output on stdout stays parseable
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let mut stdout = std::io::stdout().lock();

    match &cli.command {
        Some(Commands::Chronological { json }) => {
            let (service, _config) = open_service(&cli)?;
            chronological::run(&mut stdout, &service, *json)?;
        }
        Some(Commands::Windows { state, json }) => {
            let (service, _config) = open_service(&cli)?;
            windows::run(&mut stdout, &service, state.as_deref(), *json)?;
        }
        Some(Commands::Serve { bind }) => {
            let (service, config) = open_service(&cli)?;
            serve::run(service, bind.unwrap_or(config.bind))?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            writeln!(stdout)?;
        }
    }

    stdout.flush()?;
    Ok(())
}
