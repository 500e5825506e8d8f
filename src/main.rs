//! assetmap - asset manifest generator for bundler build reports.

use anyhow::Result;
use assetmap::cli::{Cli, Commands};
use assetmap::config::AssetmapConfig;
use assetmap::{core, log, logger};
use clap::{ColorChoice, Parser};

fn main() {
    if let Err(err) = run() {
        log!("error"; "{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.manifest_args().verbose);

    let config = AssetmapConfig::load(&cli.config)?;

    match &cli.command {
        Commands::Build {
            report,
            write,
            args,
        } => assetmap::cli::build::build_manifest(&config, report, *write, args),
        Commands::Watch { report, args } => {
            assetmap::cli::watch::watch_manifest(&config, report, args)
        }
    }
}
