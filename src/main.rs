//! blogmeta - site metadata for a blog, resolved once and handed to the
//! site generator.

#![allow(dead_code)]

mod cli;
mod config;
mod logger;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::{BasePath, ConfigError, MetadataSource};

fn main() -> Result<()> {
    // BASE_PATH may live in .env, as it does for the site generator
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Init { dry, force } => cli::init::new_config(&cli.config, *dry, *force),
        Commands::Show { args } => {
            let (source, base) = load_source(&cli)?;
            source.validate(&base).map_err(ConfigError::Diagnostics)?;

            let meta = source.resolve(&base);
            debug!("show"; "resolved with base path '{}'", base);
            cli::show::show_metadata(&meta, args)
        }
        Commands::Check => {
            let (source, base) = load_source(&cli)?;
            cli::check::check_metadata(&source, &base)
        }
    }
}

/// Read `blogmeta.toml` (or fall back to the shipped metadata) and pick the
/// base path.
fn load_source(cli: &Cli) -> Result<(MetadataSource, BasePath)> {
    let source = MetadataSource::load(&cli.config)?;
    Ok((source, cli.base_path()))
}
