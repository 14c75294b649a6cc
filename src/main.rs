//! sprig - Bundle a directory of svg icons into a `<symbol>` sprite.

mod cli;
mod config;
mod logger;
mod sprite;
mod utils;

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SpriteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    match &cli.command {
        // init runs before any config exists
        Commands::Init { dir, dry } => {
            let cwd = std::env::current_dir().context("Failed to get current working directory")?;
            let dir = dir.as_deref().map_or_else(|| cwd.clone(), |d| cwd.join(d));
            cli::init::init_config(&dir, *dry)
        }
        Commands::Build { .. } => {
            let config = SpriteConfig::load(&cli)?;
            cli::build::build_sprite(&config).map(|_| ())
        }
        Commands::Check { .. } => cli::check::check_sprite(&SpriteConfig::load(&cli)?),
    }
}
