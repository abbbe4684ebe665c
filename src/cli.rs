// CLI module - command-line argument parsing and handlers
//
// Running without a subcommand starts the TUI. Subcommands manage the
// config file:
// - config --show: Display effective configuration
// - config --path: Print config file location
// - config --reset: Regenerate config file with defaults

use crate::config::{Config, Overrides, VERSION};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;

/// Dog Lover - browse shelter dogs and find your match from the terminal
#[derive(Parser, Debug)]
#[command(name = "doglover")]
#[command(version = VERSION)]
#[command(about = "Browse shelter dogs and generate a match", long_about = None)]
pub struct Cli {
    /// Base URL of the dog search service
    #[arg(long, value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Initial route, e.g. "/search" (unknown routes open the login screen)
    #[arg(long, value_name = "PATH")]
    pub route: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            api_url: self.api_url.clone(),
        }
    }
}

/// Handle CLI subcommands. Returns true if one ran (exit after).
pub fn handle_cli(cli: &Cli) -> Result<bool> {
    let Some(Commands::Config { show, reset, path }) = &cli.command else {
        return Ok(false);
    };

    if *path {
        handle_config_path()?;
    } else if *show {
        handle_config_show(&cli.overrides());
    } else if *reset {
        handle_config_reset()?;
    } else {
        println!("Usage: doglover config [--show|--reset|--path]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --reset   Reset config file to defaults");
        println!("  --path    Show config file path");
    }
    Ok(true)
}

fn handle_config_path() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;
    println!("{}", path.display());
    Ok(())
}

fn handle_config_show(overrides: &Overrides) {
    let config = Config::load(overrides);

    println!("# Effective configuration (flags > env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;

    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Error creating directory {}", parent.display()))?;
    }

    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("Error writing config {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}
