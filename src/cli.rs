// CLI module - command-line argument parsing and handlers
//
// With no subcommand the interactive TUI starts. Subcommands:
// - run: Play both searches headlessly and print the comparison
// - random: Print a random array in the input format
// - config --show|--reset|--path: Configuration management

use crate::config::{Config, MAX_RANDOM_LEN, VERSION};
use crate::random::{format_array, random_array};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::Write;

/// Searchlight - Watch linear and binary search race, step by step
#[derive(Parser)]
#[command(name = "searchlight")]
#[command(version = VERSION)]
#[command(about = "Linear vs binary search visualizer", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run both searches without the TUI and print the comparison
    Run(RunArgs),

    /// Print a random array of integers in [1, 100]
    Random {
        /// Number of elements, 1-32 (defaults to the configured random_len)
        #[arg(long)]
        len: Option<usize>,
    },

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

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Comma-separated integers, e.g. "5, 3, 8, 1"
    #[arg(long)]
    pub array: String,

    /// Value to search for
    #[arg(long)]
    pub target: String,

    /// Override the per-step delay in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Print search events as JSON lines instead of the animated trace
    #[arg(long)]
    pub json: bool,
}

pub fn handle_config(show: bool, reset: bool, path: bool) -> Result<()> {
    if path {
        handle_config_path()
    } else if show {
        handle_config_show()
    } else if reset {
        handle_config_reset()
    } else {
        // No flag provided, show help
        println!("Usage: searchlight config [--show|--reset|--path]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --reset   Reset config file to defaults");
        println!("  --path    Show config file path");
        Ok(())
    }
}

pub fn handle_random(config: &Config, len: Option<usize>) {
    let len = random_len(config, len);
    let values = random_array(len, &mut rand::thread_rng());
    println!("{}", format_array(&values));
}

/// `--len` gets the same bounds as the configured length
fn random_len(config: &Config, len: Option<usize>) -> usize {
    len.unwrap_or(config.random_len).clamp(1, MAX_RANDOM_LEN)
}

fn handle_config_path() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;
    println!("{}", path.display());
    Ok(())
}

fn handle_config_show() -> Result<()> {
    let config = Config::from_env()?;

    println!("# Effective configuration (env > file > defaults)");
    println!();
    println!("step_delay_ms = {}", config.step_delay_ms);
    println!("random_len = {}", config.random_len);
    println!("theme = {:?}", config.theme);
    println!();
    println!("[logging]");
    println!("level = {:?}", config.logging.level);
    println!("file_enabled = {}", config.logging.file_enabled);
    println!(
        "file_dir = {:?}",
        config.logging.file_dir.display().to_string()
    );
    println!("file_rotation = {:?}", config.logging.file_rotation.as_str());
    println!("file_prefix = {:?}", config.logging.file_prefix);

    // Show source info
    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
    Ok(())
}

fn handle_config_reset() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("Failed to read confirmation")?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    Config::write_default(&path)?;
    println!("Config reset to defaults: {}", path.display());
    Ok(())
}
