// Searchlight - Linear vs binary search visualizer
//
// Animates both searches over the same input so the difference in step
// counts is visible, then charts the comparison.
//
// Architecture:
// - Search: Pure trace generators for each algorithm
// - Player: Replays a trace onto a drawing surface with a fixed step delay
// - Session: Busy gate, input validation and the two-animation sequence
// - Metrics: Step counts per algorithm feeding the comparison chart
// - TUI (ratatui): Interactive input fields, boards, chart and logs
// - Headless: The same session driven from the command line

mod cli;
mod config;
mod error;
mod events;
mod headless;
mod logging;
mod metrics;
mod player;
mod random;
mod search;
mod session;
mod theme;
mod tui;
mod validate;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use logging::{LogBuffer, LogSink};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config management never touches logging or the terminal
    if let Some(Commands::Config { show, reset, path }) = &cli.command {
        return cli::handle_config(*show, *reset, *path);
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();
    let config = Config::from_env()?;

    match cli.command {
        Some(Commands::Run(args)) => {
            // Headless: logs go to stderr so stdout stays parseable
            let guard = logging::init(&config.logging, LogSink::Stderr)?;
            let code = headless::run(&config, &args).await?;
            // Flush file logs before a non-zero exit skips destructors
            drop(guard);
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Some(Commands::Random { len }) => {
            cli::handle_random(&config, len);
            Ok(())
        }
        Some(Commands::Config { .. }) => Ok(()),
        None => {
            // TUI: capture logs to buffer (prevents garbling the display)
            let log_buffer = LogBuffer::new();
            let _guard = logging::init(&config.logging, LogSink::Tui(log_buffer.clone()))?;
            tui::run_tui(config, log_buffer).await
        }
    }
}
