// SPDX-FileCopyrightText: 2026 EaseEntry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! EaseEntry - chat assistant for booking Athena Museum tickets.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod chat;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;
use easeentry_config::EaseEntryConfig;

/// EaseEntry - chat assistant for booking Athena Museum tickets.
#[derive(Parser, Debug)]
#[command(name = "easeentry", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start an interactive booking chat (default).
    Chat,
    /// Print the resolved configuration with secrets redacted.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => easeentry_config::load_and_validate_path(path),
        None => easeentry_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            easeentry_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => {
            init_tracing(&config.agent.log_level);
            if let Err(e) = chat::run_chat(config).await {
                eprintln!("{}: {e}", "error".red().bold());
                std::process::exit(1);
            }
        }
        Commands::Config => {
            if let Err(e) = print_config(&config) {
                eprintln!("{}: {e}", "error".red().bold());
                std::process::exit(1);
            }
        }
    }
}

fn print_config(config: &EaseEntryConfig) -> Result<(), toml::ser::Error> {
    let rendered = toml::to_string_pretty(&config.redacted())?;
    print!("{rendered}");
    Ok(())
}

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
///
/// Logs go to stderr so they never interleave with the chat on stdout.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("easeentry={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
