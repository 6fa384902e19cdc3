// SPDX-FileCopyrightText: 2026 AdSpark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! AdSpark - campaign idea generator with a deterministic reach estimate.
//!
//! This is the binary entry point for the AdSpark CLI.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use clap::{Parser, Subcommand};

mod form;

/// AdSpark - campaign idea generator with a deterministic reach estimate.
#[derive(Parser, Debug)]
#[command(name = "adspark", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Launch the interactive campaign form (default).
    Run,
    /// Print the resolved configuration with secrets redacted.
    Config,
}

#[tokio::main]
async fn main() {
    // Load and validate configuration at startup.
    let config = match adspark_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            adspark_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.agent.log_level);

    match cli_command() {
        Commands::Run => {
            if let Err(e) = form::run_form(config).await {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        Commands::Config => {
            print_config(&config);
        }
    }
}

/// Parses the CLI, defaulting to the interactive form.
fn cli_command() -> Commands {
    Cli::parse().command.unwrap_or(Commands::Run)
}

/// Initializes the tracing subscriber on stderr, honoring `RUST_LOG` when
/// set and falling back to the configured level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Renders the resolved configuration as TOML, redacting the API key.
fn print_config(config: &adspark_config::AdsparkConfig) {
    let mut display = config.clone();
    if display.gemini.api_key.is_some() {
        display.gemini.api_key = Some("[REDACTED]".to_string());
    }
    match toml::to_string_pretty(&display) {
        Ok(rendered) => print!("{rendered}"),
        Err(e) => eprintln!("error: failed to render config: {e}"),
    }
}
