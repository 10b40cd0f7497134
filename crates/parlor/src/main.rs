// SPDX-FileCopyrightText: 2026 Parlor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parlor - a small self-hosted chat backend.
//!
//! This is the binary entry point for the Parlor server.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod serve;

/// Parlor - a small self-hosted chat backend.
#[derive(Parser, Debug)]
#[command(name = "parlor", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the Parlor HTTP server (default).
    Serve,
    /// Print the resolved configuration as TOML.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup.
    let config = match parlor_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            parlor_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.log.level);

    match cli.command {
        Some(Commands::Serve) | None => {
            if let Err(err) = serve::run(&config).await {
                tracing::error!(error = %err, "server exited with error");
                std::process::exit(1);
            }
        }
        Some(Commands::Config) => match toml::to_string_pretty(&config) {
            Ok(rendered) => println!("{rendered}"),
            Err(err) => {
                eprintln!("parlor: cannot render config: {err}");
                std::process::exit(1);
            }
        },
    }
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured `log.level`.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
