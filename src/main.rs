//! invite-relay - pending invitation relay service

#![allow(missing_docs)]

use clap::Parser;
use invite_relay::config::{Config, DEFAULT_CONFIG_PATH};
use invite_relay::server;
use invite_relay::utils::init_logging;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "invite-relay", version, about)]
struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "RELAY_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Apply pending database migrations before serving
    #[arg(long)]
    migrate: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is normal outside local development
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    let mut config = match Config::load(&args.config).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if args.migrate {
        config.relay.database.run_migrations = true;
    }

    if let Err(e) = init_logging(config.logging()) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match server::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
