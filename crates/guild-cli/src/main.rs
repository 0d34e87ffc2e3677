//! guild - consultancy directory CLI
//!
//! Browse the profile directory and register new profiles against a
//! data layer store.
//!
//! # Examples
//!
//! ```bash
//! # Second page of available developers, cheapest first
//! guild directory --category developer --availability available --sort rate-asc --page 2
//!
//! # One profile
//! guild profile did:chia:1a2b3c --pretty
//!
//! # Register
//! guild register --name "Ada" --title "Chialisp Developer" --email ada@example.com \
//!     --location Lisbon --summary "Puzzles" --skill "Chialisp Developer" \
//!     --rate 2.5 --availability part-time --wallet xch1... --accept-terms
//! ```

use guild_cli::{Cli, CliError, CliResult, initialize_logger, run};

use guild_config::Config;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty;

    let config = match setup(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = run(cli, &config).await;

    match result {
        Ok(value) => {
            let output = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Load and validate configuration, then start logging
fn setup(cli: &Cli) -> CliResult<Config> {
    let mut config = Config::load()?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(parent) = log_file_path.as_deref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(parent).map_err(|e| CliError::Logger {
            message: format!("Failed to create log directory {}: {}", parent.display(), e),
        })?;
    }

    initialize_logger(
        config.logging.level,
        log_file_path,
        config.logging.colored,
    )?;
    config.log_summary();

    Ok(config)
}
