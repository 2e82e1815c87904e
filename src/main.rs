use std::process::ExitCode;

use clap::Parser;
use colored::*;
use tracing_subscriber::{EnvFilter, fmt};

use link_shortener::cli::{self, Cli};
use link_shortener::config::{self, Config};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match config::load_from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {:#}", "❌ Invalid configuration:".red(), e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config);
    config.print_summary();

    match cli::run(cli, config).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("{} {:#}", "❌ Error:".red(), e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so they never mix with command output.
fn init_logging(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));

    match config.log_format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
