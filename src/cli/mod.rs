//! Terminal front end.
//!
//! - [`commands`] - `clap` argument definitions
//! - [`render`] - Status lines and history table
//! - [`interactive`] - Form loop built on `dialoguer` prompts

pub mod commands;
pub mod interactive;
pub mod render;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use colored::*;

use crate::application::session::{Session, SubmitOutcome};
use crate::bootstrap::{check_storage, start_session};
use crate::config::Config;
use crate::domain::entities::ShortenRequest;
use crate::infrastructure::clipboard::Osc52Clipboard;
use crate::infrastructure::confirm::{AssumeYes, Confirmer, DialoguerConfirmer};

pub use commands::{Cli, Commands};
use render::{TerminalRenderer, print_history};

/// Executes the parsed command.
///
/// Returns a failure exit code when a shortening attempt or a copy lookup
/// fails; the reason has already been printed.
pub async fn run(cli: Cli, config: Config) -> Result<ExitCode> {
    let command = cli.command.unwrap_or(Commands::Interactive);

    if let Commands::Config = command {
        print_config(&config);
        let (storage, healthy) = check_storage(&config).await;
        print_storage_status(&storage, healthy);
        return Ok(ExitCode::SUCCESS);
    }

    let session = start_session(
        &config,
        Arc::new(Osc52Clipboard::stdout()),
        Arc::new(TerminalRenderer),
    )
    .await;

    match command {
        Commands::Shorten {
            url,
            alias,
            domain,
            copy,
        } => shorten(&session, url, alias, domain, copy).await,
        Commands::History { json } => {
            let state = session.state();
            if json {
                println!("{}", serde_json::to_string_pretty(&state.history)?);
            } else {
                print_history(&state.history, state.copied.as_deref());
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Copy { position } => Ok(copy(&session, position)),
        Commands::Clear { yes } => {
            let confirmer: &dyn Confirmer = if yes { &AssumeYes } else { &DialoguerConfirmer };
            if !session.clear_history(confirmer).await? {
                println!("{}", "❌ Cancelled".red());
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Interactive => {
            interactive::run(&session).await?;
            Ok(ExitCode::SUCCESS)
        }
        // Printed before the session starts.
        Commands::Config => Ok(ExitCode::SUCCESS),
    }
}

async fn shorten(
    session: &Session,
    url: String,
    alias: Option<String>,
    domain: Option<String>,
    copy: bool,
) -> Result<ExitCode> {
    let request = ShortenRequest {
        long_url: url,
        alias,
        custom_domain: domain,
    };

    match session.submit_request(request).await {
        SubmitOutcome::Shortened(entry) => {
            if copy {
                session.copy(&entry.short);
            }
            Ok(ExitCode::SUCCESS)
        }
        SubmitOutcome::Failed(_) | SubmitOutcome::Ignored => Ok(ExitCode::FAILURE),
    }
}

fn copy(session: &Session, position: usize) -> ExitCode {
    let copied = position
        .checked_sub(1)
        .and_then(|index| session.copy_entry(index));

    match copied {
        Some(_) => ExitCode::SUCCESS,
        None => {
            println!(
                "{}",
                format!("❌ No history entry at position {}", position).red()
            );
            ExitCode::FAILURE
        }
    }
}

fn print_config(config: &Config) {
    println!("{}", "⚙️  Configuration".bright_blue().bold());
    println!();
    for (key, value) in config.summary_lines() {
        println!("  {:<18} {}", format!("{}:", key), value.bright_white());
    }
}

fn print_storage_status(storage: &str, healthy: bool) {
    let status = if healthy {
        "✓ reachable".green()
    } else {
        "✗ unreachable".red()
    };
    println!("  {:<18} {} {}", "Storage:", storage.bright_white(), status);
    println!();
}
