//! Interactive shortening form.

use anyhow::Result;
use colored::*;
use dialoguer::{Input, Select};

use crate::application::session::Session;
use crate::cli::render::print_history;
use crate::infrastructure::confirm::DialoguerConfirmer;

/// Menu shown after each submission.
const MENU: &[&str] = &[
    "Shorten another URL",
    "Copy a short link",
    "Show history",
    "Clear history",
    "Quit",
];

/// Runs the form loop until the user quits.
///
/// # Flow
///
/// 1. Prompt for the long URL, alias and custom domain
/// 2. Submit (the renderer prints progress and the result)
/// 3. Offer copy / history / clear actions until "Shorten another URL" or "Quit"
pub async fn run(session: &Session) -> Result<()> {
    println!("{}", "🔗 Shorten a link".bright_blue().bold());
    println!();

    loop {
        fill_form(session)?;
        session.submit().await;
        println!();

        if !menu(session).await? {
            return Ok(());
        }
    }
}

fn fill_form(session: &Session) -> Result<()> {
    let long_url: String = Input::new()
        .with_prompt("Long URL")
        .allow_empty(true)
        .interact_text()?;
    session.set_long_url(long_url);

    let alias: String = Input::new()
        .with_prompt("Custom alias (optional)")
        .allow_empty(true)
        .interact_text()?;
    session.set_alias(alias);

    let domain: String = Input::new()
        .with_prompt("Custom domain (optional)")
        .allow_empty(true)
        .interact_text()?;
    session.set_custom_domain(domain);

    Ok(())
}

/// Returns `false` when the user chose to quit.
async fn menu(session: &Session) -> Result<bool> {
    loop {
        let choice = Select::new()
            .with_prompt("What next?")
            .items(MENU)
            .default(0)
            .interact()?;

        match choice {
            0 => return Ok(true),
            1 => copy_from_history(session)?,
            2 => {
                let state = session.state();
                print_history(&state.history, state.copied.as_deref());
            }
            3 => {
                if !session.clear_history(&DialoguerConfirmer).await? {
                    println!("{}", "❌ Cancelled".red());
                }
            }
            _ => return Ok(false),
        }
    }
}

fn copy_from_history(session: &Session) -> Result<()> {
    let history = session.state().history;
    if history.is_empty() {
        println!("{}", "  No shortened links yet".yellow());
        return Ok(());
    }

    let items: Vec<String> = history
        .iter()
        .map(|e| format!("{}  ←  {}", e.short, e.original))
        .collect();

    let index = Select::new()
        .with_prompt("Copy which link?")
        .items(&items)
        .default(0)
        .interact()?;

    session.copy_entry(index);
    Ok(())
}
