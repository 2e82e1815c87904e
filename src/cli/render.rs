//! Terminal rendering of session state.

use colored::*;

use crate::application::session::Renderer;
use crate::domain::History;
use crate::state::{Action, AppState};

/// How a status line should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Progress,
    Success,
    Failure,
    Info,
}

/// Plain-text status line for `action`, or `None` if nothing is worth
/// printing.
pub fn status_line(state: &AppState, action: &Action) -> Option<(Tone, String)> {
    match action {
        Action::SubmitStarted => Some((
            Tone::Progress,
            format!("⏳ Shortening {}...", state.form.long_url),
        )),
        Action::SubmitSucceeded(history) => history
            .get(0)
            .map(|entry| (Tone::Success, format!("✅ {}", entry.short))),
        Action::SubmitFailed(message) => Some((Tone::Failure, format!("❌ {}", message))),
        Action::Copied(url) => Some((Tone::Info, format!("📋 Copied {} to clipboard", url))),
        Action::HistoryCleared => Some((Tone::Info, "🗑  History cleared".to_string())),
        Action::HistoryLoaded(_)
        | Action::SetLongUrl(_)
        | Action::SetAlias(_)
        | Action::SetCustomDomain(_)
        | Action::CopyExpired(_) => None,
    }
}

/// Prints status lines to stdout as the session changes.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalRenderer;

impl Renderer for TerminalRenderer {
    fn render(&self, state: &AppState, action: &Action) {
        let Some((tone, line)) = status_line(state, action) else {
            return;
        };

        let styled = match tone {
            Tone::Progress => line.bright_black(),
            Tone::Success => line.green().bold(),
            Tone::Failure => line.red(),
            Tone::Info => line.bright_cyan(),
        };
        println!("{}", styled);
    }
}

/// Prints the history table.
///
/// # Output Format
///
/// ```text
/// 🔗 History
///
///   #   Short URL                        Original
///   ───────────────────────────────────────────────────────────────────
///   1   https://go.to/my-link            https://example.com   ✓ Copied
///   2   https://shrtco.de/Ab3dE9x        https://rust-lang.org
/// ```
pub fn print_history(history: &History, copied: Option<&str>) {
    println!("{}", "🔗 History".bright_blue().bold());
    println!();

    if history.is_empty() {
        println!("{}", "  No shortened links yet".yellow());
        println!();
        println!(
            "  Create one with: {} shorten <URL>",
            "link-shortener".bright_cyan()
        );
        return;
    }

    println!(
        "  {:<3} {:<32} {}",
        "#".bright_white().bold(),
        "Short URL".bright_white().bold(),
        "Original".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for (index, entry) in history.iter().enumerate() {
        let marker = if copied == Some(entry.short.as_str()) {
            "✓ Copied".green().to_string()
        } else {
            String::new()
        };

        println!(
            "  {:<3} {:<32} {} {}",
            (index + 1).to_string().bright_black(),
            entry.short.cyan(),
            entry.original,
            marker
        );
    }

    println!();
    println!(
        "  Total: {}",
        history.len().to_string().bright_white().bold()
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ShortenedEntry;

    #[test]
    fn test_submit_started_mentions_url() {
        let state = AppState {
            form: crate::state::FormState {
                long_url: "https://example.com".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        let (tone, line) = status_line(&state, &Action::SubmitStarted).unwrap();
        assert_eq!(tone, Tone::Progress);
        assert!(line.contains("https://example.com"));
    }

    #[test]
    fn test_success_shows_newest_short_url() {
        let history = History::new()
            .append(ShortenedEntry::new("1", "https://a.com", "https://shrtco.de/old"))
            .append(ShortenedEntry::new("2", "https://b.com", "https://go.to/new"));

        let (tone, line) =
            status_line(&AppState::default(), &Action::SubmitSucceeded(history)).unwrap();
        assert_eq!(tone, Tone::Success);
        assert!(line.ends_with("https://go.to/new"));
    }

    #[test]
    fn test_failure_shows_message() {
        let (tone, line) = status_line(
            &AppState::default(),
            &Action::SubmitFailed("URL cannot be empty.".to_string()),
        )
        .unwrap();
        assert_eq!(tone, Tone::Failure);
        assert!(line.contains("URL cannot be empty."));
    }

    #[test]
    fn test_silent_actions() {
        let state = AppState::default();
        assert!(status_line(&state, &Action::SetAlias("x".into())).is_none());
        assert!(status_line(&state, &Action::CopyExpired("x".into())).is_none());
        assert!(status_line(&state, &Action::HistoryLoaded(History::new())).is_none());
    }
}
