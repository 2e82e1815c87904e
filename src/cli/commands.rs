//! Command-line arguments.

use clap::{Parser, Subcommand};

/// Shorten long URLs and keep a history of the results.
#[derive(Debug, Parser)]
#[command(name = "link-shortener")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Runs the interactive form when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Shorten a URL
    Shorten {
        /// The long URL (e.g., https://example.com/some/long/path)
        url: String,

        /// Custom alias to use instead of a random code
        #[arg(short, long)]
        alias: Option<String>,

        /// Custom domain for the short link (e.g., go.to)
        #[arg(short, long)]
        domain: Option<String>,

        /// Copy the short URL to the clipboard
        #[arg(short, long)]
        copy: bool,
    },

    /// Show previously shortened links
    History {
        /// Print the raw JSON list
        #[arg(long)]
        json: bool,
    },

    /// Copy a short URL from the history
    Copy {
        /// Position in the history list (1 = most recent)
        position: usize,
    },

    /// Clear the history
    Clear {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Fill in the shortening form interactively
    Interactive,

    /// Show the effective configuration
    Config,
}
