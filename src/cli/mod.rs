//! CLI module for Hylle.

pub mod commands;
mod output;
pub mod preflight;

pub use output::Output;

use clap::{Parser, Subcommand};

/// Hylle - Book Lookup Assistant
///
/// A conversational CLI tool for looking up books and authors.
/// The name "Hylle" comes from the Norwegian word for "shelf."
#[derive(Parser, Debug)]
#[command(name = "hylle")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ask a book question in natural language
    Ask {
        /// The question (e.g. "What are the newest books by Frank Herbert?")
        question: String,

        /// LLM model to use for routing and summarization
        #[arg(short, long)]
        model: Option<String>,

        /// Maximum number of books for list lookups
        #[arg(short, long)]
        limit: Option<u32>,

        /// Route with the built-in keyword classifier instead of an LLM
        /// (no API key required; prints raw lookup results)
        #[arg(long)]
        offline: bool,
    },

    /// Start an interactive chat session
    Chat {
        /// LLM model to use
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Look up a book or author by free-text query
    Book {
        /// Book title or author name
        query: String,
    },

    /// List an author's books, newest first
    Author {
        /// Author name
        name: String,

        /// Maximum number of books to return
        #[arg(short, long)]
        limit: Option<u32>,
    },

    /// Find similar books from keywords or thematic terms
    Similar {
        /// Keywords or tags (e.g. "space" "politics")
        #[arg(required = true)]
        terms: Vec<String>,

        /// Maximum number of books to return
        #[arg(short, long)]
        limit: Option<u32>,
    },

    /// Check configuration and API key availability
    Doctor,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,
}
