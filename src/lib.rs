//! Hylle - Book Lookup Assistant
//!
//! A conversational CLI tool for looking up books and authors via the
//! Google Books API.
//!
//! The name "Hylle" comes from the Norwegian word for "shelf."
//!
//! # Overview
//!
//! Hylle allows you to:
//! - Look up a book (or an author's best match) by free-text query
//! - List an author's books, newest first
//! - Find similar books from keywords or thematic terms
//! - Ask questions in natural language and let an LLM agent pick the
//!   right lookup and summarize the results
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration management
//! - `books` - Book metadata provider and lookup operations
//! - `agent` - LLM agent with tool calling and deterministic routing
//! - `cli` - Command-line interface
//!
//! # Example
//!
//! ```rust,no_run
//! use hylle::books::{BookProvider, GoogleBooksClient};
//! use hylle::config::Settings;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let client = GoogleBooksClient::new(&settings.books)?;
//!
//!     let record = client.book_or_author("Dune").await?;
//!     println!("{}", record.title.unwrap_or_default());
//!
//!     Ok(())
//! }
//! ```

pub mod agent;
pub mod books;
pub mod cli;
pub mod config;
pub mod error;
pub mod openai;

pub use error::{HylleError, Result};
