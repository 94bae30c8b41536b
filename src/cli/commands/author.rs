//! Author bibliography command implementation.

use crate::books::{BookProvider, GoogleBooksClient};
use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::Settings;
use anyhow::Result;

/// Run the author command: list an author's books, newest first.
pub async fn run_author(name: &str, limit: Option<u32>, settings: Settings) -> Result<()> {
    preflight::check(Operation::Lookup)?;

    let client = GoogleBooksClient::new(&settings.books)?;
    let limit = limit.unwrap_or(settings.books.default_limit) as usize;

    let spinner = Output::spinner("Searching...");
    match client.author_books(name, limit).await {
        Ok(books) => {
            spinner.finish_and_clear();
            Output::header(&format!("Books by {} ({})", name, books.len()));
            for (i, book) in books.iter().enumerate() {
                Output::author_book(i + 1, book);
            }
            println!();
        }
        Err(e) => {
            spinner.finish_and_clear();
            Output::error(&format!("{}", e));
            return Err(e.into());
        }
    }

    Ok(())
}
