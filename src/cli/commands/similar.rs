//! Similar-books command implementation.

use crate::books::{BookProvider, GoogleBooksClient};
use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::Settings;
use anyhow::Result;

/// Run the similar command: keyword search in provider relevance order.
pub async fn run_similar(terms: &[String], limit: Option<u32>, settings: Settings) -> Result<()> {
    preflight::check(Operation::Lookup)?;

    let client = GoogleBooksClient::new(&settings.books)?;
    let limit = limit.unwrap_or(settings.books.default_limit) as usize;

    let spinner = Output::spinner("Searching...");
    match client.similar_books(terms, limit).await {
        Ok(books) => {
            spinner.finish_and_clear();
            Output::header(&format!("Similar books for: {}", terms.join(", ")));
            for (i, book) in books.iter().enumerate() {
                Output::similar_book(i + 1, book);
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
