//! Book lookup command implementation.

use crate::books::{BookProvider, GoogleBooksClient};
use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::Settings;
use anyhow::Result;

/// Run the book command: free-text lookup, first match.
pub async fn run_book(query: &str, settings: Settings) -> Result<()> {
    preflight::check(Operation::Lookup)?;

    let client = GoogleBooksClient::new(&settings.books)?;

    let spinner = Output::spinner("Searching...");
    match client.book_or_author(query).await {
        Ok(record) => {
            spinner.finish_and_clear();
            Output::book_record(&record);
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
