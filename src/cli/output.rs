//! CLI output formatting utilities.

use crate::books::{AuthorBook, BookRecord, SimilarBook};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Output helper for CLI formatting.
pub struct Output;

impl Output {
    /// Print an info message.
    pub fn info(msg: &str) {
        println!("{} {}", style(">>").cyan().bold(), msg);
    }

    /// Print a success message.
    pub fn success(msg: &str) {
        println!("{} {}", style(">>").green().bold(), msg);
    }

    /// Print a warning message.
    pub fn warning(msg: &str) {
        eprintln!("{} {}", style(">>").yellow().bold(), msg);
    }

    /// Print an error message.
    pub fn error(msg: &str) {
        eprintln!("{} {}", style(">>").red().bold(), msg);
    }

    /// Print a header.
    pub fn header(msg: &str) {
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print a key-value pair.
    pub fn kv(key: &str, value: &str) {
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a full book record, showing only fields the provider returned.
    pub fn book_record(record: &BookRecord) {
        println!(
            "\n{} {}",
            style(">>").green(),
            style(record.title.as_deref().unwrap_or("(untitled)")).bold()
        );
        if let Some(authors) = &record.authors {
            Self::kv("Authors", &authors.join(", "));
        }
        if let Some(date) = &record.published_date {
            Self::kv("Published", date);
        }
        if let Some(link) = &record.preview_link {
            Self::kv("Preview", link);
        }
        if let Some(description) = &record.description {
            println!("\n{}", description);
        }
    }

    /// Print one author-bibliography entry.
    pub fn author_book(index: usize, book: &AuthorBook) {
        let date = book.published_date.as_deref().unwrap_or("date unknown");
        println!(
            "  {}. {} ({})",
            index,
            style(book.title.as_deref().unwrap_or("(untitled)")).bold(),
            style(date).dim()
        );
        if let Some(link) = &book.preview_link {
            println!("     {}", style(link).dim());
        }
    }

    /// Print one similar-books entry.
    pub fn similar_book(index: usize, book: &SimilarBook) {
        let mut line = format!(
            "  {}. {}",
            index,
            style(book.title.as_deref().unwrap_or("(untitled)")).bold()
        );
        if let Some(authors) = &book.authors {
            line.push_str(&format!(" by {}", authors.join(", ")));
        }
        if let Some(date) = &book.published_date {
            line.push_str(&format!(" ({})", style(date).dim()));
        }
        println!("{}", line);
        if let Some(link) = &book.preview_link {
            println!("     {}", style(link).dim());
        }
    }

    /// Create a spinner.
    pub fn spinner(msg: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }
}
