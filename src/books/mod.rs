//! Book metadata lookups.
//!
//! Provides the three lookup operations against a book-metadata provider:
//! free-text book/author search, an author bibliography sorted newest
//! first, and a similar-books search from keyword terms.

mod google;
mod models;

pub use google::GoogleBooksClient;
pub use models::{
    parse_published_date, shape_similar, sort_newest_first, AuthorBook, BookRecord, SimilarBook,
    Volume, VolumeInfo, VolumesResponse,
};

use crate::error::Result;
use async_trait::async_trait;

/// A source of book metadata.
///
/// Each operation issues a single search and normalizes the response.
/// Every call is independent; implementations hold no cross-call state.
#[async_trait]
pub trait BookProvider: Send + Sync {
    /// Look up a book or author by free-text query and return the first match.
    async fn book_or_author(&self, query: &str) -> Result<BookRecord>;

    /// Return up to `limit` books by the named author, newest first.
    async fn author_books(&self, author: &str, limit: usize) -> Result<Vec<AuthorBook>>;

    /// Return up to `limit` books matching the combined terms, in provider
    /// relevance order.
    async fn similar_books(&self, terms: &[String], limit: usize) -> Result<Vec<SimilarBook>>;
}
