//! Google Books client.
//!
//! Issues unauthenticated GET requests against the volumes endpoint with
//! a URL-encoded `q` parameter. Transport failures and malformed payloads
//! collapse into `NotFound` for the caller (logged at debug level first);
//! only a deadline expiry is surfaced separately.

use super::models::{shape_similar, sort_newest_first, VolumesResponse};
use super::{AuthorBook, BookProvider, BookRecord, SimilarBook, Volume};
use crate::config::BooksSettings;
use crate::error::{HylleError, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Book metadata client backed by the Google Books volumes API.
#[derive(Debug, Clone)]
pub struct GoogleBooksClient {
    http: reqwest::Client,
    endpoint: Url,
    timeout_seconds: u64,
}

impl GoogleBooksClient {
    /// Create a client from settings.
    pub fn new(settings: &BooksSettings) -> Result<Self> {
        let endpoint = Url::parse(&settings.endpoint)
            .map_err(|e| HylleError::Config(format!("Invalid books endpoint: {}", e)))?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            endpoint,
            timeout_seconds: settings.timeout_seconds,
        })
    }

    /// Issue one volumes search and return its items.
    ///
    /// `label` names the caller's original query term(s) in error messages.
    async fn fetch_volumes(&self, query: &str, label: &str) -> Result<Vec<Volume>> {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("q", query);

        info!("Searching volumes: q={}", query);

        let response = match self.http.get(url).send().await {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                return Err(HylleError::Timeout {
                    query: label.to_string(),
                    seconds: self.timeout_seconds,
                });
            }
            Err(e) => {
                debug!("Volumes request failed: {}", e);
                return Err(HylleError::NotFound(label.to_string()));
            }
        };

        let payload: VolumesResponse = match response.json().await {
            Ok(payload) => payload,
            Err(e) => {
                debug!("Volumes response could not be decoded: {}", e);
                return Err(HylleError::NotFound(label.to_string()));
            }
        };

        Ok(payload.items.unwrap_or_default())
    }
}

/// Build the author-scoped query expression.
fn author_query(author: &str) -> String {
    format!("inauthor:{}", author)
}

/// Join keyword terms into one conjunctive search expression.
///
/// Terms share a single `q` value, so the provider ANDs them.
fn similar_query(terms: &[String]) -> String {
    terms.join(" ")
}

#[async_trait]
impl BookProvider for GoogleBooksClient {
    async fn book_or_author(&self, query: &str) -> Result<BookRecord> {
        let query = query.trim();
        if query.is_empty() {
            return Err(HylleError::InvalidInput("Query must not be empty".to_string()));
        }

        let mut volumes = self.fetch_volumes(query, query).await?;
        if volumes.is_empty() {
            return Err(HylleError::NotFound(query.to_string()));
        }

        Ok(BookRecord::from_volume(volumes.remove(0)))
    }

    async fn author_books(&self, author: &str, limit: usize) -> Result<Vec<AuthorBook>> {
        let author = author.trim();
        if author.is_empty() {
            return Err(HylleError::InvalidInput(
                "Author name must not be empty".to_string(),
            ));
        }
        if limit == 0 {
            return Err(HylleError::InvalidInput("Limit must be positive".to_string()));
        }

        let mut volumes = self.fetch_volumes(&author_query(author), author).await?;
        if volumes.is_empty() {
            return Err(HylleError::NotFound(author.to_string()));
        }

        sort_newest_first(&mut volumes);
        volumes.truncate(limit);

        Ok(volumes.into_iter().map(AuthorBook::from_volume).collect())
    }

    async fn similar_books(&self, terms: &[String], limit: usize) -> Result<Vec<SimilarBook>> {
        let terms: Vec<String> = terms
            .iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        if terms.is_empty() {
            return Err(HylleError::InvalidInput(
                "At least one search term is required".to_string(),
            ));
        }
        if limit == 0 {
            return Err(HylleError::InvalidInput("Limit must be positive".to_string()));
        }

        let label = terms.join(", ");
        let volumes = self.fetch_volumes(&similar_query(&terms), &label).await?;
        if volumes.is_empty() {
            return Err(HylleError::NotFound(label));
        }

        // Provider relevance order is kept as-is
        Ok(shape_similar(volumes, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BooksSettings;

    #[test]
    fn test_author_query_scoping() {
        assert_eq!(author_query("Frank Herbert"), "inauthor:Frank Herbert");
    }

    #[test]
    fn test_similar_query_is_conjunctive() {
        let terms = vec!["space".to_string(), "politics".to_string()];
        assert_eq!(similar_query(&terms), "space politics");
    }

    #[test]
    fn test_query_url_encoding() {
        let settings = BooksSettings::default();
        let client = GoogleBooksClient::new(&settings).unwrap();

        let mut url = client.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("q", &author_query("Ursula K. Le Guin"));
        assert!(url.as_str().contains("q=inauthor%3AUrsula"));
    }

    #[test]
    fn test_invalid_endpoint_rejected() {
        let settings = BooksSettings {
            endpoint: "not a url".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            GoogleBooksClient::new(&settings),
            Err(HylleError::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_empty_query_rejected_before_network() {
        let client = GoogleBooksClient::new(&BooksSettings::default()).unwrap();
        assert!(matches!(
            client.book_or_author("   ").await,
            Err(HylleError::InvalidInput(_))
        ));
        assert!(matches!(
            client.author_books("", 5).await,
            Err(HylleError::InvalidInput(_))
        ));
        assert!(matches!(
            client.similar_books(&[], 5).await,
            Err(HylleError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn test_zero_limit_rejected() {
        let client = GoogleBooksClient::new(&BooksSettings::default()).unwrap();
        assert!(matches!(
            client.author_books("Frank Herbert", 0).await,
            Err(HylleError::InvalidInput(_))
        ));
    }
}
