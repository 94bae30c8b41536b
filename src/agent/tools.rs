//! Tool definitions and implementations for the agent system.

use crate::books::{AuthorBook, BookProvider, BookRecord, SimilarBook};
use crate::error::{HylleError, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Available tools for the agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum ToolCall {
    /// Look up a book or author by free-text query.
    GetBookOrAuthor { query: String },

    /// List an author's books, newest first.
    GetAuthorBooks {
        author: String,
        #[serde(default = "default_limit")]
        limit: u32,
    },

    /// Find similar books from keyword terms.
    GetSimilarBooks {
        terms: Vec<String>,
        #[serde(default = "default_limit")]
        limit: u32,
    },
}

fn default_limit() -> u32 {
    5
}

/// Tool execution context with access to the book provider.
pub struct ToolContext {
    pub books: Arc<dyn BookProvider>,
}

impl ToolContext {
    /// Create a new tool context.
    pub fn new(books: Arc<dyn BookProvider>) -> Self {
        Self { books }
    }

    /// Execute a tool call and return the result as a string.
    pub async fn execute(&self, tool: &ToolCall) -> Result<String> {
        match tool {
            ToolCall::GetBookOrAuthor { query } => {
                let record = self.books.book_or_author(query).await?;
                Ok(format_record(&record))
            }
            ToolCall::GetAuthorBooks { author, limit } => {
                let books = self.books.author_books(author, *limit as usize).await?;
                Ok(format_author_books(author, &books))
            }
            ToolCall::GetSimilarBooks { terms, limit } => {
                let books = self.books.similar_books(terms, *limit as usize).await?;
                Ok(format_similar_books(&books))
            }
        }
    }
}

/// Format a single book record, listing only fields the provider returned.
fn format_record(record: &BookRecord) -> String {
    let mut lines = Vec::new();

    if let Some(title) = &record.title {
        lines.push(format!("Title: {}", title));
    }
    if let Some(authors) = &record.authors {
        lines.push(format!("Authors: {}", authors.join(", ")));
    }
    if let Some(date) = &record.published_date {
        lines.push(format!("Published: {}", date));
    }
    if let Some(link) = &record.preview_link {
        lines.push(format!("Preview: {}", link));
    }
    if let Some(description) = &record.description {
        lines.push(String::new());
        lines.push(description.clone());
    }

    lines.join("\n")
}

fn format_author_books(author: &str, books: &[AuthorBook]) -> String {
    let formatted = books
        .iter()
        .enumerate()
        .map(|(i, b)| {
            let mut line = format!("{}. {}", i + 1, b.title.as_deref().unwrap_or("(untitled)"));
            if let Some(date) = &b.published_date {
                line.push_str(&format!(" ({})", date));
            }
            if let Some(link) = &b.preview_link {
                line.push_str(&format!("\n   {}", link));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Found {} book(s) by {}, newest first:\n\n{}",
        books.len(),
        author,
        formatted
    )
}

fn format_similar_books(books: &[SimilarBook]) -> String {
    let formatted = books
        .iter()
        .enumerate()
        .map(|(i, b)| {
            let mut line = format!("{}. {}", i + 1, b.title.as_deref().unwrap_or("(untitled)"));
            if let Some(authors) = &b.authors {
                line.push_str(&format!(" by {}", authors.join(", ")));
            }
            if let Some(date) = &b.published_date {
                line.push_str(&format!(" ({})", date));
            }
            if let Some(link) = &b.preview_link {
                line.push_str(&format!("\n   {}", link));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("Found {} similar book(s):\n\n{}", books.len(), formatted)
}

/// Get OpenAI function/tool definitions for the agent.
pub fn tool_definitions() -> Vec<async_openai::types::ChatCompletionTool> {
    use async_openai::types::{ChatCompletionTool, ChatCompletionToolType, FunctionObject};

    vec![
        ChatCompletionTool {
            r#type: ChatCompletionToolType::Function,
            function: FunctionObject {
                name: "get_book_or_author".to_string(),
                description: Some(
                    "Search the book catalog for a book title or author name and \
                    return the first match with title, authors, description, \
                    published date and preview link."
                        .to_string(),
                ),
                parameters: Some(serde_json::json!({
                    "type": "object",
                    "properties": {
                        "query": {
                            "type": "string",
                            "description": "Book title or author name"
                        }
                    },
                    "required": ["query"]
                })),
                strict: None,
            },
        },
        ChatCompletionTool {
            r#type: ChatCompletionToolType::Function,
            function: FunctionObject {
                name: "get_author_books".to_string(),
                description: Some(
                    "Get up to N books written by a specific author, \
                    ordered newest first."
                        .to_string(),
                ),
                parameters: Some(serde_json::json!({
                    "type": "object",
                    "properties": {
                        "author": {
                            "type": "string",
                            "description": "Author name"
                        },
                        "limit": {
                            "type": "integer",
                            "description": "Max number of books to return (default: 5)",
                            "default": 5
                        }
                    },
                    "required": ["author"]
                })),
                strict: None,
            },
        },
        ChatCompletionTool {
            r#type: ChatCompletionToolType::Function,
            function: FunctionObject {
                name: "get_similar_books".to_string(),
                description: Some(
                    "Find similar books by searching the catalog with keywords or \
                    thematic terms extracted from the conversation."
                        .to_string(),
                ),
                parameters: Some(serde_json::json!({
                    "type": "object",
                    "properties": {
                        "terms": {
                            "type": "array",
                            "items": { "type": "string" },
                            "description": "Keywords or tags describing the kind of book"
                        },
                        "limit": {
                            "type": "integer",
                            "description": "Max number of books to return (default: 5)",
                            "default": 5
                        }
                    },
                    "required": ["terms"]
                })),
                strict: None,
            },
        },
    ]
}

/// Parse a tool call from the OpenAI response format.
pub fn parse_tool_call(name: &str, arguments: &str) -> Result<ToolCall> {
    let args: serde_json::Value = serde_json::from_str(arguments)
        .map_err(|e| HylleError::Agent(format!("Invalid tool arguments: {}", e)))?;

    match name {
        "get_book_or_author" => {
            let query = args["query"]
                .as_str()
                .ok_or_else(|| HylleError::Agent("Missing 'query' argument".to_string()))?
                .to_string();
            Ok(ToolCall::GetBookOrAuthor { query })
        }
        "get_author_books" => {
            let author = args["author"]
                .as_str()
                .ok_or_else(|| HylleError::Agent("Missing 'author' argument".to_string()))?
                .to_string();
            let limit = args["limit"].as_u64().unwrap_or(5) as u32;
            Ok(ToolCall::GetAuthorBooks { author, limit })
        }
        "get_similar_books" => {
            let terms = args["terms"]
                .as_array()
                .ok_or_else(|| HylleError::Agent("Missing 'terms' argument".to_string()))?
                .iter()
                .filter_map(|t| t.as_str())
                .map(|t| t.to_string())
                .collect::<Vec<_>>();
            let limit = args["limit"].as_u64().unwrap_or(5) as u32;
            Ok(ToolCall::GetSimilarBooks { terms, limit })
        }
        _ => Err(HylleError::Agent(format!("Unknown tool: {}", name))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::books::{AuthorBook, BookRecord, SimilarBook};
    use async_trait::async_trait;

    /// Static provider returning canned results, for exercising tool
    /// execution without the network.
    struct StaticProvider {
        record: Option<BookRecord>,
        author_books: Vec<AuthorBook>,
        similar: Vec<SimilarBook>,
    }

    #[async_trait]
    impl BookProvider for StaticProvider {
        async fn book_or_author(&self, query: &str) -> Result<BookRecord> {
            self.record
                .clone()
                .ok_or_else(|| HylleError::NotFound(query.to_string()))
        }

        async fn author_books(&self, author: &str, limit: usize) -> Result<Vec<AuthorBook>> {
            if self.author_books.is_empty() {
                return Err(HylleError::NotFound(author.to_string()));
            }
            Ok(self.author_books.iter().take(limit).cloned().collect())
        }

        async fn similar_books(&self, terms: &[String], limit: usize) -> Result<Vec<SimilarBook>> {
            if self.similar.is_empty() {
                return Err(HylleError::NotFound(terms.join(", ")));
            }
            Ok(self.similar.iter().take(limit).cloned().collect())
        }
    }

    fn empty_provider() -> Arc<dyn BookProvider> {
        Arc::new(StaticProvider {
            record: None,
            author_books: Vec::new(),
            similar: Vec::new(),
        })
    }

    #[test]
    fn test_parse_book_or_author_tool() {
        let tool = parse_tool_call("get_book_or_author", r#"{"query": "Dune"}"#).unwrap();
        match tool {
            ToolCall::GetBookOrAuthor { query } => assert_eq!(query, "Dune"),
            _ => panic!("Expected GetBookOrAuthor tool"),
        }
    }

    #[test]
    fn test_parse_author_books_default_limit() {
        let tool = parse_tool_call("get_author_books", r#"{"author": "Frank Herbert"}"#).unwrap();
        match tool {
            ToolCall::GetAuthorBooks { author, limit } => {
                assert_eq!(author, "Frank Herbert");
                assert_eq!(limit, 5);
            }
            _ => panic!("Expected GetAuthorBooks tool"),
        }
    }

    #[test]
    fn test_parse_similar_books_tool() {
        let tool = parse_tool_call(
            "get_similar_books",
            r#"{"terms": ["space", "politics"], "limit": 3}"#,
        )
        .unwrap();
        match tool {
            ToolCall::GetSimilarBooks { terms, limit } => {
                assert_eq!(terms, vec!["space", "politics"]);
                assert_eq!(limit, 3);
            }
            _ => panic!("Expected GetSimilarBooks tool"),
        }
    }

    #[test]
    fn test_parse_unknown_tool() {
        assert!(parse_tool_call("get_weather", "{}").is_err());
    }

    #[test]
    fn test_parse_missing_argument() {
        assert!(parse_tool_call("get_book_or_author", "{}").is_err());
        assert!(parse_tool_call("get_similar_books", r#"{"limit": 3}"#).is_err());
    }

    #[tokio::test]
    async fn test_execute_book_lookup_formats_present_fields_only() {
        let context = ToolContext::new(Arc::new(StaticProvider {
            record: Some(BookRecord {
                title: Some("Dune".to_string()),
                authors: Some(vec!["Frank Herbert".to_string()]),
                description: None,
                published_date: Some("1965-08-01".to_string()),
                preview_link: None,
            }),
            author_books: Vec::new(),
            similar: Vec::new(),
        }));

        let output = context
            .execute(&ToolCall::GetBookOrAuthor {
                query: "Dune".to_string(),
            })
            .await
            .unwrap();

        assert!(output.contains("Title: Dune"));
        assert!(output.contains("Authors: Frank Herbert"));
        assert!(output.contains("Published: 1965-08-01"));
        assert!(!output.contains("Preview:"));
    }

    #[tokio::test]
    async fn test_execute_author_books_respects_limit() {
        let context = ToolContext::new(Arc::new(StaticProvider {
            record: None,
            author_books: vec![
                AuthorBook {
                    title: Some("Dune Messiah".to_string()),
                    published_date: Some("1969".to_string()),
                    preview_link: None,
                    thumbnail: None,
                },
                AuthorBook {
                    title: Some("Dune".to_string()),
                    published_date: Some("1965-08-01".to_string()),
                    preview_link: None,
                    thumbnail: None,
                },
            ],
            similar: Vec::new(),
        }));

        let output = context
            .execute(&ToolCall::GetAuthorBooks {
                author: "Frank Herbert".to_string(),
                limit: 1,
            })
            .await
            .unwrap();

        assert!(output.contains("1. Dune Messiah"));
        assert!(!output.contains("2."));
    }

    #[tokio::test]
    async fn test_execute_not_found_propagates() {
        let context = ToolContext::new(empty_provider());

        let err = context
            .execute(&ToolCall::GetBookOrAuthor {
                query: "zxqv".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, HylleError::NotFound(ref q) if q == "zxqv"));
    }
}
