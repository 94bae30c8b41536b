//! Deterministic keyword router.
//!
//! A rule-based substitute for the model-driven routing policy. It maps a
//! user utterance onto the same closed set of lookup operations and asks
//! one clarifying question when intent is unclear. Keyword matching is
//! best-effort; the LLM route remains the primary classifier.

use super::tools::ToolCall;

/// Question returned when the utterance gives no usable intent.
const CLARIFYING_QUESTION: &str = "Are you looking for a specific book, books by an author, \
or recommendations similar to something you've read?";

/// Strong author phrasings, checked before similarity markers so that
/// "recommend books by X" routes to the bibliography lookup.
const AUTHOR_MARKERS: &[&str] = &["books by", "written by", "novels by", "works by"];

/// Similarity / recommendation phrasings.
const SIMILAR_MARKERS: &[&str] = &["similar to", "books like", "something like", "like", "recommend"];

/// Weak author phrasing, checked after similarity markers.
const WEAK_AUTHOR_MARKERS: &[&str] = &["author"];

/// Conversational lead-ins stripped from title lookups.
const TITLE_PREFIXES: &[&str] = &["tell me about", "what is", "look up", "search for", "find"];

/// Filler words dropped when extracting similarity terms.
const STOPWORDS: &[&str] = &[
    "a", "an", "the", "me", "my", "some", "book", "books", "novel", "novels", "to", "read",
    "please", "that", "is", "are", "for", "of", "and", "or", "i", "you", "can", "something",
    "like", "by",
];

/// Routing outcome for a single utterance.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    /// Title (or best-match) lookup.
    BookOrAuthor { query: String },
    /// Author bibliography lookup.
    AuthorBooks { author: String },
    /// Similar-books lookup from extracted terms.
    SimilarBooks { terms: Vec<String> },
    /// Intent unclear; ask exactly one clarifying question.
    Clarify { question: String },
}

impl Route {
    /// Convert the route into an executable tool call, if any.
    pub fn into_tool_call(self, limit: u32) -> Option<ToolCall> {
        match self {
            Route::BookOrAuthor { query } => Some(ToolCall::GetBookOrAuthor { query }),
            Route::AuthorBooks { author } => Some(ToolCall::GetAuthorBooks { author, limit }),
            Route::SimilarBooks { terms } => Some(ToolCall::GetSimilarBooks { terms, limit }),
            Route::Clarify { .. } => None,
        }
    }
}

/// Classify a user utterance into one lookup route.
pub fn route_utterance(utterance: &str) -> Route {
    let utterance = utterance.trim();
    if utterance.is_empty() {
        return clarify();
    }

    // ASCII lowering keeps byte offsets aligned with the original text
    let lower = utterance.to_ascii_lowercase();

    for marker in AUTHOR_MARKERS {
        if let Some(rest) = text_after_marker(&lower, utterance, marker) {
            let author = trim_edges(rest);
            if author.is_empty() {
                return clarify();
            }
            return Route::AuthorBooks {
                author: author.to_string(),
            };
        }
    }

    for marker in SIMILAR_MARKERS {
        if let Some(rest) = text_after_marker(&lower, utterance, marker) {
            let terms = extract_terms(rest);
            if terms.is_empty() {
                return clarify();
            }
            return Route::SimilarBooks { terms };
        }
    }

    for marker in WEAK_AUTHOR_MARKERS {
        if let Some(rest) = text_after_marker(&lower, utterance, marker) {
            let author = trim_edges(rest);
            if !author.is_empty() {
                return Route::AuthorBooks {
                    author: author.to_string(),
                };
            }
        }
    }

    // Everything else is treated as a title lookup
    let mut query = utterance;
    for prefix in TITLE_PREFIXES {
        if lower.starts_with(prefix) {
            query = utterance[prefix.len()..].trim_start();
            break;
        }
    }
    let query = trim_edges(query);
    if query.is_empty() {
        return clarify();
    }

    Route::BookOrAuthor {
        query: query.to_string(),
    }
}

fn clarify() -> Route {
    Route::Clarify {
        question: CLARIFYING_QUESTION.to_string(),
    }
}

/// Find `marker` at a word boundary and return the original text after it.
fn text_after_marker<'a>(lower: &str, original: &'a str, marker: &str) -> Option<&'a str> {
    let mut search_from = 0;
    while let Some(found) = lower[search_from..].find(marker) {
        let start = search_from + found;
        let end = start + marker.len();

        let boundary_before =
            start == 0 || !lower.as_bytes()[start - 1].is_ascii_alphanumeric();
        let boundary_after =
            end == lower.len() || !lower.as_bytes()[end].is_ascii_alphanumeric();

        if boundary_before && boundary_after {
            return Some(original[end..].trim_start());
        }
        search_from = end;
    }
    None
}

/// Strip surrounding whitespace and sentence punctuation.
fn trim_edges(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || ".,!?;:'\"()".contains(c))
}

/// Extract keyword terms, dropping filler words.
fn extract_terms(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(trim_edges)
        .filter(|word| !word.is_empty())
        .filter(|word| !STOPWORDS.contains(&word.to_ascii_lowercase().as_str()))
        .map(|word| word.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_title() {
        assert_eq!(
            route_utterance("Dune"),
            Route::BookOrAuthor {
                query: "Dune".to_string()
            }
        );
    }

    #[test]
    fn test_route_title_with_lead_in() {
        assert_eq!(
            route_utterance("Tell me about The Left Hand of Darkness"),
            Route::BookOrAuthor {
                query: "The Left Hand of Darkness".to_string()
            }
        );
    }

    #[test]
    fn test_route_author() {
        assert_eq!(
            route_utterance("books by Frank Herbert"),
            Route::AuthorBooks {
                author: "Frank Herbert".to_string()
            }
        );
    }

    #[test]
    fn test_route_author_beats_recommend() {
        assert_eq!(
            route_utterance("Recommend books by Ursula K. Le Guin"),
            Route::AuthorBooks {
                author: "Ursula K. Le Guin".to_string()
            }
        );
    }

    #[test]
    fn test_route_similar() {
        assert_eq!(
            route_utterance("something like Dune"),
            Route::SimilarBooks {
                terms: vec!["Dune".to_string()]
            }
        );
    }

    #[test]
    fn test_route_similar_extracts_terms() {
        assert_eq!(
            route_utterance("recommend some space opera novels"),
            Route::SimilarBooks {
                terms: vec!["space".to_string(), "opera".to_string()]
            }
        );
    }

    #[test]
    fn test_marker_requires_word_boundary() {
        // "unlike" must not trigger the "like" marker
        assert_eq!(
            route_utterance("Unlike Any Other"),
            Route::BookOrAuthor {
                query: "Unlike Any Other".to_string()
            }
        );
    }

    #[test]
    fn test_route_empty_clarifies() {
        assert!(matches!(route_utterance("   "), Route::Clarify { .. }));
    }

    #[test]
    fn test_route_similar_without_terms_clarifies() {
        assert!(matches!(
            route_utterance("recommend some books"),
            Route::Clarify { .. }
        ));
    }

    #[test]
    fn test_into_tool_call_carries_limit() {
        let route = route_utterance("books by Frank Herbert");
        match route.into_tool_call(3) {
            Some(ToolCall::GetAuthorBooks { author, limit }) => {
                assert_eq!(author, "Frank Herbert");
                assert_eq!(limit, 3);
            }
            other => panic!("Unexpected tool call: {:?}", other),
        }
    }

    #[test]
    fn test_clarify_has_no_tool_call() {
        assert!(route_utterance("").into_tool_call(5).is_none());
    }
}
