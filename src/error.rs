//! Error types for Hylle.

use thiserror::Error;

/// Library-level error type for Hylle operations.
#[derive(Error, Debug)]
pub enum HylleError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No results found for '{0}'")]
    NotFound(String),

    #[error("Lookup for '{query}' timed out after {seconds}s")]
    Timeout { query: String, seconds: u64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("OpenAI API error: {0}")]
    OpenAI(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Agent error: {0}")]
    Agent(String),
}

/// Result type alias for Hylle operations.
pub type Result<T> = std::result::Result<T, HylleError>;
