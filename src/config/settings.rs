//! Configuration settings for Hylle.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub books: BooksSettings,
    pub chat: ChatSettings,
}


/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Book metadata provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BooksSettings {
    /// Volumes search endpoint.
    pub endpoint: String,
    /// Default maximum number of books returned by list lookups.
    pub default_limit: u32,
    /// Per-call deadline for lookup requests, in seconds.
    pub timeout_seconds: u64,
}

impl Default for BooksSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://www.googleapis.com/books/v1/volumes".to_string(),
            default_limit: 5,
            timeout_seconds: 30,
        }
    }
}

/// Chat and agent settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatSettings {
    /// LLM model for routing and summarization.
    pub model: String,
    /// Maximum tool-calling iterations per question.
    pub max_tool_iterations: usize,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            max_tool_iterations: 10,
        }
    }
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to the default configuration file.
    pub fn save(&self) -> crate::error::Result<()> {
        self.save_to(&Self::default_config_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::HylleError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("hylle")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.books.default_limit, 5);
        assert_eq!(settings.books.timeout_seconds, 30);
        assert!(settings.books.endpoint.contains("books/v1/volumes"));
        assert_eq!(settings.chat.model, "gpt-4o-mini");
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [books]
            default_limit = 3
            "#,
        )
        .unwrap();
        assert_eq!(settings.books.default_limit, 3);
        // Untouched sections keep their defaults
        assert_eq!(settings.books.timeout_seconds, 30);
        assert_eq!(settings.general.log_level, "info");
    }
}
