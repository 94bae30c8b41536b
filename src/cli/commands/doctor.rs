//! Doctor command implementation.

use crate::cli::Output;
use crate::config::Settings;
use anyhow::Result;

/// Run the doctor command: report configuration and credential status.
pub fn run_doctor(settings: &Settings) -> Result<()> {
    Output::header("Hylle diagnostics");

    Output::kv("Config file", &Settings::default_config_path().display().to_string());
    Output::kv("Books endpoint", &settings.books.endpoint);
    Output::kv("Default limit", &settings.books.default_limit.to_string());
    Output::kv("Lookup timeout", &format!("{}s", settings.books.timeout_seconds));
    Output::kv("Chat model", &settings.chat.model);

    println!();

    match std::env::var("OPENAI_API_KEY") {
        Ok(key) if !key.is_empty() => {
            Output::success("OPENAI_API_KEY is set; 'ask' and 'chat' are available.");
        }
        _ => {
            Output::warning("OPENAI_API_KEY is not set.");
            Output::info("Direct lookups ('book', 'author', 'similar') and 'ask --offline' still work.");
        }
    }

    Ok(())
}
