//! Ask command implementation.

use crate::agent::{route_utterance, Agent, Route, ToolContext};
use crate::books::GoogleBooksClient;
use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::Settings;
use anyhow::Result;
use std::sync::Arc;

/// Run the ask command.
pub async fn run_ask(
    question: &str,
    model: Option<String>,
    limit: Option<u32>,
    offline: bool,
    settings: Settings,
) -> Result<()> {
    let books = Arc::new(GoogleBooksClient::new(&settings.books)?);
    let tool_context = ToolContext::new(books);
    let limit = limit.unwrap_or(settings.books.default_limit);

    if offline {
        return run_offline(question, limit, tool_context).await;
    }

    // Pre-flight checks
    if let Err(e) = preflight::check(Operation::Ask) {
        Output::error(&format!("{}", e));
        Output::info("Use 'hylle ask --offline' to route without an API key.");
        return Err(e.into());
    }

    let model = model.unwrap_or_else(|| settings.chat.model.clone());
    let agent = Agent::new(tool_context, &model)
        .with_max_iterations(settings.chat.max_tool_iterations);

    let spinner = Output::spinner("Looking that up...");

    match agent.run(question).await {
        Ok(response) => {
            spinner.finish_and_clear();

            println!("\n{}\n", response.content);

            if !response.tool_calls.is_empty() {
                Output::header(&format!("Lookups ({})", response.tool_calls.len()));
                for call in &response.tool_calls {
                    Output::info(&format!("  {} {}", call.name, truncate(&call.arguments, 60)));
                }
                println!();
            }
        }
        Err(e) => {
            spinner.finish_and_clear();
            Output::error(&format!("Ask failed: {}", e));
            return Err(e.into());
        }
    }

    Ok(())
}

/// Route with the keyword classifier and print the raw lookup result.
async fn run_offline(question: &str, limit: u32, tools: ToolContext) -> Result<()> {
    let tool = match route_utterance(question) {
        Route::Clarify { question } => {
            Output::info(&question);
            return Ok(());
        }
        // Routes other than Clarify always map to a tool call
        route => route
            .into_tool_call(limit)
            .expect("non-clarify route maps to a tool call"),
    };

    let spinner = Output::spinner("Looking that up...");
    match tools.execute(&tool).await {
        Ok(output) => {
            spinner.finish_and_clear();
            println!("\n{}\n", output);
            Ok(())
        }
        Err(e) => {
            spinner.finish_and_clear();
            Output::error(&format!("{}", e));
            Err(e.into())
        }
    }
}

/// Truncate with ellipsis, backing up to a char boundary so multibyte
/// arguments (non-ASCII titles, author names) never split mid-character.
fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    let mut end = max_len.saturating_sub(3);
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate("Dune", 60), "Dune");
    }

    #[test]
    fn test_truncate_long_ascii() {
        let s = "a".repeat(80);
        let out = truncate(&s, 60);
        assert_eq!(out.len(), 60);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn test_truncate_multibyte_near_boundary() {
        // 56 ASCII bytes followed by two-byte chars puts a char boundary
        // mid-cut; truncation must back up instead of panicking
        let args = format!("{}{}", "a".repeat(56), "ü".repeat(5));
        let out = truncate(&args, 60);
        assert!(out.ends_with("..."));
        assert!(out.len() <= 60);
        assert!(out.is_char_boundary(out.len() - 3));
    }
}
