//! Pre-flight checks before operations that need credentials.
//!
//! The book lookups themselves are unauthenticated; only the LLM-routed
//! commands need an API key. Checking up front gives a clear message
//! instead of a mid-call API error.

use crate::error::{HylleError, Result};

/// Requirements for different operations.
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    /// LLM-routed questions and chat require an OpenAI API key.
    Ask,
    /// Direct lookups (and offline routing) require nothing.
    Lookup,
}

/// Run pre-flight checks for the given operation.
///
/// Returns Ok(()) if all checks pass, or an error describing what's missing.
pub fn check(operation: Operation) -> Result<()> {
    match operation {
        Operation::Ask => {
            check_api_key()?;
        }
        Operation::Lookup => {
            // No external requirements for direct lookups
        }
    }
    Ok(())
}

/// Check if OpenAI API key is configured.
fn check_api_key() -> Result<()> {
    match std::env::var("OPENAI_API_KEY") {
        Ok(key) if !key.is_empty() => Ok(()),
        Ok(_) => Err(HylleError::Config(
            "OPENAI_API_KEY is empty. Set it with: export OPENAI_API_KEY='sk-...'".to_string(),
        )),
        Err(_) => Err(HylleError::Config(
            "OPENAI_API_KEY not set. Set it with: export OPENAI_API_KEY='sk-...'".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_lookup_no_requirements() {
        // Direct lookups should always pass pre-flight
        assert!(check(Operation::Lookup).is_ok());
    }
}
