//! Agent system for conversational book lookups.
//!
//! Provides an LLM agent that routes natural-language questions to the
//! book lookup tools and summarizes the results, plus a deterministic
//! keyword router satisfying the same routing contract.

mod router;
mod runner;
mod tools;

pub use router::{route_utterance, Route};
pub use runner::{Agent, AgentResponse, ToolCallRecord, DEFAULT_SYSTEM_PROMPT};
pub use tools::{parse_tool_call, tool_definitions, ToolCall, ToolContext};
