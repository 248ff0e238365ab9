//! The carcare agent loop.
//!
//! Orchestrates LLM calls and tool execution: send the conversation to
//! the provider, run any tools the model requests, feed the results
//! back, and repeat until the model answers in plain text.

pub mod loop_runner;
pub mod prompt;

pub use loop_runner::AgentLoop;
pub use prompt::CAR_CARE_SYSTEM_PROMPT;
