//! LLM module for fieldnotes
//!
//! Talks to an OpenAI-compatible completion service for interview analysis
//! and summaries.

mod client;
mod openai;
pub mod prompts;

pub use client::{build_client, CompletionClient, CompletionRequest};
pub use openai::OpenAiClient;
