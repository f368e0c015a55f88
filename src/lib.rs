//! fieldnotes - HTTP backend for a UX-interview copilot
//!
//! Accepts interview transcripts over JSON, asks a completion service for
//! follow-up suggestions or summaries, and relays the text back.

pub mod assistant;
pub mod cli;
pub mod config;
pub mod llm;
pub mod server;
pub mod transcript;

use thiserror::Error;

/// Main error type for fieldnotes
#[derive(Error, Debug)]
pub enum FieldnotesError {
    #[error("Completion client not initialized. Check API key.")]
    ClientNotConfigured,

    #[error("No transcript data provided for summarization.")]
    EmptyTranscript,

    #[error("{0}")]
    Upstream(String),
}

pub type Result<T> = std::result::Result<T, FieldnotesError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "fieldnotes";
