//! Wire types for the interview API.

use serde::{Deserialize, Serialize};

use crate::transcript::TranscriptEntry;

/// Body accepted by both interview endpoints. Missing fields fall back to
/// defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct InterviewRequest {
    /// Free-form interview context (session goals, participant background).
    #[serde(default)]
    pub context: String,
    /// Ordered transcript entries, oldest first.
    #[serde(default)]
    pub transcript: Vec<TranscriptEntry>,
}

/// Successful analysis payload.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub message: String,
    pub analysis: String,
}

/// Successful summary payload.
#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub message: String,
    pub summary: String,
}

/// Error payload shared by both endpoints.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
