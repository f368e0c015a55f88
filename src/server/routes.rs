//! Request handlers for the interview endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, info};
use uuid::Uuid;

use crate::assistant::AnalysisOutcome;
use crate::FieldnotesError;

use super::api::{AnalyzeResponse, ErrorResponse, InterviewRequest, SummarizeResponse};
use super::AppState;

/// Liveness probe for the root path.
pub async fn home() -> &'static str {
    "fieldnotes backend is running!"
}

/// POST /api/analyze: suggest follow-up questions or emerging themes for
/// the interview so far.
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<InterviewRequest>,
) -> Response {
    let request_id = Uuid::new_v4();
    info!(
        "analyze request {} with {} transcript entries",
        request_id,
        request.transcript.len()
    );

    match state
        .assistant
        .analyze(&request.context, &request.transcript)
        .await
    {
        Ok(AnalysisOutcome::Skipped) => Json(AnalyzeResponse {
            message: "No transcript data provided for analysis.".to_string(),
            analysis: String::new(),
        })
        .into_response(),
        Ok(AnalysisOutcome::Suggestions(analysis)) => Json(AnalyzeResponse {
            message: "Analysis complete.".to_string(),
            analysis,
        })
        .into_response(),
        Err(e) => {
            error!("analyze request {} failed: {}", request_id, e);
            completion_error("analysis", e)
        }
    }
}

/// POST /api/summarize: condense the full interview into key points.
pub async fn summarize(
    State(state): State<AppState>,
    Json(request): Json<InterviewRequest>,
) -> Response {
    let request_id = Uuid::new_v4();
    info!(
        "summarize request {} with {} transcript entries",
        request_id,
        request.transcript.len()
    );

    match state
        .assistant
        .summarize(&request.context, &request.transcript)
        .await
    {
        Ok(summary) => Json(SummarizeResponse {
            message: "Summary generated successfully.".to_string(),
            summary,
        })
        .into_response(),
        Err(e) => {
            error!("summarize request {} failed: {}", request_id, e);
            completion_error("summary", e)
        }
    }
}

/// Map an operation failure onto the right status and error body. The
/// `op` name only shows up in upstream failures.
fn completion_error(op: &str, err: FieldnotesError) -> Response {
    let (status, error) = match err {
        FieldnotesError::EmptyTranscript => (StatusCode::BAD_REQUEST, err.to_string()),
        FieldnotesError::ClientNotConfigured => {
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
        FieldnotesError::Upstream(message) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to get {op} from completion service: {message}"),
        ),
    };

    (status, Json(ErrorResponse { error })).into_response()
}
