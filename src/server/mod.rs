//! HTTP server wiring: router, shared state, and the serve loop.

mod api;
mod routes;

pub use api::{AnalyzeResponse, ErrorResponse, InterviewRequest, SummarizeResponse};

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::assistant::Assistant;
use crate::config::Settings;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub assistant: Arc<Assistant>,
}

/// Build the application router. Browser clients may call the API routes
/// from any origin; the root liveness route stays CORS-free.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/api/analyze", post(routes::analyze))
        .route("/api/summarize", post(routes::summarize))
        .layer(cors);

    Router::new()
        .route("/", get(routes::home))
        .merge(api)
        .with_state(state)
}

/// Serve the API until Ctrl+C.
pub async fn run(settings: &Settings) -> Result<()> {
    let assistant = Assistant::from_settings(settings)?;
    let state = AppState {
        assistant: Arc::new(assistant),
    };
    let app = build_router(state);

    let addr = settings.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Listening on http://{}", addr);

    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            result.context("Server error")?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutting down");
        }
    }

    Ok(())
}
