//! REST API modules for the build service.
//!
//! Each endpoint group lives in its own `*_routes.rs` module exposing a
//! `create_*_router()` constructor; `create_service_router` merges them
//! and attaches the static-file fallback.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use axum::http::StatusCode;
use axum::response::Json;
use axum::Router;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tower_http::services::ServeDir;

use crate::builder::BuildEngine;

pub mod build_routes;
pub mod file_routes;
pub mod health_routes;
pub mod info_routes;
pub mod origin;
pub mod template_routes;

pub use build_routes::create_build_router;
pub use file_routes::create_file_router;
pub use health_routes::create_health_router;
pub use info_routes::create_info_router;
pub use template_routes::create_template_router;

// ============================================================================
// State
// ============================================================================

/// Shared state for all route modules.
#[derive(Clone)]
pub struct AppState {
    /// Build engine, shared across requests.
    pub engine: Arc<BuildEngine>,
    /// Process start, for uptime reporting.
    pub started_at: Instant,
}

impl AppState {
    pub fn new(engine: BuildEngine) -> Self {
        Self {
            engine: Arc::new(engine),
            started_at: Instant::now(),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

/// Compose every route module plus the static-file fallback.
///
/// API routes are registered on the router proper, so they always win
/// over same-named files in the public root.
pub fn create_service_router(state: AppState) -> Router {
    let public_root = state.engine.public_root().to_path_buf();

    Router::new()
        .merge(create_build_router(state.clone()))
        .merge(create_health_router(state.clone()))
        .merge(create_template_router(state.clone()))
        .merge(create_file_router(state))
        .merge(create_info_router())
        .fallback_service(ServeDir::new(public_root))
}

// ============================================================================
// Shared response plumbing
// ============================================================================

/// JSON error body used across endpoints.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

pub(crate) fn bad_request(error: impl Into<String>) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: error.into(),
            message: None,
        }),
    )
}

pub(crate) fn internal_error(
    error: impl Into<String>,
    cause: impl std::fmt::Display,
) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: error.into(),
            message: Some(cause.to_string()),
        }),
    )
}

/// UTC timestamp in ISO 8601 with millisecond precision, e.g.
/// `2026-08-06T12:34:56.789Z`.
pub(crate) fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Plain file names in `dir`, sorted. A missing directory reads as empty;
/// any other I/O failure is surfaced to the caller.
pub(crate) async fn list_file_names(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut entries = match tokio::fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(err),
    };

    let mut names = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        if let Ok(name) = entry.file_name().into_string() {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}
