//! Build endpoint: materialize a set of templates for one business.
//!
//! The request carries a flat replacement mapping and a list of template
//! references; the response enumerates one result record per reference,
//! input order preserved, with per-file failures embedded rather than
//! failing the batch.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Json;
use axum::routing::post;
use axum::Router;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::builder::paths::is_valid_business_id;
use crate::builder::FileOutcome;

use super::origin::RequestOrigin;
use super::{bad_request, iso_timestamp, AppState, ErrorResponse};

const INVALID_BODY: &str = "Invalid request body. Expected replacements object and files array";

// ============================================================================
// Request/Response Types
// ============================================================================

/// Body of `POST /build/:business_id`.
///
/// `replacements` keeps the JSON object's key order; substitution is
/// applied entry by entry in exactly that order.
#[derive(Debug, Deserialize)]
pub struct BuildRequest {
    pub replacements: IndexMap<String, String>,
    pub files: Vec<String>,
}

/// One result record per requested template.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildFileResult {
    pub file: String,
    pub status: BuildStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BuildStatus {
    Success,
    Error,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildResponse {
    pub business_id: String,
    pub results: Vec<BuildFileResult>,
    pub timestamp: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /build/:business_id
async fn build_for_business(
    State(state): State<AppState>,
    Path(business_id): Path<String>,
    headers: HeaderMap,
    body: Result<Json<BuildRequest>, JsonRejection>,
) -> Result<Json<BuildResponse>, (StatusCode, Json<ErrorResponse>)> {
    let origin = RequestOrigin::from_headers(&headers);

    let business_id = business_id.trim().to_string();
    if business_id.is_empty() {
        return Err(bad_request("Business ID is required"));
    }
    if !is_valid_business_id(&business_id) {
        return Err(bad_request("Business ID must not contain path separators"));
    }

    let Json(request) = body.map_err(|_| bad_request(INVALID_BODY))?;

    let outcomes = state
        .engine
        .build_all(&business_id, &request.files, &request.replacements)
        .await;

    let results = outcomes
        .into_iter()
        .map(|(file, outcome)| match outcome {
            FileOutcome::Written { output } => BuildFileResult {
                url: Some(origin.url_for(&output)),
                file,
                status: BuildStatus::Success,
                output_file: Some(output),
                message: None,
            },
            FileOutcome::Failed { message } => BuildFileResult {
                file,
                status: BuildStatus::Error,
                output_file: None,
                url: None,
                message: Some(message),
            },
        })
        .collect();

    Ok(Json(BuildResponse {
        business_id,
        results,
        timestamp: iso_timestamp(),
    }))
}

// ============================================================================
// Router
// ============================================================================

/// Create router for the build endpoint.
pub fn create_build_router(state: AppState) -> Router {
    Router::new()
        .route("/build/:business_id", post(build_for_business))
        .with_state(state)
}
