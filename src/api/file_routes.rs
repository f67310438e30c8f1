//! Generated-file listing endpoint.
//!
//! Lists the output files previously built for one business identifier,
//! recognized by their `<businessId>_` file-name prefix, with absolute
//! URLs derived from the incoming request.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde::Serialize;

use super::origin::RequestOrigin;
use super::{internal_error, list_file_names, AppState, ErrorResponse};

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct FileSets {
    pub js: Vec<String>,
    pub css: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessFilesResponse {
    pub business_id: String,
    pub files: FileSets,
    pub urls: FileSets,
    pub total: usize,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /files/:business_id
async fn list_business_files(
    State(state): State<AppState>,
    Path(business_id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<BusinessFilesResponse>, (StatusCode, Json<ErrorResponse>)> {
    let origin = RequestOrigin::from_headers(&headers);
    let public = state.engine.public_root();
    let prefix = format!("{business_id}_");

    let js: Vec<String> = list_file_names(&public.join("js"))
        .await
        .map_err(|err| internal_error("Failed to list business files", err))?
        .into_iter()
        .filter(|name| name.starts_with(&prefix))
        .collect();
    let css: Vec<String> = list_file_names(&public.join("css"))
        .await
        .map_err(|err| internal_error("Failed to list business files", err))?
        .into_iter()
        .filter(|name| name.starts_with(&prefix))
        .collect();

    let urls = FileSets {
        js: js
            .iter()
            .map(|name| origin.url_for(&format!("js/{name}")))
            .collect(),
        css: css
            .iter()
            .map(|name| origin.url_for(&format!("css/{name}")))
            .collect(),
    };
    let total = js.len() + css.len();

    Ok(Json(BusinessFilesResponse {
        business_id,
        files: FileSets { js, css },
        urls,
        total,
    }))
}

// ============================================================================
// Router
// ============================================================================

/// Create router for the generated-file listing endpoint.
pub fn create_file_router(state: AppState) -> Router {
    Router::new()
        .route("/files/:business_id", get(list_business_files))
        .with_state(state)
}
