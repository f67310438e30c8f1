//! Template listing endpoint.
//!
//! Lists the `.js` and `.css` template files under the conventional
//! `js/` and `css/` subdirectories of the template root. The convention
//! is not enforced elsewhere; a missing subdirectory simply lists empty.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde::Serialize;

use super::{internal_error, list_file_names, AppState, ErrorResponse};

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct TemplatesResponse {
    pub available_templates: TemplateSets,
    pub usage: TemplateUsage,
}

#[derive(Debug, Serialize)]
pub struct TemplateSets {
    pub js: Vec<String>,
    pub css: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct TemplateUsage {
    pub endpoint: &'static str,
    pub example_files: Vec<&'static str>,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /templates
async fn list_templates(
    State(state): State<AppState>,
) -> Result<Json<TemplatesResponse>, (StatusCode, Json<ErrorResponse>)> {
    let root = state.engine.template_root();

    let js = list_file_names(&root.join("js"))
        .await
        .map_err(|err| internal_error("Failed to list templates", err))?
        .into_iter()
        .filter(|name| name.ends_with(".js"))
        .collect();
    let css = list_file_names(&root.join("css"))
        .await
        .map_err(|err| internal_error("Failed to list templates", err))?
        .into_iter()
        .filter(|name| name.ends_with(".css"))
        .collect();

    Ok(Json(TemplatesResponse {
        available_templates: TemplateSets { js, css },
        usage: TemplateUsage {
            endpoint: "POST /build/:businessId",
            example_files: vec!["js/config.js", "css/base.css"],
        },
    }))
}

// ============================================================================
// Router
// ============================================================================

/// Create router for the template listing endpoint.
pub fn create_template_router(state: AppState) -> Router {
    Router::new()
        .route("/templates", get(list_templates))
        .with_state(state)
}
