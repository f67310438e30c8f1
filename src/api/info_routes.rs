//! Service description endpoint.

use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde::Serialize;

use crate::SERVICE_NAME;

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub version: &'static str,
    pub endpoints: EndpointList,
}

#[derive(Debug, Serialize)]
pub struct EndpointList {
    pub build: &'static str,
    pub health: &'static str,
    pub templates: &'static str,
    pub files: &'static str,
}

/// GET /api
async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        endpoints: EndpointList {
            build: "POST /build/:businessId",
            health: "GET /health",
            templates: "GET /templates",
            files: "GET /files/:businessId",
        },
    })
}

/// Create router for the service description endpoint.
pub fn create_info_router() -> Router {
    Router::new().route("/api", get(service_info))
}
