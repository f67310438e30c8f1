//! Request origin reconstruction for generated-file URLs.

use axum::http::{header, HeaderMap};

/// Scheme and host of the incoming request, used to mint absolute URLs
/// for generated files.
#[derive(Debug, Clone)]
pub struct RequestOrigin {
    pub scheme: String,
    pub host: String,
}

impl RequestOrigin {
    /// Reads `X-Forwarded-Proto` (fallback `http`) and the `Host` header
    /// (fallback `localhost`).
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let scheme = headers
            .get("x-forwarded-proto")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("http")
            .to_string();
        let host = headers
            .get(header::HOST)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("localhost")
            .to_string();

        Self { scheme, host }
    }

    /// Absolute URL for a public-root-relative file path.
    pub fn url_for(&self, relative: &str) -> String {
        format!("{}://{}/{}", self.scheme, self.host, relative)
    }
}
