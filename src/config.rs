//! Service configuration loaded from the environment.

use std::env;
use std::path::PathBuf;

/// Runtime configuration for the service.
///
/// Values come from environment variables; a `.env` file is honored via
/// `dotenvy` in the binary.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// TCP port the server binds on (`PORT`, default 3000).
    pub port: u16,
    /// Root directory holding shared template files
    /// (`BRANDKIT_TEMPLATE_ROOT`, default `templates`).
    pub template_root: PathBuf,
    /// Root directory for generated, publicly served output
    /// (`BRANDKIT_PUBLIC_ROOT`, default `public`).
    pub public_root: PathBuf,
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);
        let template_root = env::var("BRANDKIT_TEMPLATE_ROOT")
            .unwrap_or_else(|_| "templates".to_string())
            .into();
        let public_root = env::var("BRANDKIT_PUBLIC_ROOT")
            .unwrap_or_else(|_| "public".to_string())
            .into();

        Self {
            port,
            template_root,
            public_root,
        }
    }
}
