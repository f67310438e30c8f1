//! BrandKit - per-business static asset generation service
//!
//! Shared template files carry literal `{{KEY}}` placeholder tokens. A
//! build request substitutes caller-supplied values into a set of
//! templates and writes each result as `<businessId>_<name>` under the
//! public output root, where the generated files are then served
//! statically.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use brandkit::BuildEngine;
//! use indexmap::IndexMap;
//!
//! # async fn run() {
//! let engine = BuildEngine::new("templates", "public");
//! let mut replacements = IndexMap::new();
//! replacements.insert("BUSINESS_NAME".to_string(), "Acme".to_string());
//! let results = engine
//!     .build_all("acme", &["js/config.js".to_string()], &replacements)
//!     .await;
//! assert_eq!(results.len(), 1);
//! # }
//! ```

// Core error handling
pub mod error;

// Environment-driven configuration
pub mod config;

// Template build core: substitution, path derivation, orchestration
pub mod builder;

// REST API route modules
pub mod api;

/// Service name reported by the health and description endpoints.
pub const SERVICE_NAME: &str = "BrandKit Web Service";

pub use builder::{BuildEngine, FileOutcome};
pub use config::ServiceConfig;
pub use error::BuildError;
