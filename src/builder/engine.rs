//! Build orchestration: read each template, substitute tokens, and write
//! the business-specific output file.
//!
//! The batch is stateless and sequential within a request. Each file gets
//! an independent outcome; a failure is recorded and the loop moves on.
//! Nothing serializes writes across concurrent requests, so two builds
//! targeting the same output path race with last-writer-wins.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tracing::{info, warn};

use crate::error::BuildError;

use super::paths::{output_reference, sanitize_reference};
use super::substitution::apply_replacements;

/// Outcome of building a single template reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// The output was written; carries the public-root-relative path.
    Written { output: String },
    /// This file failed; the batch continued with the next reference.
    Failed { message: String },
}

/// Materializes templates into per-business output files.
///
/// One engine is constructed at startup and shared across requests via
/// the router state; it holds no mutable state of its own.
#[derive(Debug, Clone)]
pub struct BuildEngine {
    template_root: PathBuf,
    public_root: PathBuf,
}

impl BuildEngine {
    pub fn new(template_root: impl Into<PathBuf>, public_root: impl Into<PathBuf>) -> Self {
        Self {
            template_root: template_root.into(),
            public_root: public_root.into(),
        }
    }

    pub fn template_root(&self) -> &Path {
        &self.template_root
    }

    pub fn public_root(&self) -> &Path {
        &self.public_root
    }

    /// Build every reference in input order, one outcome per file.
    pub async fn build_all(
        &self,
        business_id: &str,
        files: &[String],
        replacements: &IndexMap<String, String>,
    ) -> Vec<(String, FileOutcome)> {
        let mut results = Vec::with_capacity(files.len());
        for file in files {
            let outcome = match self.build_one(business_id, file, replacements).await {
                Ok(output) => FileOutcome::Written { output },
                Err(err) => {
                    warn!(file = %file, error = %err, "template build failed");
                    FileOutcome::Failed {
                        message: err.to_string(),
                    }
                }
            };
            results.push((file.clone(), outcome));
        }

        let written = results
            .iter()
            .filter(|(_, o)| matches!(o, FileOutcome::Written { .. }))
            .count();
        info!(
            business_id = %business_id,
            requested = files.len(),
            written,
            "build completed"
        );
        results
    }

    /// Build a single reference, returning the output's public-root-relative
    /// path.
    async fn build_one(
        &self,
        business_id: &str,
        reference: &str,
        replacements: &IndexMap<String, String>,
    ) -> Result<String, BuildError> {
        let relative = sanitize_reference(reference)?;
        let template_path = self.template_root.join(&relative);

        if !tokio::fs::try_exists(&template_path).await.unwrap_or(false) {
            return Err(BuildError::TemplateNotFound {
                path: reference.to_string(),
            });
        }

        let template = tokio::fs::read_to_string(&template_path).await?;
        let content = apply_replacements(&template, replacements);

        let output_rel = output_reference(business_id, &relative)?;
        let output_path = self.public_root.join(&output_rel);
        if let Some(parent) = output_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&output_path, content).await?;

        Ok(output_rel.to_string_lossy().into_owned())
    }
}
