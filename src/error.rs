//! Error types for the template build pipeline.
//!
//! A failure while materializing a single template never aborts the rest
//! of the batch; it is captured into that file's result record, and the
//! `Display` output of `BuildError` is the message the caller sees there.

use thiserror::Error;

/// Errors raised while materializing a single template.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Template file not found: {path}")]
    TemplateNotFound { path: String },

    #[error("Invalid template path: {path}")]
    InvalidPath { path: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BuildError>;
