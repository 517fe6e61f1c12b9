//! Error types for document loading.
//!
//! Provides a unified error type covering all failure modes: I/O,
//! serialization, unknown file formats and documents that fail validation.

use helplayout_core::ValidationError;
use thiserror::Error;

/// Errors that can occur while loading or saving documents.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing or serialization failure.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// File extension is neither JSON nor YAML.
    #[error("unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// Document parsed but failed validation.
    #[error("invalid document: {}", join_errors(.0))]
    InvalidDocument(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Convenience alias for results with [`LoaderError`].
pub type Result<T> = std::result::Result<T, LoaderError>;
