//! Error types for catalog loading and configuration.
//!
//! Rejected toggles are not errors: they come back as `ToggleOutcome`
//! values from the session.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog JSON in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read spreadsheet {path}: {message}")]
    Excel { path: PathBuf, message: String },

    #[error("duplicate course id '{id}'")]
    DuplicateCourse { id: String },

    /// The record stored under `key` declares a different `id`.
    #[error("catalog key '{key}' does not match course id '{id}'")]
    KeyMismatch { key: String, id: String },

    #[error("required column '{column}' not found in header row")]
    MissingColumn { column: String },

    #[error("invalid number '{value}' in column '{column}' at row {row}")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    #[error("unsupported catalog format: {path}")]
    UnsupportedFormat { path: PathBuf },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}: expected a non-negative integer")]
    InvalidNumber { key: String, value: String },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
