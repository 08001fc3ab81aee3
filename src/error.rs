//! Error types
//!
//! None of these reach a gallery: `load_catalog` turns manifest errors
//! into an empty catalog. They exist for callers that want to know why.

use std::path::PathBuf;
use thiserror::Error;

/// Retrieving, parsing or writing a manifest failed
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to request manifest from {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("manifest request to {url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("manifest is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("manifest I/O failed at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("base path must be empty, start with '/', or be an http(s) URL, got {0:?}")]
    InvalidBasePath(String),
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
