//! Photo manifest module
//!
//! The manifest is a static JSON document listing the photo filenames:
//! `{ "photos": [...], "generated": "...", "count": n }`
//!
//! This module handles:
//! - Reading the manifest from a URL or a local file
//! - Turning it into a catalog without ever failing (load_catalog)
//! - Writing a manifest for a directory of photos (generate.rs)

pub mod generate;

pub use generate::{generate_manifest, MANIFEST_FILE_NAME};

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::catalog::{Catalog, CatalogBuilder};
use crate::error::ManifestError;

/// The manifest document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Photo filenames, in no particular order
    #[serde(default, deserialize_with = "null_as_empty")]
    pub photos: Vec<String>,
    /// When the manifest was written (RFC 3339)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Manifest {
    pub fn from_json(bytes: &[u8]) -> Result<Self, ManifestError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Pretty-printed with two-space indentation
    pub fn to_json_pretty(&self) -> Result<String, ManifestError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Where a manifest is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestSource {
    Url(String),
    File(PathBuf),
}

impl ManifestSource {
    /// http(s) URLs are fetched, anything else is a file path
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            ManifestSource::Url(location.to_string())
        } else {
            ManifestSource::File(PathBuf::from(location))
        }
    }

    /// Retrieve and parse the manifest.
    ///
    /// A single attempt with the HTTP client's defaults: no retries and
    /// no extra timeout.
    pub async fn fetch(&self) -> Result<Manifest, ManifestError> {
        match self {
            ManifestSource::Url(url) => fetch_url(url).await,
            ManifestSource::File(path) => read_file(path).await,
        }
    }
}

impl fmt::Display for ManifestSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestSource::Url(url) => write!(f, "{}", url),
            ManifestSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

async fn fetch_url(url: &str) -> Result<Manifest, ManifestError> {
    let request_error = |source: reqwest::Error| ManifestError::Request {
        url: url.to_string(),
        source,
    };

    let response = reqwest::get(url).await.map_err(request_error)?;
    let status = response.status();
    if !status.is_success() {
        return Err(ManifestError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response.bytes().await.map_err(request_error)?;
    Manifest::from_json(&body)
}

async fn read_file(path: &std::path::Path) -> Result<Manifest, ManifestError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    Manifest::from_json(&bytes)
}

/// Load the manifest and build the catalog.
///
/// Any manifest failure is logged and yields an empty catalog; the
/// gallery then simply has nothing to show.
pub async fn load_catalog(source: &ManifestSource, builder: &CatalogBuilder) -> Catalog {
    info!(%source, "loading photo manifest");
    match source.fetch().await {
        Ok(manifest) => {
            info!(entries = manifest.photos.len(), "loaded manifest");
            builder.build(&manifest.photos)
        }
        Err(err) => {
            warn!(%source, error = %err, "manifest unavailable, showing no photos");
            Catalog::empty(builder.base_path())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_photos_is_required() {
        let manifest = Manifest::from_json(br#"{"photos": ["a.jpg", "b.png"]}"#).unwrap();
        assert_eq!(manifest.photos, vec!["a.jpg", "b.png"]);
        assert_eq!(manifest.generated, None);
        assert_eq!(manifest.count, None);
    }

    #[test]
    fn test_missing_or_null_photos_is_empty() {
        assert!(Manifest::from_json(b"{}").unwrap().photos.is_empty());
        assert!(Manifest::from_json(br#"{"photos": null}"#)
            .unwrap()
            .photos
            .is_empty());
    }

    #[test]
    fn test_full_manifest() {
        let manifest = Manifest::from_json(
            br#"{
                "photos": ["20240101-12-00-00-beach.jpg"],
                "generated": "2024-06-15T10:00:00.000Z",
                "count": 1
            }"#,
        )
        .unwrap();
        assert_eq!(manifest.count, Some(1));
        assert_eq!(manifest.generated.as_deref(), Some("2024-06-15T10:00:00.000Z"));
    }

    #[test]
    fn test_malformed_json() {
        let err = Manifest::from_json(b"<html>not found</html>").unwrap_err();
        assert!(matches!(err, ManifestError::Json(_)));
    }

    #[test]
    fn test_source_parse() {
        assert_eq!(
            ManifestSource::parse("https://example.com/photos/manifest.json"),
            ManifestSource::Url("https://example.com/photos/manifest.json".to_string())
        );
        assert_eq!(
            ManifestSource::parse("public/photos/manifest.json"),
            ManifestSource::File(PathBuf::from("public/photos/manifest.json"))
        );
    }

    #[tokio::test]
    async fn test_missing_file_gives_empty_catalog() {
        let source = ManifestSource::parse("/nonexistent/photos/manifest.json");
        assert!(matches!(source.fetch().await, Err(ManifestError::Io { .. })));

        let catalog = load_catalog(&source, &CatalogBuilder::new("/site")).await;
        assert!(catalog.is_empty());
        assert_eq!(catalog.hero_path(), "/site/bg.jpg");
    }

    #[tokio::test]
    async fn test_file_manifest_builds_sorted_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manifest.json");
        std::fs::write(
            &path,
            r#"{"photos": ["20240101-12-00-00-beach.jpg", "notes.txt", "20240615-10-00-00-hills.jpg"]}"#,
        )
        .unwrap();

        let catalog = load_catalog(&ManifestSource::File(path), &CatalogBuilder::default()).await;
        let titles: Vec<&str> = catalog.iter().map(|p| p.title()).collect();
        assert_eq!(titles, vec!["hills", "beach"]);
    }
}
