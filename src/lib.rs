//! Photo catalog for a portfolio site
//!
//! Reads the site's photo manifest and produces the gallery's photos,
//! newest first, with titles and display dates taken from the filenames.
//!
//! ```no_run
//! # async fn demo() {
//! use photo_catalog::{load_catalog, CatalogBuilder, ManifestSource};
//!
//! let source = ManifestSource::parse("https://example.com/photos/manifest.json");
//! let catalog = load_catalog(&source, &CatalogBuilder::new("")).await;
//! for photo in catalog.gallery(true) {
//!     println!("{} - {}", photo.title(), photo.description());
//! }
//! # }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod gallery;
pub mod manifest;

pub use catalog::{CaptureInstant, Catalog, CatalogBuilder, Photo, UnknownDatePolicy};
pub use config::CatalogConfig;
pub use error::{CatalogError, ConfigError, ManifestError};
pub use manifest::{generate_manifest, load_catalog, Manifest, ManifestSource};
