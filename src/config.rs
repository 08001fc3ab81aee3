//! Catalog configuration
//!
//! Loaded from a TOML file. Every field has a default, so an empty file
//! (or no file at all) describes a site served from the domain root with
//! its manifest at `public/photos/manifest.json`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::catalog::location::{default_keywords, Keyword};
use crate::catalog::UnknownDatePolicy;
use crate::error::ConfigError;
use crate::manifest::ManifestSource;

/// Manifest location used when nothing else is configured
pub const DEFAULT_MANIFEST: &str = "public/photos/manifest.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Deployment prefix for photo URLs: "" or e.g. "/portfolio"
    pub base_path: String,
    /// Manifest URL or file path
    pub manifest: String,
    pub unknown_date: UnknownDatePolicy,
    /// Leave the hero photo out of the gallery below it
    pub exclude_hero: bool,
    pub keywords: Vec<Keyword>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_path: String::new(),
            manifest: DEFAULT_MANIFEST.to_string(),
            unknown_date: UnknownDatePolicy::default(),
            exclude_hero: true,
            keywords: default_keywords(),
        }
    }
}

impl CatalogConfig {
    /// Parse and validate a TOML document
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: CatalogConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text)?;
        info!(path = %path.display(), "loaded catalog config");
        Ok(config)
    }

    /// Load the user's config file, or defaults if there isn't one
    pub fn load_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Where the config file lives:
    /// - Linux: ~/.config/photo-catalog/config.toml
    /// - macOS: ~/Library/Application Support/photo-catalog/config.toml
    /// - Windows: %APPDATA%\photo-catalog\config.toml
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("photo-catalog");
        path.push("config.toml");
        Some(path)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = self.base_path.as_str();
        let valid = base.is_empty()
            || base.starts_with('/')
            || base.starts_with("http://")
            || base.starts_with("https://");
        if valid {
            Ok(())
        } else {
            Err(ConfigError::InvalidBasePath(self.base_path.clone()))
        }
    }

    pub fn manifest_source(&self) -> ManifestSource {
        ManifestSource::parse(&self.manifest)
    }
}
