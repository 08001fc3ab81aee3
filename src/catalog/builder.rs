//! Catalog assembly from manifest filenames

use tracing::{debug, info, warn};

use super::data::{Catalog, Photo, UnknownDatePolicy};
use super::format::DisplayFields;
use super::is_image_file;
use super::location::{default_keywords, extract_location, Keyword};
use super::timestamp::PatternSet;
use crate::config::CatalogConfig;

/// Builds catalogs from manifest filenames.
///
/// Holds everything a build depends on besides the filenames, so one
/// builder can assemble any number of catalogs. A build never fails:
/// non-image names are dropped and undated names still become photos.
#[derive(Debug)]
pub struct CatalogBuilder {
    patterns: PatternSet,
    keywords: Vec<Keyword>,
    base_path: String,
    unknown_date: UnknownDatePolicy,
}

impl CatalogBuilder {
    /// Builder with the standard patterns and keywords.
    ///
    /// A trailing slash on `base_path` is ignored.
    pub fn new(base_path: &str) -> Self {
        Self {
            patterns: PatternSet::standard(),
            keywords: default_keywords(),
            base_path: base_path.trim_end_matches('/').to_string(),
            unknown_date: UnknownDatePolicy::default(),
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(&config.base_path)
            .with_keywords(config.keywords.clone())
            .with_unknown_date(config.unknown_date)
    }

    pub fn with_patterns(mut self, patterns: PatternSet) -> Self {
        self.patterns = patterns;
        self
    }

    pub fn with_keywords(mut self, keywords: Vec<Keyword>) -> Self {
        self.keywords = keywords;
        self
    }

    pub fn with_unknown_date(mut self, policy: UnknownDatePolicy) -> Self {
        self.unknown_date = policy;
        self
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    /// URL a photo is served from
    pub fn display_path(&self, filename: &str) -> String {
        format!("{}/photos/{}", self.base_path, filename)
    }

    /// Derive the photo record for one filename
    pub fn photo(&self, filename: &str) -> Photo {
        let capture = self.patterns.capture_instant(filename, self.unknown_date);
        if !capture.is_parsed() {
            warn!(filename, policy = ?self.unknown_date, "no timestamp pattern matched");
        }

        let location = extract_location(filename, &self.patterns, &self.keywords);
        let display = DisplayFields::for_capture(&capture);
        let path = self.display_path(filename);
        debug!(filename, %path, title = %location, "processed photo");

        Photo::new(
            filename.to_string(),
            path,
            location,
            capture,
            display.date,
            display.time,
            display.description,
        )
    }

    /// Assemble a catalog, newest first.
    ///
    /// Filenames without an image extension are skipped. Photos taken at
    /// the same instant keep their manifest order.
    pub fn build<I, S>(&self, filenames: I) -> Catalog
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut skipped = 0usize;
        let mut photos: Vec<Photo> = filenames
            .into_iter()
            .filter_map(|name| {
                let name = name.as_ref();
                if is_image_file(name) {
                    Some(self.photo(name))
                } else {
                    debug!(filename = name, "skipping non-image file");
                    skipped += 1;
                    None
                }
            })
            .collect();

        // sort_by is stable, so equal instants keep manifest order
        photos.sort_by(|a, b| b.captured_at().cmp(&a.captured_at()));

        info!(photos = photos.len(), skipped, "built photo catalog");
        Catalog::from_sorted(photos, &self.base_path)
    }
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new("")
    }
}
