//! Shared data structures for the catalog
//!
//! These structs represent the data model that flows from the
//! manifest into whatever renders the gallery.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// When a photo was taken, and how we know
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "kebab-case")]
pub enum CaptureInstant {
    /// Read from the filename by the named pattern
    Parsed {
        at: NaiveDateTime,
        pattern: &'static str,
    },
    /// No pattern matched; stamped with the clock at load time
    WallClock { at: NaiveDateTime },
    /// No pattern matched
    Unknown,
}

impl CaptureInstant {
    /// The instant used for ordering.
    ///
    /// Unknown dates sort as 1970-01-01 00:00:00, behind every real photo.
    pub fn sort_key(&self) -> NaiveDateTime {
        match self {
            CaptureInstant::Parsed { at, .. } | CaptureInstant::WallClock { at } => *at,
            CaptureInstant::Unknown => NaiveDateTime::default(),
        }
    }

    /// The known instant, if any
    pub fn at(&self) -> Option<NaiveDateTime> {
        match self {
            CaptureInstant::Parsed { at, .. } | CaptureInstant::WallClock { at } => Some(*at),
            CaptureInstant::Unknown => None,
        }
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, CaptureInstant::Parsed { .. })
    }
}

/// What to do with a filename no timestamp pattern understands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnknownDatePolicy {
    /// Use the current local time (not reproducible between loads)
    #[default]
    WallClock,
    /// Mark the date unknown and sort the photo last
    Epoch,
}

/// A single photo in the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    /// Original filename from the manifest
    id: String,
    /// Display URL: `{base_path}/photos/{filename}`
    path: String,
    title: String,
    location: String,
    alt: String,
    capture: CaptureInstant,
    /// e.g. "June 15, 2024"
    display_date: String,
    /// e.g. "2:30 PM"
    display_time: String,
    /// e.g. "Captured on June 15, 2024 at 2:30 PM"
    description: String,
}

impl Photo {
    pub(crate) fn new(
        id: String,
        path: String,
        location: String,
        capture: CaptureInstant,
        display_date: String,
        display_time: String,
        description: String,
    ) -> Self {
        Self {
            id,
            path,
            title: location.clone(),
            alt: location.clone(),
            location,
            capture,
            display_date,
            display_time,
            description,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn filename(&self) -> &str {
        &self.id
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn alt(&self) -> &str {
        &self.alt
    }

    pub fn capture(&self) -> CaptureInstant {
        self.capture
    }

    /// Instant the catalog is ordered by
    pub fn captured_at(&self) -> NaiveDateTime {
        self.capture.sort_key()
    }

    pub fn display_date(&self) -> &str {
        &self.display_date
    }

    pub fn display_time(&self) -> &str {
        &self.display_time
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Photos ordered newest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    photos: Vec<Photo>,
    base_path: String,
}

impl Catalog {
    /// Wrap photos that are already sorted newest first
    pub(crate) fn from_sorted(photos: Vec<Photo>, base_path: &str) -> Self {
        Self {
            photos,
            base_path: base_path.to_string(),
        }
    }

    /// A catalog with no photos (used when the manifest can't be loaded)
    pub fn empty(base_path: &str) -> Self {
        Self::from_sorted(Vec::new(), base_path)
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn into_photos(self) -> Vec<Photo> {
        self.photos
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Photo> {
        self.photos.iter()
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// The newest photo, shown as the hero background
    pub fn hero(&self) -> Option<&Photo> {
        self.photos.first()
    }

    /// Hero background URL, or the site's default `bg.jpg` when there are no photos
    pub fn hero_path(&self) -> String {
        match self.hero() {
            Some(photo) => photo.path().to_string(),
            None => format!("{}/bg.jpg", self.base_path),
        }
    }

    /// Photos for the scrolling gallery.
    ///
    /// With `exclude_hero` the newest photo is skipped, since it is
    /// already on screen as the hero background.
    pub fn gallery(&self, exclude_hero: bool) -> &[Photo] {
        if exclude_hero && !self.photos.is_empty() {
            &self.photos[1..]
        } else {
            &self.photos
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Photo;
    type IntoIter = std::slice::Iter<'a, Photo>;

    fn into_iter(self) -> Self::IntoIter {
        self.photos.iter()
    }
}
