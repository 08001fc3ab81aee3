//! Photo catalog module
//!
//! This module turns manifest filenames into display-ready photo records:
//! - Photo records and the sorted catalog (data.rs)
//! - Capture timestamps encoded in filenames (timestamp.rs)
//! - Titles and locations from the rest of the filename (location.rs)
//! - Display date/time strings (format.rs)
//! - Catalog assembly and ordering (builder.rs)

pub mod builder;
pub mod data;
pub mod format;
pub mod location;
pub mod timestamp;

pub use builder::CatalogBuilder;
pub use data::{CaptureInstant, Catalog, Photo, UnknownDatePolicy};
pub use location::Keyword;
pub use timestamp::{PatternSet, TimestampPattern};

/// Image extensions a gallery can display (compared case-insensitively)
pub const IMAGE_EXTENSIONS: [&str; 7] = ["jpg", "jpeg", "png", "webp", "gif", "bmp", "tiff"];

/// Extension after the last dot, if it is a recognized image extension.
///
/// Returned as written in the filename, so callers can strip it exactly.
pub fn image_extension(filename: &str) -> Option<&str> {
    let (_, ext) = filename.rsplit_once('.')?;
    let lower = ext.to_ascii_lowercase();
    IMAGE_EXTENSIONS
        .contains(&lower.as_str())
        .then_some(ext)
}

/// Check if a filename names a displayable image
pub fn is_image_file(filename: &str) -> bool {
    image_extension(filename).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_extensions_are_case_insensitive() {
        assert!(is_image_file("20240101-12-00-00-beach.jpg"));
        assert!(is_image_file("IMG_0001.JPEG"));
        assert!(is_image_file("scan.TiFf"));
        assert_eq!(image_extension("hills.WebP"), Some("WebP"));
    }

    #[test]
    fn test_non_images_are_rejected() {
        assert!(!is_image_file("photo.txt"));
        assert!(!is_image_file("manifest.json"));
        assert!(!is_image_file("no_extension"));
        assert!(!is_image_file("archive.jpg.zip"));
    }
}
