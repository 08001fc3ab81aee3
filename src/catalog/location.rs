//! Title and location text from filenames
//!
//! Whatever follows the timestamp in a filename names the place:
//! `20240615-14-30-05-santa_cruz.jpg` becomes "santa cruz".

use serde::{Deserialize, Serialize};

use super::image_extension;
use super::timestamp::PatternSet;

/// Title used when a filename carries nothing but a timestamp
pub const DEFAULT_TITLE: &str = "Photo";

/// Filename token that implies a title when no text is left
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    /// Matched case-insensitively anywhere in the filename
    pub token: String,
    pub label: String,
}

impl Keyword {
    pub fn new(token: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            label: label.into(),
        }
    }
}

/// Camera tokens that commonly end up in bare timestamp filenames
pub fn default_keywords() -> Vec<Keyword> {
    vec![
        Keyword::new("dji", "Aerial"),
        Keyword::new("gopro", "GoPro"),
        Keyword::new("iphone", "iPhone"),
        Keyword::new("pixel", "Pixel"),
    ]
}

/// Filename without its image extension (other extensions are kept)
fn strip_extension(filename: &str) -> &str {
    match image_extension(filename) {
        Some(ext) => &filename[..filename.len() - ext.len() - 1],
        None => filename,
    }
}

/// Hyphens and underscores become spaces, runs of whitespace collapse
fn normalize_separators(text: &str) -> String {
    text.split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Location text for a filename, reused as the photo's title
pub fn extract_location(filename: &str, patterns: &PatternSet, keywords: &[Keyword]) -> String {
    let stem = strip_extension(filename);
    let cleaned = normalize_separators(patterns.strip_prefix(stem));
    if !cleaned.is_empty() {
        return cleaned;
    }

    let lower = filename.to_lowercase();
    keywords
        .iter()
        .filter(|k| !k.token.is_empty())
        .find(|k| lower.contains(&k.token.to_lowercase()))
        .map(|k| k.label.clone())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(filename: &str) -> String {
        extract_location(filename, &PatternSet::standard(), &default_keywords())
    }

    #[test]
    fn test_text_after_timestamp() {
        assert_eq!(location("20240101-12-00-00-beach.jpg"), "beach");
        assert_eq!(
            location("20240615-10-00-00-santa_cruz--coast.JPG"),
            "santa cruz coast"
        );
        assert_eq!(location("15-06-24_143000_Old Town__Lisbon.png"), "Old Town Lisbon");
    }

    #[test]
    fn test_date_only_names_keep_their_location() {
        assert_eq!(location("20240615-santa-cruz.jpg"), "santa cruz");
        assert_eq!(location("20240615-santa_cruz.jpg"), "santa cruz");
        assert_eq!(location("20240615-beach.jpg"), "beach");
        assert_eq!(location("20240615-DJI_0042-coast.jpg"), "coast");
    }

    #[test]
    fn test_bare_timestamp_is_photo() {
        assert_eq!(location("20240101-12-00-00.jpg"), DEFAULT_TITLE);
        assert_eq!(location("15-06-24_143000.jpg"), DEFAULT_TITLE);
    }

    #[test]
    fn test_keyword_fallback() {
        assert_eq!(location("20240615-DJI_0042.jpg"), "Aerial");
        assert_eq!(location("20240615-GOPRO0001.jpg"), "GoPro");
        assert_eq!(location("20240615-IMG_0001.jpg"), DEFAULT_TITLE);
    }

    #[test]
    fn test_custom_keywords_first_match_wins() {
        let keywords = vec![
            Keyword::new("", "Ignored"),
            Keyword::new("0042", "Road Trip"),
            Keyword::new("dji", "Aerial"),
        ];
        let title = extract_location("20240615-DJI_0042.jpg", &PatternSet::standard(), &keywords);
        assert_eq!(title, "Road Trip");
    }

    #[test]
    fn test_untimestamped_names_keep_their_text() {
        assert_eq!(location("my_favourite-shot.webp"), "my favourite shot");
        assert_eq!(location("notes.txt"), "notes.txt");
    }
}
