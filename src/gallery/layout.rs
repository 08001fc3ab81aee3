//! Display sizing for tall images

/// Aspect ratio (width / height) below which an image is taller than
/// 120% of the screen and gets a constrained width
pub const TALL_ASPECT_RATIO: f32 = 0.83;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageLayout {
    FullWidth,
    /// Centered with a maximum width
    Constrained,
}

impl ImageLayout {
    /// Layout for an image; unknown until it has loaded
    pub fn for_aspect_ratio(aspect_ratio: Option<f32>) -> Self {
        match aspect_ratio {
            Some(ratio) if ratio < TALL_ASPECT_RATIO => ImageLayout::Constrained,
            _ => ImageLayout::FullWidth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::{LazyImage, LoadingMode};

    #[test]
    fn test_portrait_is_constrained() {
        assert_eq!(ImageLayout::for_aspect_ratio(Some(0.66)), ImageLayout::Constrained);
        assert_eq!(ImageLayout::for_aspect_ratio(Some(0.83)), ImageLayout::FullWidth);
        assert_eq!(ImageLayout::for_aspect_ratio(Some(1.5)), ImageLayout::FullWidth);
        assert_eq!(ImageLayout::for_aspect_ratio(None), ImageLayout::FullWidth);
    }

    #[test]
    fn test_from_loaded_image() {
        let mut image = LazyImage::new("/photos/tower.jpg", LoadingMode::Eager);
        assert_eq!(ImageLayout::for_aspect_ratio(image.aspect_ratio()), ImageLayout::FullWidth);
        image.mark_loaded(2000, 3000);
        assert_eq!(ImageLayout::for_aspect_ratio(image.aspect_ratio()), ImageLayout::Constrained);
    }
}
