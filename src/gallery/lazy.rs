//! Viewport-triggered loading for gallery images

use tracing::warn;

/// Distance outside the viewport at which a lazy image starts loading
pub const ROOT_MARGIN: f32 = 100.0;

/// Axis-aligned box in page pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Grown by `margin` on every side
    pub fn expand(&self, margin: f32) -> Self {
        Self::new(
            self.x - margin,
            self.y - margin,
            self.width + 2.0 * margin,
            self.height + 2.0 * margin,
        )
    }

    /// Touching edges count as intersecting
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x <= other.right()
            && other.x <= self.right()
            && self.y <= other.bottom()
            && other.y <= self.bottom()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadingMode {
    /// Load immediately (the hero image)
    Eager,
    /// Load once scrolled near the viewport
    #[default]
    Lazy,
}

/// What the image slot should display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    /// Not near the viewport yet; show the placeholder
    Placeholder,
    /// Image requested, still arriving
    Loading,
    Loaded,
    /// Show the error panel instead of the image
    Failed,
}

/// One gallery image that loads when it first comes into view
#[derive(Debug, Clone, PartialEq)]
pub struct LazyImage {
    src: String,
    mode: LoadingMode,
    in_view: bool,
    natural_size: Option<(u32, u32)>,
    failed: bool,
}

impl LazyImage {
    pub fn new(src: impl Into<String>, mode: LoadingMode) -> Self {
        Self {
            src: src.into(),
            mode,
            in_view: mode == LoadingMode::Eager,
            natural_size: None,
            failed: false,
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn mode(&self) -> LoadingMode {
        self.mode
    }

    /// Whether the image has been requested
    pub fn in_view(&self) -> bool {
        self.in_view
    }

    /// Feed the latest element and viewport bounds.
    ///
    /// Returns true on the update that first brings the image into view.
    /// After that the image stays in view; later updates are ignored.
    pub fn observe(&mut self, bounds: &Rect, viewport: &Rect) -> bool {
        if self.in_view {
            return false;
        }
        self.in_view = bounds.intersects(&viewport.expand(ROOT_MARGIN));
        self.in_view
    }

    /// The image finished loading with its natural dimensions
    pub fn mark_loaded(&mut self, width: u32, height: u32) {
        self.natural_size = Some((width, height));
    }

    pub fn mark_failed(&mut self) {
        warn!(src = %self.src, "failed to load image");
        self.failed = true;
    }

    pub fn natural_size(&self) -> Option<(u32, u32)> {
        self.natural_size
    }

    /// Width over height, once loaded
    pub fn aspect_ratio(&self) -> Option<f32> {
        match self.natural_size {
            Some((w, h)) if h > 0 => Some(w as f32 / h as f32),
            _ => None,
        }
    }

    pub fn phase(&self) -> LoadPhase {
        if self.failed {
            LoadPhase::Failed
        } else if self.natural_size.is_some() {
            LoadPhase::Loaded
        } else if self.in_view {
            LoadPhase::Loading
        } else {
            LoadPhase::Placeholder
        }
    }
}
