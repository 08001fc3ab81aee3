//! Hero fade and sticky header state driven by scroll position

/// Furthest the hero title slides up, in pixels
pub const MAX_HERO_OFFSET: f32 = 400.0;
/// Scroll distance over which the hero title fades out
pub const HERO_FADE_DISTANCE: f32 = 300.0;
/// Scroll position past which the sticky header shows
pub const STICKY_THRESHOLD: f32 = 400.0;

/// Hero and sticky header appearance for a scroll position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderState {
    scroll_y: f32,
}

impl HeaderState {
    pub fn new() -> Self {
        Self { scroll_y: 0.0 }
    }

    /// Record the page's vertical scroll offset (negative overscroll counts as 0)
    pub fn on_scroll(&mut self, scroll_y: f32) {
        self.scroll_y = scroll_y.max(0.0);
    }

    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    /// How far the hero title has slid up
    pub fn hero_offset(&self) -> f32 {
        (self.scroll_y * 0.8).min(MAX_HERO_OFFSET)
    }

    pub fn hero_opacity(&self) -> f32 {
        (1.0 - self.scroll_y / HERO_FADE_DISTANCE).max(0.0)
    }

    pub fn sticky_visible(&self) -> bool {
        self.scroll_y > STICKY_THRESHOLD
    }
}

impl Default for HeaderState {
    fn default() -> Self {
        Self::new()
    }
}
