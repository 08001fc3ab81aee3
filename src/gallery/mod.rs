//! Gallery presentation state
//!
//! Each value here belongs to one on-screen component and is updated
//! from events that component receives (scrolls, viewport changes,
//! image loads). Nothing is shared between components.
//! - Lazily loaded images (lazy.rs)
//! - Hero header fading and sticky header (header.rs)
//! - Width of tall images (layout.rs)

pub mod header;
pub mod layout;
pub mod lazy;

pub use header::HeaderState;
pub use layout::ImageLayout;
pub use lazy::{LazyImage, LoadPhase, LoadingMode, Rect};
