pub mod reveal;
pub mod typewriter;
pub mod visibility;

pub use reveal::{reveal_style, RevealStyle};
pub use typewriter::{Typewriter, TypewriterTiming};
pub use visibility::VisibilityLatch;

/// Intersection ratio a section must reach before it reveals.
pub const SECTION_THRESHOLD: f64 = 0.1;
