//! The layout engine: positions the visual document tree onto a single
//! page of absolutely placed elements, ready for a render backend.

mod block;
mod elements;
mod engine;
mod flex;
mod style;
mod text;

pub use elements::{ImageElement, LayoutElement, PositionedElement, RectElement, TextElement};
pub use engine::{HyphenationCallback, LayoutEngine, Page, no_hyphenation};
pub use style::{ComputedStyle, compute_style, default_style};
pub use text::wrap_text;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("image '{0}' requires an explicit width and height in points")]
    ImageExtent(String),
}
