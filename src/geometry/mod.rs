//! Space-tagged geometry for the editor.
//!
//! Every point and rectangle carries a zero-sized marker naming the
//! coordinate space it lives in. Mixing spaces is a type error; crossing
//! between them goes through [`crate::transform::ViewTransform`].
//!
//! The spaces, from the persisted data outward:
//! - [`Image`]: native pixels of the source image. Labels are stored here.
//! - [`Rendered`]: image-relative at the current render scale (origin at the
//!   image's top-left corner on screen, one unit per rendered pixel).
//! - [`Content`]: the scrollable, zoomable canvas content area.
//! - [`Viewport`]: what is on screen, i.e. content minus the scroll offset.

mod anchor;
mod point;
mod rect;

pub use anchor::{Direction, RectAnchor};
pub use labelkit_ui::Size;
pub use point::{Delta, Point};
pub use rect::Rect;

use std::fmt::Debug;

/// Marker trait for coordinate spaces.
pub trait Space: Copy + Debug + Default + PartialEq + 'static {
    /// Name used in debug output.
    const NAME: &'static str;
}

/// Native image pixel space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Image;

/// Image-relative space at render scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rendered;

/// Viewport content (canvas) space, before scroll is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Content;

/// On-screen viewport space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport;

impl Space for Image {
    const NAME: &'static str = "image";
}

impl Space for Rendered {
    const NAME: &'static str = "rendered";
}

impl Space for Content {
    const NAME: &'static str = "content";
}

impl Space for Viewport {
    const NAME: &'static str = "viewport";
}
