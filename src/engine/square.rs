//! Square-making policy for rectangle gestures.
//!
//! The same rules are used for the live preview and for the committed
//! geometry, so what the user sees during a drag is what gets stored.

use crate::config::EditorConfig;
use crate::editor_data::EditorData;
use crate::geometry::{Direction, Rect, Space};

/// Squaring applies when exactly one of the `make_square` setting and the
/// square modifier key is on.
pub fn is_active(config: &EditorConfig, data: &EditorData) -> bool {
    config.make_square ^ data.is_key_held(config.square_modifier)
}

/// Keep the sign of `value` but give it magnitude `side`.
fn with_side(value: f32, side: f32) -> f32 {
    if value < 0.0 { -side } else { side }
}

/// Raise the shorter side to the longer one.
pub fn square_for_creation<S: Space>(rect: Rect<S>) -> Rect<S> {
    let side = rect.width.abs().max(rect.height.abs());
    Rect::new(
        rect.x,
        rect.y,
        with_side(rect.width, side),
        with_side(rect.height, side),
    )
}

/// Square a resized rectangle according to the anchor that drove the resize.
///
/// Dragging a horizontal edge (top/bottom) makes the height the driving value,
/// dragging a vertical edge (left/right) makes the width the driving value,
/// and corners fall back to the creation rule.
pub fn square_for_resize<S: Space>(rect: Rect<S>, direction: Direction) -> Rect<S> {
    match direction {
        Direction::Top | Direction::Bottom => Rect::new(
            rect.x,
            rect.y,
            with_side(rect.width, rect.height.abs()),
            rect.height,
        ),
        Direction::Left | Direction::Right => Rect::new(
            rect.x,
            rect.y,
            rect.width,
            with_side(rect.height, rect.width.abs()),
        ),
        _ => square_for_creation(rect),
    }
}
