//! labelkit_ui - host-facing UI primitives for the labelkit editor.
//!
//! Input events and key combos flow in from the host, draw commands flow out.
//! Nothing in this crate talks to a GPU; a host replays the recorded
//! [`DrawCommand`]s with whatever backend it owns.

mod event;
mod layout;
mod renderer;

pub use event::{Event, Key, KeyCombo, MouseButton, PointerEventKind};
pub use layout::{Point, Rectangle, Size};
pub use renderer::{Color, DrawCommand, Frame};
