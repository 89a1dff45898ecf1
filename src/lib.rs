//! labelkit - interactive rectangle label editing.
//!
//! Pointer gestures on a displayed image become rectangle labels stored in
//! native image pixels. The host owns the window, the image layout and the
//! label store; this crate turns pointer events into store updates and draw
//! commands.

pub mod colors;
pub mod config;
pub mod editor_data;
pub mod engine;
pub mod feedback;
pub mod geometry;
pub mod model;
pub mod render;
pub mod replay;
pub mod session;
pub mod store;
pub mod transform;

pub use config::{ConfigError, EditorConfig};
pub use editor_data::EditorData;
pub use engine::{LabelEngine, RectEngine, mount_engine};
pub use feedback::{CursorStyle, PositionIndicator};
pub use replay::{ReplayError, ReplayScript};
pub use session::{EditorMessage, EditorSession};
pub use store::{InMemoryLabelStore, LabelStore, StoreAction};
pub use transform::ViewTransform;
