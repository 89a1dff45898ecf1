//! Label editing engines.
//!
//! One engine is mounted per label type. The session forwards pointer events
//! and render requests to it through the [`LabelEngine`] trait.

mod rect;
pub mod square;

#[cfg(test)]
mod tests;

pub use rect::{Gesture, RectEngine};
pub(crate) use rect::any_accepted_anchor_under_mouse;

use labelkit_ui::Frame;

use crate::config::EditorConfig;
use crate::editor_data::EditorData;
use crate::feedback::CursorStyle;
use crate::geometry::{RectAnchor, Rendered};
use crate::model::LabelType;
use crate::store::LabelStore;

/// Outer viewport interactions (pan, zoom, scroll).
///
/// Engines switch these off for the duration of a gesture so a drag is not
/// also read as a pan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewportActions {
    disabled: bool,
}

impl ViewportActions {
    pub fn set_disabled(&mut self, disabled: bool) {
        if self.disabled != disabled {
            log::trace!("Viewport actions disabled: {}", disabled);
        }
        self.disabled = disabled;
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

/// Mutable access an engine gets while handling an event.
pub struct EditorContext<'a> {
    pub store: &'a mut dyn LabelStore,
    pub config: &'a EditorConfig,
    pub viewport: &'a mut ViewportActions,
}

/// Read-only access an engine gets while rendering.
pub struct RenderContext<'a> {
    pub store: &'a dyn LabelStore,
    pub config: &'a EditorConfig,
}

/// Interface shared by all label editing engines.
pub trait LabelEngine {
    fn label_type(&self) -> LabelType;

    fn on_pointer_down(&mut self, data: &EditorData, ctx: &mut EditorContext<'_>);

    fn on_pointer_move(&mut self, data: &EditorData, ctx: &mut EditorContext<'_>);

    fn on_pointer_up(&mut self, data: &EditorData, ctx: &mut EditorContext<'_>);

    /// Draw the engine's labels and any gesture preview. Must not write to the store.
    fn render(&self, data: &EditorData, ctx: &RenderContext<'_>, frame: &mut Frame);

    /// True while a gesture has started and not yet finished.
    fn is_in_progress(&self) -> bool;

    /// Abandon the current gesture without writing anything.
    fn cancel(&mut self, ctx: &mut EditorContext<'_>);

    /// Cursor to show for the current pointer position.
    fn cursor_style(&self, _data: &EditorData, _ctx: &RenderContext<'_>) -> CursorStyle {
        CursorStyle::Default
    }

    /// Anchor driving an in-progress resize, for engines that resize.
    fn resize_anchor(&self) -> Option<RectAnchor<Rendered>> {
        None
    }
}

/// Create the engine for a label type.
///
/// Only rectangles are edited by this crate; other types get no engine and
/// the session runs with plain image display.
pub fn mount_engine(label_type: LabelType) -> Option<Box<dyn LabelEngine>> {
    match label_type {
        LabelType::Rect => Some(Box::new(RectEngine::new())),
        LabelType::Point | LabelType::Line | LabelType::Polygon => {
            log::debug!("No editing engine for {} labels", label_type.name());
            None
        }
    }
}
