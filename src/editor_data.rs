//! Per-frame snapshot handed to every engine call.

use labelkit_ui::{Key, KeyCombo, PointerEventKind};

use crate::geometry::{Content, Point, Rect, Size, Viewport};
use crate::transform::ViewTransform;

/// Everything an engine may look at for one event or frame.
///
/// Built fresh by the host for each call; engines must not keep values from
/// it across calls.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorData {
    /// Mouse position on the canvas content, if the pointer is known.
    pub mouse_position: Option<Point<Content>>,
    /// Size of the canvas content.
    pub content_size: Size,
    /// Size of the visible viewport.
    pub viewport_size: Size,
    /// Image placement, absent while no image is laid out.
    pub view: Option<ViewTransform>,
    /// Keys currently held.
    pub active_key_combo: KeyCombo,
    pub zoom: f32,
    /// Pointer event that triggered this call, if any.
    pub event: Option<PointerEventKind>,
}

impl EditorData {
    /// Snapshot for a canvas whose content fits the viewport.
    pub fn new(content_size: Size) -> Self {
        Self {
            mouse_position: None,
            content_size,
            viewport_size: content_size,
            view: None,
            active_key_combo: KeyCombo::new(),
            zoom: 1.0,
            event: None,
        }
    }

    pub fn with_mouse(mut self, position: Point<Content>) -> Self {
        self.mouse_position = Some(position);
        self
    }

    pub fn with_view(mut self, view: ViewTransform) -> Self {
        self.view = Some(view);
        self
    }

    pub fn with_viewport_size(mut self, size: Size) -> Self {
        self.viewport_size = size;
        self
    }

    pub fn with_keys(mut self, combo: KeyCombo) -> Self {
        self.active_key_combo = combo;
        self
    }

    pub fn with_zoom(mut self, zoom: f32) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn with_event(mut self, event: PointerEventKind) -> Self {
        self.event = Some(event);
        self
    }

    pub fn is_key_held(&self, key: Key) -> bool {
        self.active_key_combo.contains(key)
    }

    /// Check if the pointer is on the canvas content.
    pub fn is_mouse_over_canvas(&self) -> bool {
        let size = self.content_size;
        let canvas: Rect<Content> = Rect::new(0.0, 0.0, size.width, size.height);
        self.mouse_position.is_some_and(|p| canvas.contains(p))
    }

    /// Check if the pointer is on the image.
    pub fn is_mouse_over_image(&self) -> bool {
        match (self.mouse_position, self.view) {
            (Some(p), Some(view)) => view.is_over_image(p),
            _ => false,
        }
    }

    /// Pointer position on screen, if both pointer and view are known.
    pub fn mouse_position_on_viewport(&self) -> Option<Point<Viewport>> {
        Some(self.view?.content_to_viewport(self.mouse_position?))
    }

    /// Check if the pointer is inside the visible viewport.
    pub fn is_mouse_over_viewport(&self) -> bool {
        let size = self.viewport_size;
        let viewport: Rect<Viewport> = Rect::new(0.0, 0.0, size.width, size.height);
        self.mouse_position_on_viewport()
            .is_some_and(|p| viewport.contains(p))
    }

    /// Pointer position clamped onto the image.
    pub fn mouse_snapped_to_image(&self) -> Option<Point<Content>> {
        Some(self.view?.snap_to_image(self.mouse_position?))
    }
}
