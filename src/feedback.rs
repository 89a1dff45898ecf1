//! Pointer feedback: cursor style and the position tooltip.
//!
//! Both are derived from the current frame and engine state and never feed
//! back into label geometry.

use labelkit_ui::Frame;

use crate::config::EditorConfig;
use crate::editor_data::EditorData;
use crate::engine::{
    Gesture, LabelEngine, RectEngine, RenderContext, any_accepted_anchor_under_mouse,
};
use crate::geometry::{Delta, Direction, Image, Point, Viewport};
use crate::model::{LabelRect, LabelType};
use crate::store::LabelStore;

/// Offset of the tooltip from the pointer, in screen pixels.
pub const TOOLTIP_OFFSET: Delta = Delta { x: 15.0, y: 15.0 };

/// Font size of the tooltip text.
pub const TOOLTIP_FONT_SIZE: f32 = 12.0;

/// Cursor the host should display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorStyle {
    #[default]
    Default,
    Move,
    Hidden,
}

/// Cursor for the current frame.
///
/// The pointer is hidden when it is unknown or while the image is being
/// dragged; otherwise the mounted engine decides.
pub fn cursor_style(
    engine: Option<&dyn LabelEngine>,
    data: &EditorData,
    ctx: &RenderContext<'_>,
    image_drag_mode: bool,
) -> CursorStyle {
    if data.mouse_position.is_none() || image_drag_mode {
        return CursorStyle::Hidden;
    }
    engine.map_or(CursorStyle::Default, |engine| engine.cursor_style(data, ctx))
}

pub(crate) fn rect_cursor_style(
    engine: &RectEngine,
    data: &EditorData,
    ctx: &RenderContext<'_>,
) -> CursorStyle {
    let gesture = engine.gesture();
    if matches!(gesture, Gesture::Resizing { .. }) {
        return CursorStyle::Move;
    }

    let over_anchor = match (data.view, data.mouse_position, ctx.store.active_image()) {
        (Some(view), Some(mouse), Some(image)) => {
            let hover = ctx.config.anchor_hover_size;
            any_accepted_anchor_under_mouse(&image, &view, mouse, hover).is_some()
        }
        _ => false,
    };
    if over_anchor {
        return CursorStyle::Move;
    }

    let creating = matches!(gesture, Gesture::Creating { .. });
    if creating && data.is_mouse_over_canvas() && !data.is_mouse_over_image() {
        return CursorStyle::Move;
    }
    CursorStyle::Default
}

/// Text and screen position of the tooltip.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    /// One entry per displayed line.
    pub lines: Vec<String>,
    pub position: Point<Viewport>,
}

/// Tooltip following the pointer with its image coordinates and, while
/// editing rectangles, the size of the rectangle being drawn or resized.
#[derive(Debug, Clone, Default)]
pub struct PositionIndicator {
    /// Image position of the last pointer-down seen over the image.
    mouse_down_position: Option<Point<Image>>,
    tooltip: Option<Tooltip>,
}

impl PositionIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    pub fn mouse_down_position(&self) -> Option<Point<Image>> {
        self.mouse_down_position
    }

    /// Recompute the tooltip for a frame.
    pub fn update(
        &mut self,
        data: &EditorData,
        engine: Option<&dyn LabelEngine>,
        store: &dyn LabelStore,
        image_drag_mode: bool,
    ) {
        self.tooltip = None;
        if image_drag_mode || !data.is_mouse_over_viewport() || !data.is_mouse_over_image() {
            return;
        }
        let (Some(view), Some(mouse), Some(on_viewport)) =
            (data.view, data.mouse_position, data.mouse_position_on_viewport())
        else {
            return;
        };

        let on_image = view.content_to_image(mouse);
        if data.event == Some(labelkit_ui::PointerEventKind::Down) {
            self.mouse_down_position = Some(on_image);
        }

        let mut lines = Vec::with_capacity(2);
        if let Some(engine) = engine.filter(|e| e.label_type() == LabelType::Rect) {
            let active = store.active_rect_label();
            let anchor = engine.resize_anchor().map(|a| a.direction);
            let displacement = self.mouse_down_position.map(|down| on_image - down);
            if let Some((width, height)) = displayed_size(active.as_ref(), anchor, displacement) {
                lines.push(format!(
                    "width: {}, height: {}",
                    width.abs().round(),
                    height.abs().round()
                ));
            }
        }
        lines.push(format!(
            "x: {}, y: {}",
            on_image.x.round(),
            on_image.y.round()
        ));

        self.tooltip = Some(Tooltip {
            lines,
            position: on_viewport + TOOLTIP_OFFSET,
        });
    }

    /// Draw the tooltip text, one line below the other.
    pub fn render(&self, data: &EditorData, config: &EditorConfig, frame: &mut Frame) {
        let (Some(tooltip), Some(view)) = (&self.tooltip, data.view) else {
            return;
        };
        let origin = view.viewport_to_content(tooltip.position);
        for (i, line) in tooltip.lines.iter().enumerate() {
            let offset = Delta::new(0.0, i as f32 * TOOLTIP_FONT_SIZE * 1.25);
            frame.draw_text(
                line,
                (origin + offset).to_ui(),
                config.colors.indicator_text,
                TOOLTIP_FONT_SIZE,
            );
        }
    }
}

/// Size shown in the tooltip, signed.
///
/// Starts from the active label's size and adds the pointer displacement
/// since pointer-down along the edges the resize anchor drives. Without an
/// active label (creation) the displacement is the size.
fn displayed_size(
    active: Option<&LabelRect>,
    anchor: Option<Direction>,
    displacement: Option<Delta>,
) -> Option<(f32, f32)> {
    if active.is_none() && displacement.is_none() {
        return None;
    }
    let (mut width, mut height) =
        active.map_or((0.0, 0.0), |label| (label.rect.width, label.rect.height));
    let Some(d) = displacement else {
        return Some((width, height));
    };

    match (active, anchor) {
        (None, _) => {
            width += d.x;
            height += d.y;
        }
        (Some(_), Some(direction)) => {
            if direction.moves_left_edge() {
                width -= d.x;
            } else if direction.moves_right_edge() {
                width += d.x;
            }
            if direction.moves_top_edge() {
                height -= d.y;
            } else if direction.moves_bottom_edge() {
                height += d.y;
            }
        }
        (Some(_), None) => {}
    }
    Some((width, height))
}
