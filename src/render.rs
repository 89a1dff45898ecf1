//! Drawing rectangle labels into a [`Frame`].
//!
//! All geometry is emitted in canvas content coordinates; the host applies
//! its own scroll offset when replaying the commands.

use labelkit_ui::{Color, Frame};

use crate::colors::label_line_color;
use crate::config::EditorConfig;
use crate::editor_data::EditorData;
use crate::engine::{RectEngine, RenderContext};
use crate::geometry::{Content, Rect, Rendered};
use crate::model::LabelRect;
use crate::transform::ViewTransform;

/// Opacity of the fill drawn inside each rectangle.
pub const FILL_ALPHA: f32 = 0.2;

/// Draw one rectangle as a translucent fill and an outline.
fn draw_rect(frame: &mut Frame, rect: Rect<Content>, color: Color, config: &EditorConfig) {
    let rect = rect.to_ui_between_pixels();
    frame.fill_rect(rect, color.with_alpha(FILL_ALPHA));
    frame.stroke_rect(rect, color, config.line_thickness);
}

fn draw_anchors(
    frame: &mut Frame,
    view: &ViewTransform,
    rect: Rect<Rendered>,
    config: &EditorConfig,
) {
    let color = config.colors.active_anchor;
    for anchor in rect.anchors() {
        let center = view.rendered_to_content(anchor.position);
        let handle = Rect::with_center_and_size(center, config.anchor_size);
        frame.fill_rect(handle.to_ui(), color);
    }
}

fn line_color(label: &LabelRect, emphasized: bool, ctx: &RenderContext<'_>) -> Color {
    let class = label.label_class_id.and_then(|id| ctx.store.label_class(id));
    label_line_color(class.as_ref(), emphasized, &ctx.config.colors)
}

/// Render every rectangle of the active image plus the gesture preview.
///
/// Inactive labels go first, the active label with its anchors on top of
/// them, and the creation preview last. Only an accepted label is drawn as
/// active. The highlighted accepted label also gets anchors.
pub fn render_rects(
    engine: &RectEngine,
    data: &EditorData,
    ctx: &RenderContext<'_>,
    frame: &mut Frame,
) {
    let Some(view) = data.view else {
        return;
    };
    let config = ctx.config;

    if let Some(image) = ctx.store.active_image() {
        let active = ctx
            .store
            .active_label_id()
            .and_then(|id| image.find(id))
            .filter(|label| label.is_accepted());
        let active_id = active.map(|label| label.id);
        let highlighted_id = ctx.store.highlighted_label_id();

        for label in image.label_rects.iter().filter(|l| Some(l.id) != active_id) {
            let emphasized = Some(label.id) == highlighted_id && label.is_accepted();
            let color = line_color(label, emphasized, ctx);
            let rendered = view.image_rect_to_rendered(label.rect);
            let content = view.rendered_rect_to_content(rendered);
            draw_rect(frame, content, color, config);
            if emphasized {
                draw_anchors(frame, &view, rendered, config);
            }
        }

        if let Some(active) = active {
            let rendered = engine
                .resized_rect(active, data, config)
                .unwrap_or_else(|| view.image_rect_to_rendered(active.rect));
            let color = line_color(active, true, ctx);
            let content = view.rendered_rect_to_content(rendered);
            draw_rect(frame, content, color, config);
            draw_anchors(frame, &view, rendered, config);
        }
    }

    if let Some(preview) = engine.creation_rect(data, config) {
        draw_rect(frame, preview, config.colors.active_line, config);
    }
}
