//! Rectangle editing: create by drag, resize by anchor, select by click.

use labelkit_ui::Frame;

use super::square;
use super::{EditorContext, LabelEngine, RenderContext};
use crate::config::EditorConfig;
use crate::editor_data::EditorData;
use crate::feedback::{self, CursorStyle};
use crate::geometry::{Content, Delta, Point, Rect, RectAnchor, Rendered, Size};
use crate::model::{ImageLabels, LabelId, LabelRect, LabelType};
use crate::store::StoreAction;
use crate::transform::ViewTransform;

/// The gesture a rectangle engine is in the middle of.
///
/// Creation and resize can never be in progress at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    /// Dragging out a new rectangle from `start` (snapped onto the image).
    Creating { start: Point<Content> },
    /// Dragging `anchor` of the active rectangle.
    Resizing { anchor: RectAnchor<Rendered> },
}

impl Gesture {
    pub fn start_create_point(&self) -> Option<Point<Content>> {
        match self {
            Gesture::Creating { start } => Some(*start),
            _ => None,
        }
    }

    pub fn start_resize_anchor(&self) -> Option<RectAnchor<Rendered>> {
        match self {
            Gesture::Resizing { anchor } => Some(*anchor),
            _ => None,
        }
    }
}

/// Editing engine for rectangle labels.
#[derive(Debug, Clone, Default)]
pub struct RectEngine {
    gesture: Gesture,
}

impl RectEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// Rectangle being created, as it would be committed for the current
    /// pointer position.
    pub fn creation_rect(
        &self,
        data: &EditorData,
        config: &EditorConfig,
    ) -> Option<Rect<Content>> {
        let start = self.gesture.start_create_point()?;
        let end = data.mouse_snapped_to_image()?;
        let rect = Rect::from_corners(start, end);
        if square::is_active(config, data) {
            Some(square::square_for_creation(rect))
        } else {
            Some(rect)
        }
    }

    /// Geometry of `label` resized by the current pointer position, as it
    /// would be committed.
    pub fn resized_rect(
        &self,
        label: &LabelRect,
        data: &EditorData,
        config: &EditorConfig,
    ) -> Option<Rect<Rendered>> {
        let anchor = self.gesture.start_resize_anchor()?;
        let view = data.view?;
        let mouse = data.mouse_snapped_to_image()?;

        let rendered = view.image_rect_to_rendered(label.rect);
        let delta = mouse - view.rendered_to_content(anchor.position);
        let resized = rendered.resize(anchor.direction, delta);
        if square::is_active(config, data) {
            Some(square::square_for_resize(resized, anchor.direction))
        } else {
            Some(resized)
        }
    }

    fn begin_creation(
        &mut self,
        view: &ViewTransform,
        mouse: Point<Content>,
        ctx: &mut EditorContext<'_>,
    ) {
        let start = view.snap_to_image(mouse);
        log::debug!("Start rect creation at {:?}", start);
        self.gesture = Gesture::Creating { start };
        ctx.store.dispatch(StoreAction::SetActiveLabel(None));
        ctx.viewport.set_disabled(true);
    }

    fn begin_resize(
        &mut self,
        label: &LabelRect,
        anchor: RectAnchor<Rendered>,
        ctx: &mut EditorContext<'_>,
    ) {
        log::debug!("Start resize of {} from {:?}", label.id, anchor.direction);
        self.gesture = Gesture::Resizing { anchor };
        ctx.store.dispatch(StoreAction::SetActiveLabel(Some(label.id)));
        ctx.viewport.set_disabled(true);
    }

    fn end_gesture(&mut self, ctx: &mut EditorContext<'_>) {
        if self.gesture != Gesture::Idle {
            log::debug!("End gesture {:?}", self.gesture);
        }
        self.gesture = Gesture::Idle;
        ctx.viewport.set_disabled(false);
    }

    /// Square the active rectangle in place.
    fn square_active(&self, ctx: &mut EditorContext<'_>) {
        let active = ctx.store.active_rect_label();
        let (Some(image), Some(active)) = (ctx.store.active_image(), active) else {
            return;
        };
        let squared = square::square_for_creation(active.rect);
        if let Some(label_rects) = image.with_rect_replaced(active.id, squared) {
            log::info!("Squared label {} to {:?}", active.id, squared);
            ctx.store.dispatch(StoreAction::ReplaceLabels {
                image_id: image.id,
                label_rects,
            });
        }
    }

    fn commit_creation(
        &self,
        data: &EditorData,
        ctx: &mut EditorContext<'_>,
        view: &ViewTransform,
    ) {
        let end = data.mouse_snapped_to_image();
        let (Some(start), Some(end)) = (self.gesture.start_create_point(), end) else {
            return;
        };
        if start == end {
            log::debug!("Click without drag, nothing created");
            return;
        }
        let Some(rect) = self.creation_rect(data, ctx.config) else {
            return;
        };
        let Some(image) = ctx.store.active_image() else {
            log::warn!("No active image, dropping new rect");
            return;
        };

        let rect = view.content_rect_to_image(rect);
        let label = LabelRect::new(ctx.store.active_label_class(), rect);
        let id = label.id;
        log::info!("Created label {} at {:?}", id, label.rect);
        ctx.store.dispatch(StoreAction::ReplaceLabels {
            label_rects: image.with_appended(label),
            image_id: image.id,
        });
        ctx.store.dispatch(StoreAction::SetFirstLabelCreated(true));
        ctx.store.dispatch(StoreAction::SetActiveLabel(Some(id)));
    }

    fn commit_resize(
        &self,
        data: &EditorData,
        ctx: &mut EditorContext<'_>,
        view: &ViewTransform,
    ) {
        let active = ctx.store.active_rect_label();
        let (Some(image), Some(active)) = (ctx.store.active_image(), active) else {
            log::warn!("Active label is gone, dropping resize");
            return;
        };
        let Some(resized) = self.resized_rect(&active, data, ctx.config) else {
            return;
        };
        let rect = view.rendered_rect_to_image(resized);
        if let Some(label_rects) = image.with_rect_replaced(active.id, rect) {
            log::info!("Resized label {} to {:?}", active.id, rect);
            ctx.store.dispatch(StoreAction::ReplaceLabels {
                image_id: image.id,
                label_rects,
            });
        }
    }
}

impl LabelEngine for RectEngine {
    fn label_type(&self) -> LabelType {
        LabelType::Rect
    }

    fn on_pointer_down(&mut self, data: &EditorData, ctx: &mut EditorContext<'_>) {
        if !data.is_mouse_over_canvas() {
            return;
        }
        let (Some(view), Some(mouse)) = (data.view, data.mouse_position) else {
            log::warn!("Pointer down without a laid out image");
            return;
        };
        let hover = ctx.config.anchor_hover_size;
        let image = ctx.store.active_image();
        let active_id = ctx.store.active_label_id();

        let hit = image
            .as_ref()
            .and_then(|image| rect_under_mouse(image, active_id, &view, mouse, hover));

        if let Some(label) = hit {
            let rendered = view.image_rect_to_rendered(label.rect);
            let anchor = anchor_under_mouse(&view, rendered, mouse, hover);
            match anchor {
                Some(anchor) if label.is_accepted() => self.begin_resize(&label, anchor, ctx),
                _ => match ctx.store.highlighted_label_id() {
                    Some(highlighted) => {
                        log::debug!("Select label {}", highlighted);
                        ctx.store.dispatch(StoreAction::SetActiveLabel(Some(highlighted)));
                    }
                    None => self.begin_creation(&view, mouse, ctx),
                },
            }
        } else if view.is_over_image(mouse) {
            let has_active = ctx.store.active_rect_label().is_some();
            if has_active && data.is_key_held(ctx.config.square_modifier) {
                self.square_active(ctx);
            } else {
                self.begin_creation(&view, mouse, ctx);
            }
        }
    }

    fn on_pointer_move(&mut self, data: &EditorData, ctx: &mut EditorContext<'_>) {
        if self.is_in_progress() {
            return;
        }
        let (Some(view), Some(mouse)) = (data.view, data.mouse_position) else {
            return;
        };
        if !view.is_over_image(mouse) {
            return;
        }

        let active_id = ctx.store.active_label_id();
        let hover = ctx.config.anchor_hover_size;
        let under = ctx
            .store
            .active_image()
            .and_then(|image| rect_under_mouse(&image, active_id, &view, mouse, hover));
        let under_id = under.map(|label| label.id);
        if ctx.store.highlighted_label_id() != under_id {
            log::trace!("Highlight {:?}", under_id.map(|id| id.to_string()));
            ctx.store.dispatch(StoreAction::SetHighlightedLabel(under_id));
        }
    }

    fn on_pointer_up(&mut self, data: &EditorData, ctx: &mut EditorContext<'_>) {
        match data.view {
            Some(view) => match self.gesture {
                Gesture::Creating { .. } => self.commit_creation(data, ctx, &view),
                Gesture::Resizing { .. } => self.commit_resize(data, ctx, &view),
                Gesture::Idle => {}
            },
            None if self.is_in_progress() => {
                log::warn!("Pointer up without a laid out image, gesture dropped");
            }
            None => {}
        }
        self.end_gesture(ctx);
    }

    fn render(&self, data: &EditorData, ctx: &RenderContext<'_>, frame: &mut Frame) {
        crate::render::render_rects(self, data, ctx, frame);
    }

    fn is_in_progress(&self) -> bool {
        self.gesture != Gesture::Idle
    }

    fn cancel(&mut self, ctx: &mut EditorContext<'_>) {
        if self.is_in_progress() {
            log::debug!("Cancel {:?}", self.gesture);
        }
        self.end_gesture(ctx);
    }

    fn cursor_style(&self, data: &EditorData, ctx: &RenderContext<'_>) -> CursorStyle {
        feedback::rect_cursor_style(self, data, ctx)
    }

    fn resize_anchor(&self) -> Option<RectAnchor<Rendered>> {
        self.gesture.start_resize_anchor()
    }
}

/// Check if `mouse` is on the edge band of a label: within half the hover
/// size of its outline, on either side.
fn is_over_edges(
    view: &ViewTransform,
    label: &LabelRect,
    mouse: Point<Content>,
    hover: Size,
) -> bool {
    let rect = view.image_rect_to_content(label.rect);
    let half = Delta::new(hover.width / 2.0, hover.height / 2.0);
    let outer = rect.expand(half);
    let inner = rect.expand(half * -1.0);
    outer.contains(mouse) && !inner.contains(mouse)
}

/// Label whose edge band is under the pointer. The active label wins over
/// the others, then storage order decides.
pub(crate) fn rect_under_mouse(
    image: &ImageLabels,
    active_id: Option<LabelId>,
    view: &ViewTransform,
    mouse: Point<Content>,
    hover: Size,
) -> Option<LabelRect> {
    let active = active_id.and_then(|id| image.find(id));
    if let Some(active) = active.filter(|label| is_over_edges(view, label, mouse, hover)) {
        return Some(active.clone());
    }
    image
        .label_rects
        .iter()
        .find(|label| is_over_edges(view, label, mouse, hover))
        .cloned()
}

/// Anchor of `rect` whose hover box contains the pointer.
///
/// A zero-size rectangle has all its anchors on top of each other, so it
/// offers none.
pub(crate) fn anchor_under_mouse(
    view: &ViewTransform,
    rect: Rect<Rendered>,
    mouse: Point<Content>,
    hover: Size,
) -> Option<RectAnchor<Rendered>> {
    if rect.is_degenerate() {
        return None;
    }
    rect.anchors().into_iter().find(|anchor| {
        Rect::with_center_and_size(view.rendered_to_content(anchor.position), hover).contains(mouse)
    })
}

/// Anchor of any accepted label under the pointer.
pub(crate) fn any_accepted_anchor_under_mouse(
    image: &ImageLabels,
    view: &ViewTransform,
    mouse: Point<Content>,
    hover: Size,
) -> Option<RectAnchor<Rendered>> {
    image
        .label_rects
        .iter()
        .filter(|label| label.is_accepted())
        .find_map(|label| {
            anchor_under_mouse(view, view.image_rect_to_rendered(label.rect), mouse, hover)
        })
}
