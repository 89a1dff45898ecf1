//! Tests for drawing new rectangles.

use labelkit_ui::{Key, PointerEventKind};

use super::{Harness, assert_rect_eq};
use crate::editor_data::EditorData;
use crate::engine::{EditorContext, Gesture, LabelEngine};
use crate::geometry::{Point, Rect, Size};
use crate::model::{LabelRect, LabelStatus};
use crate::store::LabelStore;

#[test]
fn test_drag_creates_scaled_rect() {
    let mut h = Harness::new();
    h.store.set_active_label_class(Some(4));

    h.drag((100.0, 100.0), (200.0, 150.0));

    let labels = h.labels();
    assert_eq!(labels.len(), 1);
    assert_rect_eq(labels[0].rect, Rect::new(200.0, 200.0, 200.0, 100.0));
    assert_eq!(labels[0].label_class_id, Some(4));
    assert_eq!(labels[0].status, LabelStatus::Accepted);
    assert_eq!(h.store.active_label_id(), Some(labels[0].id));
    assert!(h.store.first_label_created());
    assert_eq!(h.engine.gesture(), Gesture::Idle);
    assert!(!h.viewport.is_disabled());
}

#[test]
fn test_square_modifier_squares_new_rect() {
    let mut h = Harness::new();
    h.hold(Key::Control);
    h.drag((100.0, 100.0), (200.0, 150.0));

    assert_rect_eq(h.labels()[0].rect, Rect::new(200.0, 200.0, 200.0, 200.0));
}

#[test]
fn test_make_square_setting_is_inverted_by_modifier() {
    let mut h = Harness::new();
    h.config.make_square = true;
    h.drag((100.0, 100.0), (200.0, 150.0));
    assert_rect_eq(h.labels()[0].rect, Rect::new(200.0, 200.0, 200.0, 200.0));

    let mut h = Harness::new();
    h.config.make_square = true;
    h.hold(Key::Control);
    h.drag((100.0, 100.0), (200.0, 150.0));
    assert_rect_eq(h.labels()[0].rect, Rect::new(200.0, 200.0, 200.0, 100.0));
}

#[test]
fn test_created_rect_is_bounding_box_of_drag() {
    let drags = [
        ((100.0, 100.0), (200.0, 150.0)),
        ((200.0, 150.0), (100.0, 100.0)),
        ((300.0, 50.0), (20.0, 390.0)),
        ((10.0, 300.0), (11.0, 299.5)),
    ];
    for (from, to) in drags {
        let mut h = Harness::new();
        h.drag(from, to);

        let rect = h.labels()[0].rect;
        assert!(rect.width >= 0.0 && rect.height >= 0.0, "{rect:?}");
        let x0 = f32::min(from.0, to.0) * 2.0;
        let y0 = f32::min(from.1, to.1) * 2.0;
        let x1 = f32::max(from.0, to.0) * 2.0;
        let y1 = f32::max(from.1, to.1) * 2.0;
        assert_rect_eq(rect, Rect::new(x0, y0, x1 - x0, y1 - y0));
    }
}

#[test]
fn test_click_without_drag_creates_nothing() {
    let mut h = Harness::new();
    h.down(100.0, 100.0);
    h.up(100.0, 100.0);

    assert!(h.labels().is_empty());
    assert!(!h.store.first_label_created());
    assert_eq!(h.store.revision(), 0);
    assert_eq!(h.engine.gesture(), Gesture::Idle);
}

#[test]
fn test_drag_past_image_edge_is_clamped() {
    let mut h = Harness::new();
    h.drag((400.0, 300.0), (590.0, 480.0));

    assert_rect_eq(h.labels()[0].rect, Rect::new(800.0, 600.0, 200.0, 200.0));
}

#[test]
fn test_creation_state_during_drag() {
    let existing = LabelRect::new(None, Rect::new(600.0, 600.0, 100.0, 100.0));
    let mut h = Harness::with_labels(&[existing.clone()]);
    h.store
        .dispatch(crate::store::StoreAction::SetActiveLabel(Some(existing.id)));

    h.down(100.0, 100.0);

    assert_eq!(
        h.engine.gesture().start_create_point(),
        Some(Point::new(100.0, 100.0))
    );
    assert!(h.engine.gesture().start_resize_anchor().is_none());
    assert!(h.engine.is_in_progress());
    assert!(h.viewport.is_disabled());
    assert!(h.store.active_label_id().is_none());
}

#[test]
fn test_cancel_discards_creation() {
    let mut h = Harness::new();
    h.down(100.0, 100.0);
    h.move_to(200.0, 150.0);
    h.cancel();
    h.up(200.0, 150.0);

    assert!(h.labels().is_empty());
    assert!(!h.viewport.is_disabled());
    assert_eq!(h.engine.gesture(), Gesture::Idle);
}

#[test]
fn test_pointer_up_without_view_ends_gesture() {
    let mut h = Harness::new();
    h.down(100.0, 100.0);

    let data = EditorData::new(Size::new(600.0, 500.0))
        .with_mouse(Point::new(200.0, 150.0))
        .with_event(PointerEventKind::Up);
    let mut ctx = EditorContext {
        store: &mut h.store,
        config: &h.config,
        viewport: &mut h.viewport,
    };
    h.engine.on_pointer_up(&data, &mut ctx);

    assert!(h.labels().is_empty());
    assert!(!h.engine.is_in_progress());
    assert!(!h.viewport.is_disabled());
}

#[test]
fn test_down_outside_canvas_or_image_is_ignored() {
    let mut h = Harness::new();
    h.down(-5.0, 100.0);
    assert!(!h.engine.is_in_progress());

    // On the canvas but right of the image.
    h.down(550.0, 100.0);
    assert!(!h.engine.is_in_progress());
}

#[test]
fn test_without_active_image_nothing_is_written() {
    let mut h = Harness::new();
    h.store = crate::store::InMemoryLabelStore::new();
    h.drag((100.0, 100.0), (200.0, 150.0));

    assert!(h.labels().is_empty());
    assert!(!h.store.first_label_created());
    assert!(!h.engine.is_in_progress());
}
