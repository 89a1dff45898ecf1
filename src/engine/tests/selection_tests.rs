//! Tests for hover highlighting, click selection and one-shot squaring.

use labelkit_ui::{Key, PointerEventKind};

use super::{Harness, assert_rect_eq};
use crate::engine::{EditorContext, LabelEngine, RectEngine, ViewportActions};
use crate::geometry::Rect;
use crate::model::{ImageLabels, LabelClass, LabelClassId, LabelId, LabelRect};
use crate::store::{InMemoryLabelStore, LabelStore, StoreAction};

fn label() -> LabelRect {
    LabelRect::new(None, Rect::new(200.0, 200.0, 200.0, 100.0))
}

#[test]
fn test_hover_on_edge_highlights() {
    let label = label();
    let mut h = Harness::with_labels(&[label.clone()]);

    h.move_to(125.0, 100.0);
    assert_eq!(h.store.highlighted_label_id(), Some(label.id));

    // Well inside the rectangle is not on its edge.
    h.move_to(150.0, 125.0);
    assert_eq!(h.store.highlighted_label_id(), None);
}

#[test]
fn test_active_label_wins_overlapping_edges() {
    let first = label();
    let second = LabelRect::new(None, Rect::new(200.0, 200.0, 100.0, 100.0));
    let mut h = Harness::with_labels(&[first.clone(), second.clone()]);

    h.move_to(100.0, 125.0);
    assert_eq!(h.store.highlighted_label_id(), Some(first.id));

    h.store.dispatch(StoreAction::SetActiveLabel(Some(second.id)));
    h.move_to(100.0, 126.0);
    assert_eq!(h.store.highlighted_label_id(), Some(second.id));
}

#[test]
fn test_move_off_image_keeps_highlight() {
    let label = label();
    let mut h = Harness::with_labels(&[label.clone()]);
    h.move_to(125.0, 100.0);
    h.move_to(550.0, 100.0);

    assert_eq!(h.store.highlighted_label_id(), Some(label.id));
}

#[test]
fn test_no_highlight_writes_during_gesture() {
    let label = label();
    let mut h = Harness::with_labels(&[label]);
    h.down(300.0, 300.0);
    h.move_to(125.0, 100.0);

    assert_eq!(h.store.highlighted_label_id(), None);
}

#[test]
fn test_click_on_highlighted_edge_selects() {
    let label = label();
    let mut h = Harness::with_labels(&[label.clone()]);
    h.move_to(125.0, 100.0);
    h.down(125.0, 100.0);

    assert_eq!(h.store.active_label_id(), Some(label.id));
    assert!(!h.engine.is_in_progress());
    assert!(!h.viewport.is_disabled());
    h.up(125.0, 100.0);
    assert_eq!(h.labels(), vec![label]);
}

#[test]
fn test_modifier_click_squares_active_label() {
    let label = label();
    let mut h = Harness::with_labels(&[label.clone()]);
    h.store.dispatch(StoreAction::SetActiveLabel(Some(label.id)));
    h.hold(Key::Control);

    h.down(400.0, 300.0);
    assert!(!h.engine.is_in_progress());
    h.up(400.0, 300.0);

    let labels = h.labels();
    assert_eq!(labels.len(), 1);
    assert_eq!(labels[0].id, label.id);
    assert_rect_eq(labels[0].rect, Rect::new(200.0, 200.0, 200.0, 200.0));
    assert_eq!(h.store.revision(), 1);
}

#[test]
fn test_click_off_labels_clears_selection() {
    let label = label();
    let mut h = Harness::with_labels(&[label.clone()]);
    h.store.dispatch(StoreAction::SetActiveLabel(Some(label.id)));
    h.down(400.0, 300.0);

    assert!(h.store.active_label_id().is_none());
}

/// Store wrapper recording every dispatched action.
struct RecordingStore {
    inner: InMemoryLabelStore,
    actions: Vec<StoreAction>,
}

impl LabelStore for RecordingStore {
    fn active_image(&self) -> Option<ImageLabels> {
        self.inner.active_image()
    }

    fn active_label_id(&self) -> Option<LabelId> {
        self.inner.active_label_id()
    }

    fn highlighted_label_id(&self) -> Option<LabelId> {
        self.inner.highlighted_label_id()
    }

    fn active_label_class(&self) -> Option<LabelClassId> {
        self.inner.active_label_class()
    }

    fn label_class(&self, id: LabelClassId) -> Option<LabelClass> {
        self.inner.label_class(id)
    }

    fn dispatch(&mut self, action: StoreAction) {
        self.actions.push(action.clone());
        self.inner.dispatch(action);
    }
}

#[test]
fn test_highlight_written_only_on_change() {
    let label = label();
    let h = Harness::with_labels(&[label.clone()]);
    let mut store = RecordingStore {
        inner: h.store.clone(),
        actions: Vec::new(),
    };
    let mut viewport = ViewportActions::default();
    let mut engine = RectEngine::new();

    for (x, y) in [(125.0, 100.0), (126.0, 100.0), (150.0, 125.0), (151.0, 125.0)] {
        let data = h.frame(x, y, PointerEventKind::Move);
        let mut ctx = EditorContext {
            store: &mut store,
            config: &h.config,
            viewport: &mut viewport,
        };
        engine.on_pointer_move(&data, &mut ctx);
    }

    assert_eq!(
        store.actions,
        vec![
            StoreAction::SetHighlightedLabel(Some(label.id)),
            StoreAction::SetHighlightedLabel(None),
        ]
    );
}
