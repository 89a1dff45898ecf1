//! Scenario tests for the rectangle engine.
//!
//! Every scenario uses a 1000x800 image laid out at content `{0, 0, 500, 400}`
//! (render scale 2) on a 600x500 canvas.

mod creation_tests;
mod selection_tests;

use labelkit_ui::{Key, KeyCombo, PointerEventKind};

use crate::config::EditorConfig;
use crate::editor_data::EditorData;
use crate::engine::{EditorContext, LabelEngine, RectEngine, ViewportActions};
use crate::geometry::{Delta, Image, Point, Rect, Size};
use crate::model::LabelRect;
use crate::store::{InMemoryLabelStore, LabelStore};
use crate::transform::ViewTransform;

pub(super) const EPSILON: f32 = 1e-3;

pub(super) fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

pub(super) fn assert_rect_eq(actual: Rect<Image>, expected: Rect<Image>) {
    assert!(
        approx_eq(actual.x, expected.x)
            && approx_eq(actual.y, expected.y)
            && approx_eq(actual.width, expected.width)
            && approx_eq(actual.height, expected.height),
        "expected {expected:?}, got {actual:?}"
    );
}

pub(super) fn view() -> ViewTransform {
    ViewTransform::new(
        Size::new(1000.0, 800.0),
        Rect::new(0.0, 0.0, 500.0, 400.0),
        Delta::zero(),
    )
    .unwrap()
}

/// An engine wired to an in-memory store with one active image.
pub(super) struct Harness {
    pub store: InMemoryLabelStore,
    pub config: EditorConfig,
    pub viewport: ViewportActions,
    pub engine: RectEngine,
    pub keys: KeyCombo,
}

impl Harness {
    pub fn new() -> Self {
        let mut store = InMemoryLabelStore::new();
        store.set_active_image("img");
        Self {
            store,
            config: EditorConfig::new(),
            viewport: ViewportActions::default(),
            engine: RectEngine::new(),
            keys: KeyCombo::new(),
        }
    }

    pub fn with_labels(labels: &[LabelRect]) -> Self {
        let mut harness = Self::new();
        harness.store.get_or_create("img").label_rects = labels.to_vec();
        harness
    }

    pub fn hold(&mut self, key: Key) {
        self.keys.press(key);
    }

    pub fn release(&mut self, key: Key) {
        self.keys.release(key);
    }

    pub fn frame(&self, x: f32, y: f32, event: PointerEventKind) -> EditorData {
        EditorData::new(Size::new(600.0, 500.0))
            .with_view(view())
            .with_mouse(Point::new(x, y))
            .with_keys(self.keys.clone())
            .with_event(event)
    }

    fn dispatch(&mut self, data: &EditorData) {
        let mut ctx = EditorContext {
            store: &mut self.store,
            config: &self.config,
            viewport: &mut self.viewport,
        };
        match data.event {
            Some(PointerEventKind::Down) => self.engine.on_pointer_down(data, &mut ctx),
            Some(PointerEventKind::Move) => self.engine.on_pointer_move(data, &mut ctx),
            Some(PointerEventKind::Up) => self.engine.on_pointer_up(data, &mut ctx),
            None => {}
        }
    }

    pub fn down(&mut self, x: f32, y: f32) {
        let data = self.frame(x, y, PointerEventKind::Down);
        self.dispatch(&data);
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        let data = self.frame(x, y, PointerEventKind::Move);
        self.dispatch(&data);
    }

    pub fn up(&mut self, x: f32, y: f32) {
        let data = self.frame(x, y, PointerEventKind::Up);
        self.dispatch(&data);
    }

    pub fn drag(&mut self, from: (f32, f32), to: (f32, f32)) {
        self.down(from.0, from.1);
        self.move_to(to.0, to.1);
        self.up(to.0, to.1);
    }

    pub fn cancel(&mut self) {
        let mut ctx = EditorContext {
            store: &mut self.store,
            config: &self.config,
            viewport: &mut self.viewport,
        };
        self.engine.cancel(&mut ctx);
    }

    pub fn labels(&self) -> Vec<LabelRect> {
        self.store
            .active_image()
            .map(|image| image.label_rects)
            .unwrap_or_default()
    }
}
