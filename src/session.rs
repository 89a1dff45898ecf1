//! The editor session: one mounted engine plus everything it works against.
//!
//! Host input is turned into [`EditorMessage`]s and applied through
//! [`EditorSession::update`], which runs the engine, refreshes pointer
//! feedback and re-renders.

use labelkit_ui::{Event, Frame, Key, PointerEventKind};

use crate::config::EditorConfig;
use crate::editor_data::EditorData;
use crate::engine::{EditorContext, LabelEngine, RenderContext, ViewportActions, mount_engine};
use crate::feedback::{self, CursorStyle, PositionIndicator};
use crate::model::LabelType;
use crate::store::LabelStore;

/// Actions the session understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorMessage {
    /// Pointer went down, moved or went up.
    Pointer(PointerEventKind),
    /// Abandon the current gesture.
    Cancel,
    /// Mount the engine for another label type.
    SwapEngine(LabelType),
    /// The host started or stopped dragging the image around.
    SetImageDragMode(bool),
}

impl EditorMessage {
    /// Get a human-readable description of this message
    pub fn description(&self) -> String {
        match self {
            EditorMessage::Pointer(kind) => format!("Pointer {kind:?}"),
            EditorMessage::Cancel => "Cancel gesture".to_string(),
            EditorMessage::SwapEngine(label_type) => {
                format!("Swap engine to {}", label_type.name())
            }
            EditorMessage::SetImageDragMode(on) => format!("Image drag mode: {on}"),
        }
    }

    /// Map a host event to a message, if the editor reacts to it.
    pub fn from_event(event: &Event) -> Option<Self> {
        if let Some(kind) = event.pointer_kind() {
            return Some(EditorMessage::Pointer(kind));
        }
        match event {
            Event::KeyPressed { key: Key::Escape } => Some(EditorMessage::Cancel),
            _ => None,
        }
    }
}

/// Editing state for one canvas.
pub struct EditorSession<S: LabelStore> {
    store: S,
    config: EditorConfig,
    engine: Option<Box<dyn LabelEngine>>,
    viewport: ViewportActions,
    image_drag_mode: bool,
    indicator: PositionIndicator,
    cursor: CursorStyle,
    frame: Frame,
}

impl<S: LabelStore> EditorSession<S> {
    /// Create a session editing `label_type` labels.
    pub fn new(store: S, config: EditorConfig, label_type: LabelType) -> Self {
        log::debug!("New editor session for {} labels", label_type.name());
        Self {
            store,
            config,
            engine: mount_engine(label_type),
            viewport: ViewportActions::default(),
            image_drag_mode: false,
            indicator: PositionIndicator::new(),
            cursor: CursorStyle::Default,
            frame: Frame::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Give the store back, ending the session.
    pub fn into_store(self) -> S {
        self.store
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn engine(&self) -> Option<&dyn LabelEngine> {
        self.engine.as_deref()
    }

    pub fn label_type(&self) -> Option<LabelType> {
        self.engine.as_ref().map(|engine| engine.label_type())
    }

    /// Check if pan/zoom/scroll must be suppressed.
    pub fn viewport_actions_disabled(&self) -> bool {
        self.viewport.is_disabled()
    }

    pub fn image_drag_mode(&self) -> bool {
        self.image_drag_mode
    }

    pub fn cursor(&self) -> CursorStyle {
        self.cursor
    }

    pub fn position_indicator(&self) -> &PositionIndicator {
        &self.indicator
    }

    /// Draw commands of the last render.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Translate a host event and apply it.
    pub fn handle_event(&mut self, event: &Event, data: &EditorData) {
        if let Some(message) = EditorMessage::from_event(event) {
            self.update(message, data);
        }
    }

    /// Apply a message against the given frame snapshot.
    pub fn update(&mut self, message: EditorMessage, data: &EditorData) {
        log::trace!("Session: {}", message.description());
        match message {
            EditorMessage::Pointer(kind) => {
                let data = data.clone().with_event(kind);
                self.handle_pointer(kind, &data);
                self.refresh_feedback(&data);
                self.full_render(&data);
            }
            EditorMessage::Cancel => {
                self.cancel();
                self.refresh_feedback(data);
                self.full_render(data);
            }
            EditorMessage::SwapEngine(label_type) => {
                self.swap_engine(label_type);
                self.full_render(data);
            }
            EditorMessage::SetImageDragMode(on) => {
                self.image_drag_mode = on;
                self.refresh_feedback(data);
            }
        }
    }

    fn handle_pointer(&mut self, kind: PointerEventKind, data: &EditorData) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };
        let mut ctx = EditorContext {
            store: &mut self.store,
            config: &self.config,
            viewport: &mut self.viewport,
        };
        match kind {
            PointerEventKind::Down => engine.on_pointer_down(data, &mut ctx),
            PointerEventKind::Move => engine.on_pointer_move(data, &mut ctx),
            PointerEventKind::Up => engine.on_pointer_up(data, &mut ctx),
        }
    }

    /// Abandon the engine's gesture, if any.
    pub fn cancel(&mut self) {
        if let Some(engine) = self.engine.as_mut() {
            let mut ctx = EditorContext {
                store: &mut self.store,
                config: &self.config,
                viewport: &mut self.viewport,
            };
            engine.cancel(&mut ctx);
        }
    }

    /// Replace the mounted engine. A gesture in progress is cancelled first.
    pub fn swap_engine(&mut self, label_type: LabelType) {
        if self.label_type() == Some(label_type) {
            return;
        }
        self.cancel();
        log::debug!("Mounting engine for {} labels", label_type.name());
        self.engine = mount_engine(label_type);
    }

    fn refresh_feedback(&mut self, data: &EditorData) {
        let ctx = RenderContext {
            store: &self.store,
            config: &self.config,
        };
        let engine = self.engine.as_deref();
        self.cursor = feedback::cursor_style(engine, data, &ctx, self.image_drag_mode);
        self.indicator.update(data, engine, &self.store, self.image_drag_mode);
    }

    /// Clear the frame and redraw labels, gesture preview and tooltip.
    pub fn full_render(&mut self, data: &EditorData) {
        self.frame.clear();
        if let Some(engine) = self.engine.as_deref() {
            let ctx = RenderContext {
                store: &self.store,
                config: &self.config,
            };
            engine.render(data, &ctx, &mut self.frame);
        }
        self.indicator.render(data, &self.config, &mut self.frame);
    }
}
