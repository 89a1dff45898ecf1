//! Scripted pointer sessions.
//!
//! A replay script describes one image, its placement on the canvas and a
//! list of pointer events. Running it drives an [`EditorSession`] exactly as
//! a host would and yields the resulting labels.

use std::path::Path;

use labelkit_ui::{KeyCombo, PointerEventKind};
use serde::{Deserialize, Serialize};

use crate::config::EditorConfig;
use crate::editor_data::EditorData;
use crate::geometry::{Content, Delta, Point, Rect, Size};
use crate::model::{ImageId, ImageLabels, LabelClassId, LabelRect, LabelType};
use crate::session::{EditorMessage, EditorSession};
use crate::store::{InMemoryLabelStore, LabelStore};
use crate::transform::ViewTransform;

/// The image being labelled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptImage {
    pub id: ImageId,
    /// Natural width in pixels
    pub width: f32,
    /// Natural height in pixels
    pub height: f32,
}

/// What happens in one replay step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplayEventKind {
    Down,
    Move,
    Up,
    /// Abandon the current gesture (the Escape key).
    Escape,
}

/// One replay step. Coordinates are canvas content coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayEvent {
    pub kind: ReplayEventKind,
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    /// Keys held during this step
    #[serde(default)]
    pub keys: KeyCombo,
}

/// A complete replay script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayScript {
    pub image: ScriptImage,
    /// Where the image is drawn on the canvas
    pub image_rect: Rect<Content>,
    /// Size of the canvas content
    pub content_size: Size,
    #[serde(default)]
    pub scroll: Delta,
    /// Zoom factor the host reports alongside the placement
    #[serde(default = "default_zoom")]
    pub zoom: f32,
    /// Class given to created labels
    #[serde(default)]
    pub label_class: Option<LabelClassId>,
    /// Labels present before the first event
    #[serde(default)]
    pub labels: Vec<LabelRect>,
    pub events: Vec<ReplayEvent>,
}

fn default_zoom() -> f32 {
    1.0
}

/// Errors that can occur when loading or running a replay script.
#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    /// JSON parsing error
    #[error("Failed to parse replay script: {0}")]
    ParseError(#[from] serde_json::Error),

    /// I/O error when reading the script
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The script cannot describe a usable canvas
    #[error("Invalid replay script: {0}")]
    InvalidScript(String),
}

impl ReplayScript {
    /// Deserialize a script from JSON.
    pub fn from_json(json: &str) -> Result<Self, ReplayError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a script from a file.
    pub fn load(path: &Path) -> Result<Self, ReplayError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    fn view(&self) -> Result<ViewTransform, ReplayError> {
        ViewTransform::new(
            Size::new(self.image.width, self.image.height),
            self.image_rect,
            self.scroll,
        )
        .ok_or_else(|| {
            ReplayError::InvalidScript(format!(
                "image {}x{} cannot be placed at {:?}",
                self.image.width, self.image.height, self.image_rect
            ))
        })
    }

    /// Run every event through a fresh rectangle editing session.
    pub fn run(&self, config: EditorConfig) -> Result<ImageLabels, ReplayError> {
        let view = self.view()?;

        let mut store = InMemoryLabelStore::new();
        store.set_active_image(&self.image.id);
        store.get_or_create(&self.image.id).label_rects = self.labels.clone();
        store.set_active_label_class(self.label_class);

        let mut session = EditorSession::new(store, config, LabelType::Rect);
        log::info!(
            "Replaying {} events on '{}' ({} existing labels)",
            self.events.len(),
            self.image.id,
            self.labels.len()
        );

        for (i, event) in self.events.iter().enumerate() {
            let data = EditorData::new(self.content_size)
                .with_view(view)
                .with_zoom(self.zoom)
                .with_mouse(Point::new(event.x, event.y))
                .with_keys(event.keys.clone());
            let message = match event.kind {
                ReplayEventKind::Down => EditorMessage::Pointer(PointerEventKind::Down),
                ReplayEventKind::Move => EditorMessage::Pointer(PointerEventKind::Move),
                ReplayEventKind::Up => EditorMessage::Pointer(PointerEventKind::Up),
                ReplayEventKind::Escape => EditorMessage::Cancel,
            };
            log::debug!(
                "Event {}: {} at ({}, {})",
                i,
                message.description(),
                event.x,
                event.y
            );
            session.update(message, &data);
        }

        if session.engine().is_some_and(|engine| engine.is_in_progress()) {
            log::warn!("Script ended in the middle of a gesture; it was not committed");
        }

        session
            .store()
            .active_image()
            .ok_or_else(|| ReplayError::InvalidScript("active image disappeared".to_string()))
    }
}
