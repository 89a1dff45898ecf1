//! The label store seen by the editor.
//!
//! The store belongs to the host application. The editor reads owned
//! snapshots from it and writes through a single [`LabelStore::dispatch`]
//! entry point. Label writes always replace an image's whole collection, so a
//! reader never sees a half-applied edit.

use std::collections::HashMap;

use crate::model::{ImageId, ImageLabels, LabelClass, LabelClassId, LabelId, LabelRect};

/// A state change requested by the editor.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreAction {
    /// Replace every rectangle label of an image.
    ReplaceLabels {
        image_id: ImageId,
        label_rects: Vec<LabelRect>,
    },
    /// Select a label (or clear the selection).
    SetActiveLabel(Option<LabelId>),
    /// Mark the label under the pointer (or clear the mark).
    SetHighlightedLabel(Option<LabelId>),
    /// Record that the user has created a label at least once.
    SetFirstLabelCreated(bool),
}

impl StoreAction {
    /// Get a human-readable description of this action
    pub fn description(&self) -> String {
        match self {
            StoreAction::ReplaceLabels {
                image_id,
                label_rects,
            } => format!("Replace labels of '{}' ({} rects)", image_id, label_rects.len()),
            StoreAction::SetActiveLabel(Some(id)) => format!("Activate label {id}"),
            StoreAction::SetActiveLabel(None) => "Clear active label".to_string(),
            StoreAction::SetHighlightedLabel(Some(id)) => format!("Highlight label {id}"),
            StoreAction::SetHighlightedLabel(None) => "Clear highlighted label".to_string(),
            StoreAction::SetFirstLabelCreated(flag) => format!("First label created: {flag}"),
        }
    }
}

/// Read/write access to the host's label state.
///
/// All reads return values, not references: a snapshot taken before a
/// `dispatch` must not be assumed to reflect it.
pub trait LabelStore {
    /// Labels of the image currently shown, if any.
    fn active_image(&self) -> Option<ImageLabels>;

    fn active_label_id(&self) -> Option<LabelId>;

    fn highlighted_label_id(&self) -> Option<LabelId>;

    /// Class assigned to newly created labels.
    fn active_label_class(&self) -> Option<LabelClassId>;

    fn label_class(&self, id: LabelClassId) -> Option<LabelClass>;

    /// Apply a state change.
    fn dispatch(&mut self, action: StoreAction);

    /// The active label, if it is a rectangle on the active image.
    fn active_rect_label(&self) -> Option<LabelRect> {
        let id = self.active_label_id()?;
        self.active_image()?.find(id).cloned()
    }
}

/// A self-contained [`LabelStore`] keyed by image id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLabelStore {
    /// Map from image id to its labels
    images: HashMap<ImageId, ImageLabels>,
    /// Image currently shown in the editor
    active_image_id: Option<ImageId>,
    active_label_id: Option<LabelId>,
    highlighted_label_id: Option<LabelId>,
    active_label_class: Option<LabelClassId>,
    classes: HashMap<LabelClassId, LabelClass>,
    first_label_created: bool,
    /// Number of label collection replacements applied
    revision: u64,
}

impl InMemoryLabelStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get labels for an image, creating an empty collection if not present
    pub fn get_or_create(&mut self, image_id: &str) -> &mut ImageLabels {
        self.images
            .entry(image_id.to_string())
            .or_insert_with(|| ImageLabels::new(image_id))
    }

    /// Get labels for an image (read-only)
    pub fn get(&self, image_id: &str) -> Option<&ImageLabels> {
        self.images.get(image_id)
    }

    /// Show an image in the editor. Selection is per image, so it is cleared.
    pub fn set_active_image(&mut self, image_id: &str) {
        self.get_or_create(image_id);
        if self.active_image_id.as_deref() != Some(image_id) {
            self.active_label_id = None;
            self.highlighted_label_id = None;
        }
        self.active_image_id = Some(image_id.to_string());
    }

    pub fn add_label_class(&mut self, class: LabelClass) {
        self.classes.insert(class.id, class);
    }

    pub fn set_active_label_class(&mut self, id: Option<LabelClassId>) {
        self.active_label_class = id;
    }

    pub fn first_label_created(&self) -> bool {
        self.first_label_created
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl LabelStore for InMemoryLabelStore {
    fn active_image(&self) -> Option<ImageLabels> {
        let id = self.active_image_id.as_ref()?;
        self.images.get(id).cloned()
    }

    fn active_label_id(&self) -> Option<LabelId> {
        self.active_label_id
    }

    fn highlighted_label_id(&self) -> Option<LabelId> {
        self.highlighted_label_id
    }

    fn active_label_class(&self) -> Option<LabelClassId> {
        self.active_label_class
    }

    fn label_class(&self, id: LabelClassId) -> Option<LabelClass> {
        self.classes.get(&id).cloned()
    }

    fn dispatch(&mut self, action: StoreAction) {
        log::trace!("Store: {}", action.description());
        match action {
            StoreAction::ReplaceLabels {
                image_id,
                label_rects,
            } => {
                let image = self.get_or_create(&image_id);
                image.label_rects = label_rects;
                self.revision += 1;
            }
            StoreAction::SetActiveLabel(id) => self.active_label_id = id,
            StoreAction::SetHighlightedLabel(id) => self.highlighted_label_id = id,
            StoreAction::SetFirstLabelCreated(flag) => self.first_label_created = flag,
        }
    }
}
