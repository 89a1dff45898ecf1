//! Rectangle labels and the per-image label collection.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::LabelClassId;
use crate::geometry::{Image, Rect};

/// Unique, stable identifier of a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelId(Uuid);

impl LabelId {
    /// Generate a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LabelId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LabelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Review status of a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelStatus {
    /// Finalized; eligible for resizing through its anchors.
    #[default]
    Accepted,
    Rejected,
    /// Suggested (e.g. by a model) and not yet reviewed.
    Undecided,
}

/// Label geometry kinds an editor can work with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelType {
    Rect,
    Point,
    Line,
    Polygon,
}

impl LabelType {
    /// Get the display name for this label type.
    pub fn name(&self) -> &'static str {
        match self {
            LabelType::Rect => "Rect",
            LabelType::Point => "Point",
            LabelType::Line => "Line",
            LabelType::Polygon => "Polygon",
        }
    }
}

/// A rectangle label on an image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelRect {
    pub id: LabelId,
    /// Class assigned to the label, if any.
    #[serde(default)]
    pub label_class_id: Option<LabelClassId>,
    /// Geometry in image pixels.
    pub rect: Rect<Image>,
    #[serde(default)]
    pub status: LabelStatus,
}

impl LabelRect {
    /// Create an accepted label with a fresh id.
    pub fn new(label_class_id: Option<LabelClassId>, rect: Rect<Image>) -> Self {
        Self {
            id: LabelId::new(),
            label_class_id,
            rect,
            status: LabelStatus::Accepted,
        }
    }

    pub fn with_status(mut self, status: LabelStatus) -> Self {
        self.status = status;
        self
    }

    pub fn is_accepted(&self) -> bool {
        self.status == LabelStatus::Accepted
    }
}

/// Identifier of an image in the store.
pub type ImageId = String;

/// The ordered rectangle labels of one image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageLabels {
    pub id: ImageId,
    pub label_rects: Vec<LabelRect>,
}

impl ImageLabels {
    pub fn new(id: impl Into<ImageId>) -> Self {
        Self {
            id: id.into(),
            label_rects: Vec::new(),
        }
    }

    pub fn find(&self, id: LabelId) -> Option<&LabelRect> {
        self.label_rects.iter().find(|label| label.id == id)
    }

    /// Copy of the collection with `label` appended.
    pub fn with_appended(&self, label: LabelRect) -> Vec<LabelRect> {
        let mut labels = self.label_rects.clone();
        labels.push(label);
        labels
    }

    /// Copy of the collection with the geometry of label `id` replaced.
    ///
    /// Returns `None` when no label has that id.
    pub fn with_rect_replaced(&self, id: LabelId, rect: Rect<Image>) -> Option<Vec<LabelRect>> {
        self.find(id)?;
        Some(
            self.label_rects
                .iter()
                .map(|label| {
                    if label.id == id {
                        LabelRect {
                            rect,
                            ..label.clone()
                        }
                    } else {
                        label.clone()
                    }
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_labels_get_distinct_ids() {
        let a = LabelRect::new(None, Rect::new(0.0, 0.0, 1.0, 1.0));
        let b = LabelRect::new(None, Rect::new(0.0, 0.0, 1.0, 1.0));
        assert_ne!(a.id, b.id);
        assert!(a.is_accepted());
    }

    #[test]
    fn test_with_rect_replaced_keeps_identity() {
        let mut image = ImageLabels::new("img");
        let first = LabelRect::new(Some(1), Rect::new(0.0, 0.0, 10.0, 10.0));
        let second = LabelRect::new(Some(2), Rect::new(5.0, 5.0, 10.0, 10.0));
        image.label_rects = vec![first.clone(), second.clone()];

        let replaced = image
            .with_rect_replaced(second.id, Rect::new(1.0, 2.0, 3.0, 4.0))
            .unwrap();
        assert_eq!(replaced[0], first);
        assert_eq!(replaced[1].id, second.id);
        assert_eq!(replaced[1].label_class_id, Some(2));
        assert_eq!(replaced[1].rect, Rect::new(1.0, 2.0, 3.0, 4.0));
        // The original collection is untouched.
        assert_eq!(image.label_rects[1], second);
    }

    #[test]
    fn test_with_rect_replaced_missing_label() {
        let image = ImageLabels::new("img");
        assert!(image.with_rect_replaced(LabelId::new(), Rect::new(0.0, 0.0, 1.0, 1.0)).is_none());
    }

    #[test]
    fn test_label_json_shape() {
        let label = LabelRect::new(Some(4), Rect::new(1.0, 2.0, 3.0, 4.0));
        let json = serde_json::to_value(&label).unwrap();
        assert_eq!(json["status"], "accepted");
        assert_eq!(json["rect"]["width"], 3.0);
        assert_eq!(json["label_class_id"], 4);
    }
}
