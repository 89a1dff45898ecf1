//! Label classes (what a rectangle is a label of).

use serde::{Deserialize, Serialize};

use crate::colors::hsv_to_rgb;

/// Identifier of a label class.
pub type LabelClassId = u32;

/// A label class with a display name and color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelClass {
    /// Unique identifier for the class
    pub id: LabelClassId,
    /// Display name of the class
    pub name: String,
    /// RGB color for the class
    pub color: [u8; 3],
}

impl LabelClass {
    /// Create a class with an explicit color.
    pub fn new(id: LabelClassId, name: &str, color: [u8; 3]) -> Self {
        Self {
            id,
            name: name.to_string(),
            color,
        }
    }

    /// Create a class whose color is picked from the id.
    ///
    /// Hues are spaced by the golden angle so neighbouring ids stay distinct.
    pub fn with_generated_color(id: LabelClassId, name: &str) -> Self {
        let hue = (id as f32 * 137.5) % 360.0;
        let (r, g, b) = hsv_to_rgb(hue, 0.7, 0.9);
        let to_byte = |v: f32| (v * 255.0).round().clamp(0.0, 255.0) as u8;
        Self::new(id, name, [to_byte(r), to_byte(g), to_byte(b)])
    }

    pub fn ui_color(&self) -> labelkit_ui::Color {
        let [r, g, b] = self.color;
        labelkit_ui::Color::rgb(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        )
    }
}
