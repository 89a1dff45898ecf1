//! Color selection for drawn labels.

use labelkit_ui::Color;

use crate::config::ColorSettings;
use crate::model::LabelClass;

/// Convert HSV to RGB.
///
/// `h` is in degrees (0-360), `s` and `v` in 0.0-1.0. Returns RGB in 0.0-1.0.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (f32, f32, f32) {
    let c = v * s;
    let sector = (h.rem_euclid(360.0) / 60.0).floor() as u8;
    let x = c * (1.0 - ((h.rem_euclid(360.0) / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match sector {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    (r + m, g + m, b + m)
}

/// Outline color of a label.
///
/// Active and highlighted labels use the highlight color; everything else is
/// drawn in its class color, or the default color for unknown classes.
pub fn label_line_color(
    class: Option<&LabelClass>,
    emphasized: bool,
    colors: &ColorSettings,
) -> Color {
    if emphasized {
        return colors.active_line;
    }
    class.map_or(colors.default_line, LabelClass::ui_color)
}
