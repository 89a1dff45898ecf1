use serde::{Deserialize, Serialize};

use crate::{Point, Rectangle};

/// A draw command to be executed by the host backend.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rectangle,
        color: Color,
    },
    StrokeRect {
        rect: Rectangle,
        color: Color,
        width: f32,
    },
    DrawText {
        text: String,
        position: Point,
        color: Color,
        size: f32,
    },
}

/// Records the draw commands of a single frame.
///
/// Engines draw into a frame; the host clears it at the start of each full
/// render and replays [`Frame::commands`] afterwards.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    draw_commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all commands from the previous frame.
    pub fn clear(&mut self) {
        log::trace!("Frame: dropping {} draw commands", self.draw_commands.len());
        self.draw_commands.clear();
    }

    /// Draw a filled rectangle.
    pub fn fill_rect(&mut self, rect: Rectangle, color: Color) {
        self.draw_commands.push(DrawCommand::FillRect { rect, color });
    }

    /// Draw a rectangle outline.
    pub fn stroke_rect(&mut self, rect: Rectangle, color: Color, width: f32) {
        self.draw_commands
            .push(DrawCommand::StrokeRect { rect, color, width });
    }

    /// Draw text.
    pub fn draw_text(&mut self, text: &str, position: Point, color: Color, size: f32) {
        self.draw_commands.push(DrawCommand::DrawText {
            text: text.to_string(),
            position,
            color,
            size,
        });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.draw_commands
    }

    pub fn is_empty(&self) -> bool {
        self.draw_commands.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Same colour with a different alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}
