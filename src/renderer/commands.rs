//! Abstract draw requests
//!
//! The core never draws; it describes a frame as a list of commands and hands
//! it to a [`super::RenderSink`].

use glam::Vec2;

/// RGBA color, components in 0..=1
pub type Color = [f32; 4];

/// Images the sink is expected to know about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Actor,
    PipeTop,
    PipeBottom,
    /// Game-over badge
    YouLost,
}

/// Horizontal anchoring of text at its position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
}

/// One draw request
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Clear the whole viewport
    Clear,
    /// Image at `pos` (top-left) scaled to `size`, rotated about its center
    Sprite {
        sprite: Sprite,
        pos: Vec2,
        size: Vec2,
        rotation_deg: f32,
    },
    /// Solid rectangle
    FillRect { pos: Vec2, size: Vec2, color: Color },
    /// Text anchored on its baseline at `pos`
    Text {
        content: String,
        pos: Vec2,
        font_size: f32,
        color: Color,
        align: TextAlign,
        bold: bool,
    },
}

impl DrawCommand {
    /// Left-aligned regular text
    pub fn text(content: impl Into<String>, pos: Vec2, font_size: f32, color: Color) -> Self {
        DrawCommand::Text {
            content: content.into(),
            pos,
            font_size,
            color,
            align: TextAlign::Left,
            bold: false,
        }
    }

    /// Centered text
    pub fn centered(content: impl Into<String>, pos: Vec2, font_size: f32, color: Color) -> Self {
        DrawCommand::Text {
            content: content.into(),
            pos,
            font_size,
            color,
            align: TextAlign::Center,
            bold: false,
        }
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
    pub const SCORE_FLASH: Color = [1.0, 1.0, 0.0, 1.0]; // Yellow
    pub const OVERLAY: Color = [0.0, 0.0, 0.0, 0.8];
    pub const HEADLINE: Color = [1.0, 0.267, 0.267, 1.0]; // #ff4444
    pub const RETRY: Color = [1.0, 1.0, 0.0, 1.0];
}
