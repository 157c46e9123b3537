use serde::{Deserialize, Serialize};

use crate::theme::ThemeToken;
use crate::types::{Color, Point, Rect};

/// A single, stateless render instruction.
///
/// Views emit a `Vec<RenderCommand>` already mapped onto a
/// [`crate::Viewport`]. Renderers consume the list front to back; later
/// commands paint over earlier ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RenderCommand {
    /// Draw a filled rectangle with an optional outline and a label
    /// centered inside it.
    DrawRect {
        rect: Rect,
        fill: Color,
        border_color: Option<ThemeToken>,
        label: Option<String>,
    },

    /// Draw a text string anchored at a position.
    DrawText {
        position: Point,
        text: String,
        color: ThemeToken,
        align: TextAlign,
    },

    /// Draw a line segment.
    DrawLine {
        from: Point,
        to: Point,
        color: ThemeToken,
        dashed: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}
