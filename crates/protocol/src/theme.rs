use serde::{Deserialize, Serialize};

/// Semantic colors for chart chrome, resolved by the renderer.
///
/// Bar fills are not themed: they carry a concrete [`crate::Color`] from
/// the color assignment so every backend shows the same palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeToken {
    BarBorder,
    BarLabel,
    GridLine,
    AxisLine,
    TickLabel,
    AxisTitle,
    ChartTitle,
}
