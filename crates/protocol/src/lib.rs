pub mod chart;
pub mod commands;
pub mod theme;
pub mod types;

pub use chart::{AxisExtent, AxisTick, BarDescriptor, ChartLabels};
pub use commands::{RenderCommand, TextAlign};
pub use theme::ThemeToken;
pub use types::{Color, Point, Rect, Viewport};
