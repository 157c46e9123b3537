pub mod assign;
pub mod chart;
pub mod layout;
pub mod model;
pub mod palette;
pub mod parsers;
pub mod views;

pub use chart::{Chart, ChartError, build_chart, load_chart};
