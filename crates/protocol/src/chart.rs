use serde::{Deserialize, Serialize};

use crate::types::Color;

/// Everything a backend needs to draw one interval record.
///
/// `start`/`width` are in data (time) units; `row` indexes the sorted
/// identifier set, 0 being the smallest identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarDescriptor {
    pub identifier: i64,
    pub row: usize,
    pub start: f64,
    pub width: f64,
    pub color: Color,
    pub label: Option<String>,
}

impl BarDescriptor {
    pub fn end(&self) -> f64 {
        self.start + self.width
    }

    /// Horizontal position of the label anchor.
    pub fn center(&self) -> f64 {
        self.start + self.width / 2.0
    }
}

/// Closed data range shown along an axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisExtent {
    pub min: f64,
    pub max: f64,
}

impl AxisExtent {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// A labeled position along an axis, in data units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub label: String,
}

/// Title and axis caption text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartLabels {
    pub title: String,
    pub x_axis: String,
    pub y_axis: String,
}
