//! Chart assembly: the pipeline from a timeline (or a file) to a complete,
//! backend-neutral chart description.

use std::path::Path;

use gantt_plot_protocol::{AxisExtent, AxisTick, BarDescriptor, ChartLabels};
use serde::Serialize;
use thiserror::Error;

use crate::assign::{Assignment, ColorAssignment, IdentifierSet};
use crate::layout::{self, LayoutOptions};
use crate::model::{RejectedRecord, Timeline};
use crate::parsers::{self, InputError};

pub const X_AXIS_LABEL: &str = "Tempo";
pub const Y_AXIS_LABEL: &str = "Processo / Estado";

#[derive(Debug, Error)]
pub enum ChartError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("{name}: no interval records to plot ({rejected} rejected)")]
    Empty { name: String, rejected: usize },
}

/// Everything a renderer needs to draw one Gantt chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub labels: ChartLabels,
    pub identifiers: IdentifierSet,
    pub colors: ColorAssignment,
    /// In input order; later bars paint over earlier ones.
    pub bars: Vec<BarDescriptor>,
    pub x_extent: AxisExtent,
    pub y_ticks: Vec<AxisTick>,
    pub bar_height: f64,
}

impl Chart {
    pub fn row_count(&self) -> usize {
        self.identifiers.len()
    }
}

pub fn chart_title(name: &str) -> String {
    format!("Gráfico de Gantt - Simulação ({name})")
}

/// Lay out `timeline` as a chart titled after `name`.
///
/// An empty timeline short-circuits before any assignment or layout runs.
pub fn build_chart(
    timeline: &Timeline,
    name: &str,
    options: &LayoutOptions,
) -> Result<Chart, ChartError> {
    let Some(x_extent) = layout::x_extent(timeline, options) else {
        return Err(ChartError::Empty {
            name: name.to_string(),
            rejected: 0,
        });
    };

    let assignment = Assignment::new(timeline);
    let bars: Vec<BarDescriptor> = layout::bars(timeline, &assignment, options).collect();
    let y_ticks = layout::y_ticks(&assignment.identifiers);
    tracing::debug!(bars = bars.len(), x_max = x_extent.max, "laid out chart");

    Ok(Chart {
        labels: ChartLabels {
            title: chart_title(name),
            x_axis: X_AXIS_LABEL.to_string(),
            y_axis: Y_AXIS_LABEL.to_string(),
        },
        identifiers: assignment.identifiers,
        colors: assignment.colors,
        bars,
        x_extent,
        y_ticks,
        bar_height: options.bar_height,
    })
}

/// Read `path` and build its chart with default options.
///
/// Rejected records are logged while reading and counted in
/// [`ChartError::Empty`] if nothing else is left.
pub fn load_chart(path: &Path) -> Result<Chart, ChartError> {
    let (timeline, rejected) = parsers::read_timeline_file(path)?;
    chart_from_input(&timeline, &rejected, &path.display().to_string())
}

fn chart_from_input(
    timeline: &Timeline,
    rejected: &[RejectedRecord],
    name: &str,
) -> Result<Chart, ChartError> {
    build_chart(timeline, name, &LayoutOptions::default()).map_err(|err| match err {
        ChartError::Empty { name, .. } => ChartError::Empty {
            name,
            rejected: rejected.len(),
        },
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::IntervalRecord;

    #[test]
    fn empty_timeline_short_circuits() {
        let err = build_chart(&Timeline::default(), "empty.csv", &LayoutOptions::default())
            .unwrap_err();
        assert!(matches!(err, ChartError::Empty { rejected: 0, .. }), "{err}");
    }

    #[test]
    fn all_rejected_reports_count() {
        let (timeline, rejected) = Timeline::from_records([
            IntervalRecord::new(0, 5.0, 1.0),
            IntervalRecord::new(1, 9.0, 2.0),
        ]);
        let err = chart_from_input(&timeline, &rejected, "bad.csv").unwrap_err();
        match err {
            ChartError::Empty { name, rejected } => {
                assert_eq!(name, "bad.csv");
                assert_eq!(rejected, 2);
            }
            other => panic!("expected Empty, got {other}"),
        }
    }

    #[test]
    fn labels_and_title() {
        let (timeline, _) = Timeline::from_records([IntervalRecord::new(0, 0.0, 2.0)]);
        let chart = build_chart(&timeline, "gantt_data_fcfs.csv", &LayoutOptions::default())
            .unwrap();
        assert_eq!(
            chart.labels.title,
            "Gráfico de Gantt - Simulação (gantt_data_fcfs.csv)"
        );
        assert_eq!(chart.labels.x_axis, "Tempo");
        assert_eq!(chart.labels.y_axis, "Processo / Estado");
        assert_eq!(chart.row_count(), 1);
    }

    #[test]
    fn chart_serializes() {
        let (timeline, _) = Timeline::from_records([IntervalRecord::new(-1, 0.0, 2.0)]);
        let chart = build_chart(&timeline, "x", &LayoutOptions::default()).unwrap();
        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["bars"][0]["label"], "IDLE");
        assert_eq!(json["y_ticks"][0]["label"], "IDLE");
    }
}
