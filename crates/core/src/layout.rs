//! Bar layout: turns validated records plus their row/color assignment
//! into drawable bar descriptors and axis ranges, all in data units.

use gantt_plot_protocol::{AxisExtent, AxisTick, BarDescriptor};

use crate::assign::{Assignment, IdentifierSet};
use crate::model::{IntervalRecord, Timeline, identifier_label};

/// Bars shorter than this many time units are drawn without a label.
pub const LABEL_MIN_DURATION: f64 = 0.5;
/// Factor applied to the latest end time to get the x-axis upper bound.
pub const X_MARGIN: f64 = 1.05;
/// Share of a row's height covered by its bars.
pub const BAR_HEIGHT: f64 = 0.8;

/// Presentation tunables for the layout engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    pub label_min_duration: f64,
    pub x_margin: f64,
    pub bar_height: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            label_min_duration: LABEL_MIN_DURATION,
            x_margin: X_MARGIN,
            bar_height: BAR_HEIGHT,
        }
    }
}

/// One descriptor per record, lazily, in input order.
///
/// Records whose identifier is missing from the assignment cannot come
/// out of [`Assignment::new`]; if one does it is placed on row 0 with the
/// fallback color rather than dropped.
pub fn bars<'a>(
    timeline: &'a Timeline,
    assignment: &'a Assignment,
    options: &'a LayoutOptions,
) -> impl Iterator<Item = BarDescriptor> + 'a {
    timeline
        .records()
        .iter()
        .map(move |record| layout_bar(record, assignment, options))
}

fn layout_bar(
    record: &IntervalRecord,
    assignment: &Assignment,
    options: &LayoutOptions,
) -> BarDescriptor {
    let id = record.identifier;
    let duration = record.duration();
    BarDescriptor {
        identifier: id,
        row: assignment.rows.row(id).unwrap_or_default(),
        start: record.start,
        width: duration,
        color: assignment.colors.color(id),
        label: (duration > options.label_min_duration).then(|| identifier_label(id)),
    }
}

/// `[0, max_end * x_margin]`, or `None` when there is nothing to plot.
pub fn x_extent(timeline: &Timeline, options: &LayoutOptions) -> Option<AxisExtent> {
    timeline
        .max_end()
        .map(|end| AxisExtent::new(0.0, end * options.x_margin))
}

/// One tick per row, positioned at the row index.
pub fn y_ticks(identifiers: &IdentifierSet) -> Vec<AxisTick> {
    identifiers
        .iter()
        .enumerate()
        .map(|(row, id)| AxisTick {
            value: row as f64,
            label: identifier_label(id),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timeline(records: &[(i64, f64, f64)]) -> Timeline {
        Timeline::from_records(
            records
                .iter()
                .map(|&(id, start, end)| IntervalRecord::new(id, start, end)),
        )
        .0
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn x_extent_adds_five_percent() {
        let t = timeline(&[(0, 0.0, 5.0), (1, 5.0, 8.0)]);
        let extent = x_extent(&t, &LayoutOptions::default());
        let extent = extent.unwrap_or(AxisExtent::new(f64::NAN, f64::NAN));
        assert_eq!(extent.min, 0.0);
        assert!(approx(extent.max, 8.4), "max={}", extent.max);
    }

    #[test]
    fn x_extent_of_empty_timeline() {
        assert!(x_extent(&Timeline::default(), &LayoutOptions::default()).is_none());
    }

    #[test]
    fn label_threshold() {
        let t = timeline(&[(3, 0.0, 0.3), (3, 1.0, 2.0), (-1, 2.0, 3.0), (-2, 3.0, 4.0), (4, 4.0, 4.5)]);
        let assignment = Assignment::new(&t);
        let options = LayoutOptions::default();
        let labels: Vec<Option<String>> = bars(&t, &assignment, &options).map(|b| b.label).collect();
        assert_eq!(
            labels,
            vec![
                None,
                Some("P3".to_string()),
                Some("IDLE".to_string()),
                Some("Estado -2".to_string()),
                // exactly at the threshold: not strictly longer
                None,
            ]
        );
    }

    #[test]
    fn one_bar_per_record_in_input_order() {
        let t = timeline(&[(1, 6.0, 10.0), (0, 0.0, 4.0), (1, 4.0, 5.0)]);
        let assignment = Assignment::new(&t);
        let options = LayoutOptions::default();
        let laid: Vec<BarDescriptor> = bars(&t, &assignment, &options).collect();
        assert_eq!(laid.len(), 3);
        assert_eq!(laid[0].start, 6.0);
        assert_eq!(laid[1].start, 0.0);
        assert_eq!(laid[2].start, 4.0);
        assert_eq!(laid[0].row, 1);
        assert_eq!(laid[1].row, 0);
        assert_eq!(laid[2].width, 1.0);
    }

    #[test]
    fn bar_colors_come_from_assignment() {
        let t = timeline(&[(-1, 0.0, 1.0), (0, 1.0, 2.0), (1, 2.0, 3.0)]);
        let assignment = Assignment::new(&t);
        let options = LayoutOptions::default();
        for bar in bars(&t, &assignment, &options) {
            assert_eq!(bar.color, assignment.colors.color(bar.identifier));
        }
    }

    #[test]
    fn y_ticks_follow_rows() {
        let set = IdentifierSet::from_identifiers([1, -1, -3, 0]);
        let ticks = y_ticks(&set);
        let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["Estado -3", "IDLE", "P0", "P1"]);
        let values: Vec<f64> = ticks.iter().map(|t| t.value).collect();
        assert_eq!(values, vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn custom_threshold() {
        let t = timeline(&[(0, 0.0, 0.3)]);
        let assignment = Assignment::new(&t);
        let options = LayoutOptions {
            label_min_duration: 0.1,
            ..LayoutOptions::default()
        };
        let bar = bars(&t, &assignment, &options).next();
        assert_eq!(bar.and_then(|b| b.label), Some("P0".to_string()));
    }
}
