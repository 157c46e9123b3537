use gantt_plot_protocol::{
    AxisExtent, Point, Rect, RenderCommand, TextAlign, ThemeToken, Viewport,
};

use super::time_axis::x_ticks;
use crate::chart::Chart;

/// Rows above the plot: title, then the y-axis caption.
const TOP_MARGIN: f64 = 2.0;
/// Rows below the plot: axis line, tick labels, x-axis caption.
const BOTTOM_MARGIN: f64 = 3.0;
const RIGHT_MARGIN: f64 = 2.0;
/// Minimum distance between x-axis tick labels.
const MIN_TICK_SPACING: f64 = 10.0;
/// Time span drawn when the chart's x extent is empty or inverted.
const FALLBACK_SPAN: f64 = 1.0;

/// Map a chart onto `viewport` as a flat list of render commands.
///
/// Units are one per terminal cell (or any unit of similar scale). Row 0
/// sits at the bottom of the plot. Draw order: title, gridlines, bars in
/// input order, axes, tick labels, axis captions. Bars are clipped to
/// the plot area. An empty x extent (every record ends at or before 0)
/// is drawn one time unit wide. Returns nothing when the viewport is
/// too small to hold a plot area.
pub fn render_gantt(chart: &Chart, viewport: &Viewport) -> Vec<RenderCommand> {
    let rows = chart.row_count();
    let span = chart.x_extent.span();
    let extent = if span.is_finite() && span > 0.0 {
        chart.x_extent
    } else {
        AxisExtent::new(chart.x_extent.min, chart.x_extent.min + FALLBACK_SPAN)
    };

    let gutter = chart
        .y_ticks
        .iter()
        .map(|t| t.label.chars().count())
        .max()
        .unwrap_or(0) as f64
        + 2.0;
    let x0 = gutter;
    let x1 = viewport.width - RIGHT_MARGIN;
    let y0 = TOP_MARGIN;
    let y1 = viewport.height - BOTTOM_MARGIN;

    if rows == 0 || !extent.min.is_finite() || x1 <= x0 || y1 <= y0 {
        return Vec::new();
    }

    let plot_width = x1 - x0;
    let x_scale = plot_width / extent.span();
    let x_of = |t: f64| x0 + (t - extent.min) * x_scale;
    let pitch = (y1 - y0) / rows as f64;
    let row_center = |row: f64| y1 - (row + 0.5) * pitch;
    let axis_x = x0 - 1.0;

    let ticks = x_ticks(&extent, plot_width, MIN_TICK_SPACING);
    let mut commands =
        Vec::with_capacity(chart.bars.len() + chart.y_ticks.len() + ticks.len() * 2 + 6);

    commands.push(RenderCommand::DrawText {
        position: Point::new(viewport.width / 2.0, 0.0),
        text: chart.labels.title.clone(),
        color: ThemeToken::ChartTitle,
        align: TextAlign::Center,
    });
    commands.push(RenderCommand::DrawText {
        position: Point::new(0.0, 1.0),
        text: chart.labels.y_axis.clone(),
        color: ThemeToken::AxisTitle,
        align: TextAlign::Left,
    });

    for tick in &ticks {
        let x = x_of(tick.value);
        commands.push(RenderCommand::DrawLine {
            from: Point::new(x, y0),
            to: Point::new(x, y1),
            color: ThemeToken::GridLine,
            dashed: true,
        });
    }

    let bar_h = pitch * chart.bar_height;
    for bar in &chart.bars {
        let left = x_of(bar.start).clamp(x0, x1);
        let right = x_of(bar.end()).clamp(x0, x1);
        // Zero-length records inside the extent stay; bars clipped down to
        // nothing go.
        let outside = bar.end() < extent.min || bar.start > extent.max;
        if outside || (right == left && bar.width > 0.0) {
            continue;
        }
        let center = row_center(bar.row as f64);
        commands.push(RenderCommand::DrawRect {
            rect: Rect::new(left, center - bar_h / 2.0, right - left, bar_h),
            fill: bar.color,
            border_color: Some(ThemeToken::BarBorder),
            label: bar.label.clone(),
        });
    }

    commands.push(RenderCommand::DrawLine {
        from: Point::new(axis_x, y1),
        to: Point::new(x1, y1),
        color: ThemeToken::AxisLine,
        dashed: false,
    });
    commands.push(RenderCommand::DrawLine {
        from: Point::new(axis_x, y0),
        to: Point::new(axis_x, y1),
        color: ThemeToken::AxisLine,
        dashed: false,
    });

    for tick in &chart.y_ticks {
        commands.push(RenderCommand::DrawText {
            position: Point::new(axis_x, row_center(tick.value)),
            text: tick.label.clone(),
            color: ThemeToken::TickLabel,
            align: TextAlign::Right,
        });
    }
    for tick in ticks {
        commands.push(RenderCommand::DrawText {
            position: Point::new(x_of(tick.value), y1 + 1.0),
            text: tick.label,
            color: ThemeToken::TickLabel,
            align: TextAlign::Center,
        });
    }

    commands.push(RenderCommand::DrawText {
        position: Point::new((x0 + x1) / 2.0, y1 + 2.0),
        text: chart.labels.x_axis.clone(),
        color: ThemeToken::AxisTitle,
        align: TextAlign::Center,
    });

    commands
}
