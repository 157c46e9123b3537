use gantt_plot_protocol::{AxisExtent, AxisTick};

/// Choose evenly spaced x-axis ticks for `extent` drawn `plot_width`
/// units wide, keeping at least `min_spacing` units between ticks.
///
/// Steps are 1, 2 or 5 times a power of ten. Ticks start at the first
/// step multiple at or after `extent.min` and never pass `extent.max`.
pub fn x_ticks(extent: &AxisExtent, plot_width: f64, min_spacing: f64) -> Vec<AxisTick> {
    let span = extent.span();
    if !span.is_finite() || span <= 0.0 || plot_width <= 0.0 || min_spacing <= 0.0 {
        return Vec::new();
    }

    let target_count = (plot_width / min_spacing).floor().max(1.0);
    let step = nice_step(span / target_count);

    let first = (extent.min / step).ceil();
    let tolerance = step * 1e-9;
    (0_u32..)
        .map(|i| (first + f64::from(i)) * step)
        .take_while(|&value| value <= extent.max + tolerance)
        .map(|value| AxisTick {
            value,
            label: format_tick(value, step),
        })
        .collect()
}

/// Smallest "nice" step (1, 2 or 5 × 10ⁿ) that is at least `raw`.
fn nice_step(raw: f64) -> f64 {
    let magnitude = 10.0_f64.powf(raw.log10().floor());
    for multiple in [1.0, 2.0, 5.0] {
        let step = multiple * magnitude;
        if step >= raw {
            return step;
        }
    }
    10.0 * magnitude
}

/// Print whole steps without decimals and fractional steps with just
/// enough decimals to tell neighbouring ticks apart.
fn format_tick(value: f64, step: f64) -> String {
    if step >= 1.0 {
        format!("{value:.0}")
    } else {
        let decimals = (-step.log10().floor()).max(0.0) as usize;
        format!("{value:.decimals$}")
    }
}
