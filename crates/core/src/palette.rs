//! Perceptually ordered colormaps, sampled deterministically.
//!
//! Colors come from linear interpolation between key colors rather than a
//! full lookup table; at the handful of samples a chart needs the result
//! is indistinguishable from the reference map.

use gantt_plot_protocol::Color;

/// Maps a scalar in `[0, 1]` to a color.
pub trait Colormap {
    fn map(&self, value: f64) -> Color;

    /// `count` colors at evenly spaced positions from 0 to 1 inclusive.
    ///
    /// A single sample sits at 0. Asking for zero samples yields none.
    fn sample(&self, count: usize) -> Vec<Color> {
        match count {
            0 => Vec::new(),
            1 => vec![self.map(0.0)],
            n => {
                let last = (n - 1) as f64;
                (0..n).map(|i| self.map(i as f64 / last)).collect()
            }
        }
    }
}

/// Viridis: dark purple -> blue -> teal -> green -> yellow.
#[derive(Debug, Clone, Copy, Default)]
pub struct Viridis;

const VIRIDIS_KEYS: &[(f64, [u8; 3])] = &[
    (0.000, [68, 1, 84]),
    (0.125, [71, 44, 122]),
    (0.250, [59, 81, 139]),
    (0.375, [44, 113, 142]),
    (0.500, [33, 145, 140]),
    (0.625, [39, 173, 129]),
    (0.750, [92, 200, 99]),
    (0.875, [170, 220, 50]),
    (1.000, [253, 231, 37]),
];

impl Colormap for Viridis {
    fn map(&self, value: f64) -> Color {
        interpolate(VIRIDIS_KEYS, value)
    }
}

fn interpolate(keys: &[(f64, [u8; 3])], value: f64) -> Color {
    let v = if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    };

    let upper = keys
        .iter()
        .position(|&(t, _)| t >= v)
        .unwrap_or(keys.len() - 1);
    if upper == 0 {
        let [r, g, b] = keys[0].1;
        return Color::rgb(r, g, b);
    }

    let (t0, c0) = keys[upper - 1];
    let (t1, c1) = keys[upper];
    let f = (v - t0) / (t1 - t0);
    let lerp = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * f).round() as u8;

    Color::rgb(lerp(c0[0], c1[0]), lerp(c0[1], c1[1]), lerp(c0[2], c1[2]))
}
