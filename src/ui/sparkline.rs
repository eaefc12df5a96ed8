//! Sparkline glyph and trend computation.
//!
//! Pure logic, no terminal types; scenes map a [`SparkTrend`] to a color.
//! Degenerate histories (empty, single point, all-equal values) always get a
//! defined fallback; there is no value range to divide by in those cases and
//! none is used.

use crate::constants::{FLAT_EPSILON, TREND_SLOPE_FLOOR};

/// Block glyph ramp, lowest to highest.
pub const GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Direction of the trailing window, for coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SparkTrend {
    Rising,
    Falling,
    Flat,
}

/// Render the trailing `width` points of `values` as a glyph string plus its
/// trend. Histories shorter than the window render what exists; flat windows
/// render the lowest glyph uniformly and read as [`SparkTrend::Flat`].
pub fn sparkline(values: &[f64], width: usize) -> (String, SparkTrend) {
    let start = values.len().saturating_sub(width);
    let vals = &values[start..];
    if vals.is_empty() {
        return (String::new(), SparkTrend::Flat);
    }

    let lo = vals.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = vals.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = hi - lo;

    if span < FLAT_EPSILON {
        return (
            std::iter::repeat(GLYPHS[0]).take(vals.len()).collect(),
            SparkTrend::Flat,
        );
    }

    let top = (GLYPHS.len() - 1) as f64;
    let glyphs: String = vals
        .iter()
        .map(|v| {
            let idx = (((v - lo) / span) * top) as usize;
            GLYPHS[idx.min(GLYPHS.len() - 1)]
        })
        .collect();

    // A window only counts as trending when its end-to-end slope beats the
    // typical per-step wiggle.
    let slope = vals[vals.len() - 1] - vals[0];
    let avg_step = if vals.len() > 1 {
        vals.windows(2).map(|w| (w[1] - w[0]).abs()).sum::<f64>() / (vals.len() - 1) as f64
    } else {
        0.0
    };

    let trend = if slope.abs() < TREND_SLOPE_FLOOR.max(0.5 * avg_step) {
        SparkTrend::Flat
    } else if slope > 0.0 {
        SparkTrend::Rising
    } else {
        SparkTrend::Falling
    };

    (glyphs, trend)
}
