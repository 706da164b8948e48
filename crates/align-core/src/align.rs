// File: crates/align-core/src/align.rs
// Summary: Dual-axis range/tick alignment so both y-axes share gridlines and baseline.

use crate::error::AlignError;
use crate::types::AxisSide;

/// Padding added to each range, in tick-ratio units, so extreme data points
/// never sit flush against the plot edge.
const EDGE_PAD: f64 = 0.1;

/// Range and tick spacing to apply to one y-axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisSpec {
    pub range_min: f64,
    pub range_max: f64,
    pub dtick: f64,
}

impl AxisSpec {
    /// Inclusive render range as a pair.
    pub fn range(&self) -> (f64, f64) {
        (self.range_min, self.range_max)
    }

    /// Number of tick intervals the range covers. Equal for both axes of an
    /// [`AlignmentResult`], which is what makes the gridlines line up.
    pub fn intervals(&self) -> f64 {
        (self.range_max - self.range_min) / self.dtick
    }
}

/// Aligned axis specs for the left (primary) and right (secondary) y-axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AlignmentResult {
    pub left: AxisSpec,
    pub right: AxisSpec,
}

/// Per-series summary from the validation/min-max pass.
struct Extent {
    min: f64,
    max: f64,
    span: f64,
    dtick: f64,
    /// span / dtick: tick intervals the data occupies, >= 1 by construction.
    ratio: f64,
}

/// Compute synchronized ranges and tick spacing for two series plotted on
/// independent left/right y-axes.
///
/// The two axes carry unrelated units, so their ranges cannot be aligned by
/// equalizing values. Instead each axis gets a "nice" tick interval derived
/// from its own data, and both ranges are stretched to cover the same number
/// of tick intervals on the positive and negative side. Gridlines then land
/// at matching heights and the zero baselines coincide.
///
/// A negative minimum on either series forces a negative extent on both axes
/// so the shared baseline stays off the plot floor. When both series are
/// entirely non-negative, both ranges start at exactly zero.
///
/// Errors if either series is empty, contains a non-finite value, or spans
/// zero extent (e.g. all zeros).
pub fn align(series_a: &[f64], series_b: &[f64]) -> Result<AlignmentResult, AlignError> {
    let a = extent_of(series_a, AxisSide::Left)?;
    let b = extent_of(series_b, AxisSide::Right)?;

    // The more granular axis dictates how many intervals both must show.
    let global_ratio = a.ratio.max(b.ratio);

    let negative_ratio = |e: &Extent| {
        if e.min < 0.0 { e.min.abs() / e.span * global_ratio } else { 0.0 }
    };
    let has_negative = a.min < 0.0 || b.min < 0.0;
    let global_negative = negative_ratio(&a).max(negative_ratio(&b)) + EDGE_PAD;

    let positive_ratio = |e: &Extent| e.max.abs() / e.span * global_ratio;
    let global_positive = positive_ratio(&a).max(positive_ratio(&b)) + EDGE_PAD;

    let spec_for = |e: &Extent| AxisSpec {
        range_min: if has_negative { -global_negative * e.dtick } else { 0.0 },
        range_max: global_positive * e.dtick,
        dtick: e.dtick,
    };

    Ok(AlignmentResult { left: spec_for(&a), right: spec_for(&b) })
}

fn extent_of(values: &[f64], side: AxisSide) -> Result<Extent, AlignError> {
    if values.is_empty() {
        return Err(AlignError::EmptyInput { side });
    }
    if let Some(&bad) = values.iter().find(|v| !v.is_finite()) {
        return Err(AlignError::NonFiniteInput { side, value: bad });
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
    }

    // Non-negative data is spanned from zero; a negative excursion widens the
    // span to the full spread.
    let span = if min < 0.0 { max - min } else { max };
    let dtick = nice_dtick(span).ok_or(AlignError::DegenerateSpan { side })?;

    Ok(Extent { min, max, span, dtick, ratio: span / dtick })
}

/// Derive a human-friendly tick interval from a span: the span's leading
/// decimal digit times its power-of-ten magnitude. `437.0` gives `400.0`,
/// `60.0` gives `60.0`, `0.25` gives `0.2`.
///
/// Returns `None` for `span <= 0`, where the magnitude is undefined.
pub fn nice_dtick(span: f64) -> Option<f64> {
    if !(span > 0.0) || !span.is_finite() {
        return None;
    }
    let magnitude = 10f64.powf(span.log10().floor());
    let leading = (span / magnitude).floor();
    Some(leading * magnitude)
}
