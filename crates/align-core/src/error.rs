// File: crates/align-core/src/error.rs
// Summary: Input-validation error taxonomy for the alignment pass.

use thiserror::Error;

use crate::types::AxisSide;

/// Failures detected while validating the two input series.
///
/// All variants are synchronous input-validation errors: the computation is
/// pure, so nothing is retried or partially applied. The caller must supply
/// non-empty, finite series with a non-zero extent.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum AlignError {
    #[error("{side} series is empty; min/max are undefined")]
    EmptyInput { side: AxisSide },

    #[error("{side} series spans zero extent; no tick interval exists")]
    DegenerateSpan { side: AxisSide },

    #[error("{side} series contains a non-finite value ({value})")]
    NonFiniteInput { side: AxisSide, value: f64 },
}
