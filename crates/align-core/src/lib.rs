// File: crates/align-core/src/lib.rs
// Summary: Core library entry point; exports dual-axis alignment and layout styling API.

pub mod align;
pub mod error;
pub mod layout;
pub mod types;

pub use align::{align, AlignmentResult, AxisSpec};
pub use error::AlignError;
pub use layout::{Figure, HoverMode, LayoutOptions, SecondaryAxis, SecondaryAxisOptions};
pub use types::{AxisSide, Insets};
