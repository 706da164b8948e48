// File: crates/align-core/src/types.rs
// Summary: Shared types and constants (axis sides, margins, defaults).

use std::fmt;

/// Default font size, in points, for titles and labels.
pub const DEFAULT_FONT_SIZE: u32 = 12;

/// Default vertical offset placing the horizontal legend below the plot area.
pub const DEFAULT_LEGEND_H_ADJUST: f64 = -0.2;

/// Which of the two y-axes a series feeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisSide {
    Left,
    Right,
}

impl fmt::Display for AxisSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisSide::Left => write!(f, "left"),
            AxisSide::Right => write!(f, "right"),
        }
    }
}

/// Plot margins, in pixels, plus padding between the plot area and labels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
    pub pad: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32, pad: u32) -> Self {
        Self { left, right, top, bottom, pad }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(50, 50, 20, 20, 4)
    }
}
