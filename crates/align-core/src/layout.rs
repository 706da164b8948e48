// File: crates/align-core/src/layout.rs
// Summary: Declarative figure layout styling; consumes computed axis specs.

use crate::align::AxisSpec;
use crate::types::{Insets, DEFAULT_FONT_SIZE, DEFAULT_LEGEND_H_ADJUST};

/// Interactive modebar controls disabled on every styled figure.
pub const REMOVED_CONTROLS: [&str; 11] = [
    "pan",
    "zoom",
    "zoomIn",
    "zoomOut",
    "autoScale",
    "resetScale",
    "toggleSpikelines",
    "lasso2d",
    "select2d",
    "hoverClosestCartesian",
    "hoverCompareCartesian",
];

/// Which dimension drives hover label lookup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HoverMode {
    #[default]
    X,
    Y,
    Closest,
}

/// Styling block for one axis of a figure.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisStyle {
    pub title: String,
    pub title_font_size: u32,
    pub show_grid: bool,
    pub zero_line: bool,
    /// Explicit render range; `None` leaves it to the renderer's autorange.
    pub range: Option<(f64, f64)>,
    /// Explicit tick spacing; `None` leaves it to the renderer.
    pub dtick: Option<f64>,
}

/// Horizontal legend centered under the plot.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendStyle {
    pub title: String,
    pub horizontal: bool,
    /// Normalized x of the legend anchor (0.5 = centered).
    pub x: f64,
    /// Normalized y; negative values sit below the plot area.
    pub y: f64,
    /// Single click toggles one trace; double click isolates it.
    pub click_toggles: bool,
}

impl Default for LegendStyle {
    fn default() -> Self {
        Self {
            title: String::new(),
            horizontal: true,
            x: 0.5,
            y: DEFAULT_LEGEND_H_ADJUST,
            click_toggles: true,
        }
    }
}

/// Minimal chart object the styling collaborator operates on. Rendering
/// backends read this; nothing here draws.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Figure {
    pub title: String,
    pub x_axis: AxisStyle,
    pub y_axis: AxisStyle,
    pub secondary_y: Option<SecondaryAxis>,
    pub legend: LegendStyle,
    pub font_family: String,
    pub font_size: u32,
    pub hovermode: HoverMode,
    pub click_select: bool,
    pub autosize: bool,
    pub margin: Insets,
    pub removed_controls: Vec<&'static str>,
}

/// Resolved configuration for the right-hand y-axis. Overlays the primary
/// axis with its own grid hidden, so the aligned primary gridlines serve
/// both series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SecondaryAxis {
    pub range: (f64, f64),
    pub dtick: f64,
    pub show_grid: bool,
}

/// Caller overrides for the right-hand axis. Each unset field falls back to
/// the computed [`AxisSpec`]; explicit values win.
#[derive(Clone, Copy, Debug, Default)]
pub struct SecondaryAxisOptions {
    /// Explicit range; defaults to the aligned `(range_min, range_max)`.
    pub range: Option<(f64, f64)>,
    /// Explicit tick spacing; defaults to the aligned dtick.
    pub dtick: Option<f64>,
}

impl SecondaryAxisOptions {
    pub fn resolve(&self, spec: &AxisSpec) -> SecondaryAxis {
        SecondaryAxis {
            range: self.range.unwrap_or_else(|| spec.range()),
            dtick: self.dtick.unwrap_or(spec.dtick),
            show_grid: false,
        }
    }
}

/// Declarative layout options applied to a [`Figure`].
#[derive(Clone, Debug)]
pub struct LayoutOptions {
    pub plot_title: String,
    pub xaxis_title: String,
    pub yaxis_title: String,
    pub legend_title: String,
    /// Vertical offset of the horizontal legend below the plot area.
    pub legend_h_adjust: f64,
    pub hovermode: HoverMode,
    pub font_size: u32,
    pub margin: Insets,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            plot_title: String::new(),
            xaxis_title: String::new(),
            yaxis_title: String::new(),
            legend_title: String::new(),
            legend_h_adjust: DEFAULT_LEGEND_H_ADJUST,
            hovermode: HoverMode::X,
            font_size: DEFAULT_FONT_SIZE,
            margin: Insets::default(),
        }
    }
}

impl LayoutOptions {
    /// Apply this layout to a figure, returning the updated figure.
    ///
    /// The x-axis grid is hidden and the y-axis zero line suppressed: the
    /// aligned ranges from [`crate::align`] place the shared baseline, so a
    /// separate zero line would double-draw it.
    pub fn apply(&self, mut figure: Figure) -> Figure {
        figure.title = self.plot_title.clone();
        figure.x_axis.title = self.xaxis_title.clone();
        figure.x_axis.title_font_size = self.font_size;
        figure.x_axis.show_grid = false;
        figure.y_axis.title = self.yaxis_title.clone();
        figure.y_axis.title_font_size = self.font_size;
        figure.y_axis.show_grid = true;
        figure.y_axis.zero_line = false;
        figure.legend = LegendStyle {
            title: self.legend_title.clone(),
            y: self.legend_h_adjust,
            ..LegendStyle::default()
        };
        figure.font_family = "arial".to_string();
        figure.font_size = self.font_size;
        figure.hovermode = self.hovermode;
        figure.click_select = true;
        figure.autosize = true;
        figure.margin = self.margin;
        figure.removed_controls = REMOVED_CONTROLS.to_vec();
        figure
    }
}

impl Figure {
    /// Feed aligned axis specs into the figure: the left spec styles the
    /// primary y-axis, the right spec (after caller overrides) configures
    /// the secondary overlay axis.
    pub fn apply_alignment(
        mut self,
        left: &AxisSpec,
        right: &AxisSpec,
        overrides: &SecondaryAxisOptions,
    ) -> Figure {
        self.y_axis.range = Some(left.range());
        self.y_axis.dtick = Some(left.dtick);
        self.secondary_y = Some(overrides.resolve(right));
        self
    }
}
