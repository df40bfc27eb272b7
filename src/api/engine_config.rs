use serde::{Deserialize, Serialize};

use crate::core::{Margin, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::HoverConfig;
use crate::render::Palette;

const DEFAULT_WIDTH: u32 = 1100;
const SINGLE_HEIGHT: u32 = 500;
const MULTI_HEIGHT: u32 = 450;

/// Public engine bootstrap configuration.
///
/// Surface dimensions, margins, tick density, marker/stroke sizing, tooltip
/// offsets, and the series palette all live here instead of module-level
/// constants, so headless tests can run with alternate sizes and palettes.
/// The type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub margin: Margin,
    #[serde(default = "default_tick_count")]
    pub tick_count: usize,
    #[serde(default = "default_marker_radius")]
    pub marker_radius: f64,
    #[serde(default = "default_line_stroke_width")]
    pub line_stroke_width: f64,
    #[serde(default)]
    pub hover: HoverConfig,
    #[serde(default)]
    pub palette: Palette,
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            margin: Margin::default(),
            tick_count: default_tick_count(),
            marker_radius: default_marker_radius(),
            line_stroke_width: default_line_stroke_width(),
            hover: HoverConfig::default(),
            palette: Palette::default(),
        }
    }

    /// Default surface for single-series charts (1100x500 minus margins).
    #[must_use]
    pub fn single() -> Self {
        Self::new(DEFAULT_WIDTH, SINGLE_HEIGHT)
    }

    /// Default surface for multi-series charts (1100x450 minus margins).
    #[must_use]
    pub fn multi() -> Self {
        Self::new(DEFAULT_WIDTH, MULTI_HEIGHT)
    }

    #[must_use]
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    #[must_use]
    pub fn with_marker_radius(mut self, marker_radius: f64) -> Self {
        self.marker_radius = marker_radius;
        self
    }

    #[must_use]
    pub fn with_line_stroke_width(mut self, line_stroke_width: f64) -> Self {
        self.line_stroke_width = line_stroke_width;
        self
    }

    #[must_use]
    pub fn with_hover(mut self, hover: HoverConfig) -> Self {
        self.hover = hover;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    /// Plot area width: surface width minus horizontal margins.
    #[must_use]
    pub fn plot_width(&self) -> f64 {
        f64::from(self.width) - self.margin.left - self.margin.right
    }

    /// Plot area height: surface height minus vertical margins.
    #[must_use]
    pub fn plot_height(&self) -> f64 {
        f64::from(self.height) - self.margin.top - self.margin.bottom
    }

    pub fn validate(&self) -> ChartResult<()> {
        let viewport = self.viewport();
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        for (name, value) in [
            ("margin.top", self.margin.top),
            ("margin.right", self.margin.right),
            ("margin.bottom", self.margin.bottom),
            ("margin.left", self.margin.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        if self.plot_width() <= 0.0 || self.plot_height() <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "margins leave no plot area".to_owned(),
            ));
        }
        if self.tick_count == 0 {
            return Err(ChartError::InvalidConfig(
                "tick count must be >= 1".to_owned(),
            ));
        }
        if !self.marker_radius.is_finite() || self.marker_radius <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "marker radius must be finite and > 0".to_owned(),
            ));
        }
        if !self.line_stroke_width.is_finite() || self.line_stroke_width <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        if !self.hover.offset_left.is_finite() || !self.hover.offset_top.is_finite() {
            return Err(ChartError::InvalidConfig(
                "hover offsets must be finite".to_owned(),
            ));
        }
        self.palette.validate()
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_tick_count() -> usize {
    10
}

fn default_marker_radius() -> f64 {
    4.0
}

fn default_line_stroke_width() -> f64 {
    2.0
}
