use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{Dimension, Margins, PlotArea, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

use super::validation::validate_chart_config;

/// Offset of the tooltip box relative to the hovered mark center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipOffset {
    pub dx: f64,
    pub dy: f64,
}

impl Default for TooltipOffset {
    fn default() -> Self {
        Self {
            dx: 20.0,
            dy: -40.0,
        }
    }
}

/// Public chart bootstrap configuration.
///
/// Serializable so hosts can keep chart setup in a JSON file instead of an
/// ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub viewport: Viewport,
    pub margins: Margins,
    #[serde(default = "default_initial_dimension")]
    pub initial_dimension: Dimension,
    #[serde(default = "default_mark_radius")]
    pub mark_radius: f64,
    #[serde(default = "default_mark_fill")]
    pub mark_fill: Color,
    #[serde(default = "default_mark_opacity")]
    pub mark_opacity: f64,
    #[serde(default = "default_mark_label_font_size_px")]
    pub mark_label_font_size_px: f64,
    #[serde(default = "default_axis_tick_count")]
    pub axis_tick_count: usize,
    #[serde(default = "default_axis_font_size_px")]
    pub axis_font_size_px: f64,
    #[serde(default = "default_axis_title_font_size_px")]
    pub axis_title_font_size_px: f64,
    #[serde(default = "default_transition_duration_ms")]
    pub transition_duration_ms: f64,
    #[serde(default)]
    pub tooltip_offset: TooltipOffset,
    #[serde(default = "default_tooltip_font_size_px")]
    pub tooltip_font_size_px: f64,
}

impl ChartConfig {
    /// Creates a config with default styling for the given surface.
    #[must_use]
    pub fn new(viewport: Viewport, margins: Margins) -> Self {
        Self {
            viewport,
            margins,
            initial_dimension: default_initial_dimension(),
            mark_radius: default_mark_radius(),
            mark_fill: default_mark_fill(),
            mark_opacity: default_mark_opacity(),
            mark_label_font_size_px: default_mark_label_font_size_px(),
            axis_tick_count: default_axis_tick_count(),
            axis_font_size_px: default_axis_font_size_px(),
            axis_title_font_size_px: default_axis_title_font_size_px(),
            transition_duration_ms: default_transition_duration_ms(),
            tooltip_offset: TooltipOffset::default(),
            tooltip_font_size_px: default_tooltip_font_size_px(),
        }
    }

    #[must_use]
    pub fn with_initial_dimension(mut self, dimension: Dimension) -> Self {
        self.initial_dimension = dimension;
        self
    }

    #[must_use]
    pub fn with_transition_duration_ms(mut self, duration_ms: f64) -> Self {
        self.transition_duration_ms = duration_ms;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        validate_chart_config(self)
    }

    pub fn plot_area(&self) -> ChartResult<PlotArea> {
        PlotArea::resolve(self.viewport, self.margins)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_path(path: impl AsRef<Path>) -> ChartResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            ChartError::InvalidData(format!(
                "failed to read chart config `{}`: {e}",
                path.display()
            ))
        })?;
        Self::from_json_str(&raw)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart config: {e}")))
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::new(Viewport::new(900, 600), Margins::default())
    }
}

fn default_initial_dimension() -> Dimension {
    Dimension::Poverty
}

fn default_mark_radius() -> f64 {
    15.0
}

fn default_mark_fill() -> Color {
    Color::GREEN
}

fn default_mark_opacity() -> f64 {
    0.5
}

fn default_mark_label_font_size_px() -> f64 {
    12.0
}

fn default_axis_tick_count() -> usize {
    10
}

fn default_axis_font_size_px() -> f64 {
    10.0
}

fn default_axis_title_font_size_px() -> f64 {
    16.0
}

fn default_transition_duration_ms() -> f64 {
    1000.0
}

fn default_tooltip_font_size_px() -> f64 {
    12.0
}
