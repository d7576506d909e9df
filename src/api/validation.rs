use crate::core::PlotArea;
use crate::error::{ChartError, ChartResult};

use super::ChartConfig;

pub(super) fn validate_chart_config(config: &ChartConfig) -> ChartResult<()> {
    PlotArea::resolve(config.viewport, config.margins)?;

    for (name, value) in [
        ("mark_radius", config.mark_radius),
        ("mark_label_font_size_px", config.mark_label_font_size_px),
        ("axis_font_size_px", config.axis_font_size_px),
        ("axis_title_font_size_px", config.axis_title_font_size_px),
        ("tooltip_font_size_px", config.tooltip_font_size_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "{name} must be finite and > 0"
            )));
        }
    }

    if !config.mark_opacity.is_finite() || !(0.0..=1.0).contains(&config.mark_opacity) {
        return Err(ChartError::InvalidData(
            "mark_opacity must be finite and in [0, 1]".to_owned(),
        ));
    }
    config.mark_fill.validate()?;

    if config.axis_tick_count == 0 || config.axis_tick_count > 50 {
        return Err(ChartError::InvalidData(
            "axis_tick_count must be in [1, 50]".to_owned(),
        ));
    }

    if !config.transition_duration_ms.is_finite() || config.transition_duration_ms < 0.0 {
        return Err(ChartError::InvalidData(
            "transition_duration_ms must be finite and >= 0".to_owned(),
        ));
    }

    if !config.tooltip_offset.dx.is_finite() || !config.tooltip_offset.dy.is_finite() {
        return Err(ChartError::InvalidData(
            "tooltip offset must be finite".to_owned(),
        ));
    }

    Ok(())
}
