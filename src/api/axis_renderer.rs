use crate::core::{LinearScale, PlotArea, TickValues};
use crate::interaction::ScaleTransition;
use crate::render::{Color, LinePrimitive, TextHAlign, TextPrimitive};

use super::layout_helpers::format_tick_label;

const AXIS_TICK_SIZE_PX: f64 = 6.0;
const AXIS_TICK_PADDING_PX: f64 = 3.0;
const AXIS_STROKE_WIDTH_PX: f64 = 1.0;
/// Ticks are kept while within this distance of the axis line ends.
const AXIS_TICK_VISIBILITY_SLACK_PX: f64 = 0.5;

/// Handle to the animated horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisHandle {
    transition: ScaleTransition,
}

impl AxisHandle {
    #[must_use]
    pub fn new(scale: LinearScale) -> Self {
        Self {
            transition: ScaleTransition::settled(scale),
        }
    }

    /// Scale currently on screen (interpolated while animating).
    #[must_use]
    pub fn displayed_scale(&self) -> LinearScale {
        self.transition.current()
    }

    #[must_use]
    pub fn target_scale(&self) -> LinearScale {
        self.transition.target()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.transition.is_active()
    }

    pub fn step(&mut self, delta_ms: f64) {
        self.transition.step(delta_ms);
    }

    fn transition(&self) -> ScaleTransition {
        self.transition
    }
}

/// Starts animating the axis towards `new_scale` and returns the same handle
/// for chaining.
pub fn render_x_axis(
    axis: &mut AxisHandle,
    new_scale: LinearScale,
    duration_ms: f64,
) -> &mut AxisHandle {
    axis.transition.retarget(new_scale, duration_ms);
    axis
}

/// Visual settings shared by both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisStyle {
    pub tick_count: usize,
    pub font_size_px: f64,
    pub color: Color,
}

/// Bottom axis at the current animation progress.
///
/// Ticks of the target scale slide from their old-scale position and fade
/// in; ticks only present in the old scale slide the same way and fade out.
#[must_use]
pub fn build_x_axis_primitives(
    axis: &AxisHandle,
    plot_area: PlotArea,
    style: AxisStyle,
) -> (Vec<LinePrimitive>, Vec<TextPrimitive>) {
    let transition = axis.transition();
    let source = transition.source();
    let target = transition.target();
    let t = transition.eased_progress();
    let baseline_y = plot_area.origin_y + plot_area.height;

    let mut lines = vec![LinePrimitive::new(
        plot_area.origin_x,
        baseline_y,
        plot_area.origin_x + plot_area.width,
        baseline_y,
        AXIS_STROKE_WIDTH_PX,
        style.color,
    )];
    let mut texts = Vec::new();

    let target_ticks = target.ticks(style.tick_count);
    let source_ticks = if transition.is_active() {
        source.ticks(style.tick_count)
    } else {
        TickValues::new()
    };
    let target_step = target.tick_step(style.tick_count).unwrap_or(1.0);
    let source_step = source.tick_step(style.tick_count).unwrap_or(1.0);

    let entering = target_ticks.iter().map(|value| {
        let opacity = if !transition.is_active() || contains_tick(&source_ticks, *value) {
            1.0
        } else {
            t
        };
        (*value, opacity, target_step)
    });
    let exiting = source_ticks
        .iter()
        .filter(|value| !contains_tick(&target_ticks, **value))
        .map(|value| (*value, 1.0 - t, source_step));

    for (value, opacity, step) in entering.chain(exiting) {
        if opacity <= 0.0 {
            continue;
        }
        let (Ok(from_x), Ok(to_x)) = (source.map(value), target.map(value)) else {
            continue;
        };
        let local_x = from_x + (to_x - from_x) * t;
        if local_x < -AXIS_TICK_VISIBILITY_SLACK_PX
            || local_x > plot_area.width + AXIS_TICK_VISIBILITY_SLACK_PX
        {
            continue;
        }

        let x = plot_area.origin_x + local_x;
        let color = style.color.with_alpha(opacity.clamp(0.0, 1.0));
        lines.push(LinePrimitive::new(
            x,
            baseline_y,
            x,
            baseline_y + AXIS_TICK_SIZE_PX,
            AXIS_STROKE_WIDTH_PX,
            color,
        ));
        texts.push(TextPrimitive::new(
            format_tick_label(value, step),
            x,
            baseline_y + AXIS_TICK_SIZE_PX + AXIS_TICK_PADDING_PX + style.font_size_px * 0.71,
            style.font_size_px,
            color,
            TextHAlign::Center,
        ));
    }

    (lines, texts)
}

/// Static left axis for the vertical scale.
#[must_use]
pub fn build_y_axis_primitives(
    scale: LinearScale,
    plot_area: PlotArea,
    style: AxisStyle,
) -> (Vec<LinePrimitive>, Vec<TextPrimitive>) {
    let axis_x = plot_area.origin_x;
    let mut lines = vec![LinePrimitive::new(
        axis_x,
        plot_area.origin_y,
        axis_x,
        plot_area.origin_y + plot_area.height,
        AXIS_STROKE_WIDTH_PX,
        style.color,
    )];
    let mut texts = Vec::new();
    let step = scale.tick_step(style.tick_count).unwrap_or(1.0);

    for value in scale.ticks(style.tick_count) {
        let Ok(local_y) = scale.map(value) else {
            continue;
        };
        let y = plot_area.origin_y + local_y;
        lines.push(LinePrimitive::new(
            axis_x - AXIS_TICK_SIZE_PX,
            y,
            axis_x,
            y,
            AXIS_STROKE_WIDTH_PX,
            style.color,
        ));
        texts.push(TextPrimitive::new(
            format_tick_label(value, step),
            axis_x - AXIS_TICK_SIZE_PX - AXIS_TICK_PADDING_PX,
            y + style.font_size_px * 0.32,
            style.font_size_px,
            style.color,
            TextHAlign::Right,
        ));
    }

    (lines, texts)
}

fn contains_tick(ticks: &[f64], value: f64) -> bool {
    ticks
        .iter()
        .any(|tick| (tick - value).abs() <= 1e-9 * value.abs().max(1.0))
}
