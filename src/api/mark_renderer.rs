use ordered_float::OrderedFloat;

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{Dataset, Dimension, LinearScale, PlotArea};
use crate::error::ChartResult;
use crate::interaction::Transition;
use crate::render::{CirclePrimitive, Color, TextHAlign, TextPrimitive};

/// Handle to one rendered mark (circle + abbreviation label).
///
/// `cy` is fixed at load; only `cx` animates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkHandle {
    pub index: usize,
    cx: Transition,
    cy: f64,
}

impl MarkHandle {
    /// Horizontal position currently on screen, plot-local.
    #[must_use]
    pub fn cx(&self) -> f64 {
        self.cx.current()
    }

    #[must_use]
    pub fn target_cx(&self) -> f64 {
        self.cx.target()
    }

    #[must_use]
    pub fn cy(&self) -> f64 {
        self.cy
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.cx.is_active()
    }

    pub fn step(&mut self, delta_ms: f64) {
        self.cx.step(delta_ms);
    }
}

/// Creates settled marks for every record.
pub fn build_marks(
    dataset: &Dataset,
    x_scale: LinearScale,
    y_scale: LinearScale,
    dimension: Dimension,
) -> ChartResult<Vec<MarkHandle>> {
    dataset
        .records()
        .iter()
        .enumerate()
        .map(|(index, record)| -> ChartResult<MarkHandle> {
            Ok(MarkHandle {
                index,
                cx: Transition::settled(x_scale.map(record.value(dimension))?),
                cy: y_scale.map(record.healthcare)?,
            })
        })
        .collect()
}

/// Retargets every mark's horizontal position to `scale(record[dimension])`.
pub fn render_marks<'a>(
    marks: &'a mut [MarkHandle],
    dataset: &Dataset,
    scale: LinearScale,
    dimension: Dimension,
    duration_ms: f64,
) -> ChartResult<&'a mut [MarkHandle]> {
    for mark in marks.iter_mut() {
        let Some(record) = dataset.get(mark.index) else {
            continue;
        };
        let target = scale.map(record.value(dimension))?;
        mark.cx.retarget(target, duration_ms);
    }
    Ok(marks)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkStyle {
    pub radius: f64,
    pub fill: Color,
    pub opacity: f64,
    pub label_font_size_px: f64,
    pub label_color: Color,
}

/// Projects marks into circle and text primitives in surface coordinates.
#[must_use]
pub fn project_marks(
    marks: &[MarkHandle],
    dataset: &Dataset,
    plot_area: PlotArea,
    style: MarkStyle,
) -> (Vec<CirclePrimitive>, Vec<TextPrimitive>) {
    let project = |mark: &MarkHandle| {
        let record = dataset.get(mark.index)?;
        let (x, y) = plot_area.to_surface(mark.cx(), mark.cy());
        let circle = CirclePrimitive::new(x, y, style.radius, style.fill.with_alpha(style.opacity));
        let label = TextPrimitive::new(
            record.abbr.clone(),
            x,
            // Nudge the baseline so the abbreviation sits centered in the circle.
            y + style.label_font_size_px * 0.35,
            style.label_font_size_px,
            style.label_color,
            TextHAlign::Center,
        );
        Some((circle, label))
    };

    #[cfg(feature = "parallel-projection")]
    {
        return marks.par_iter().filter_map(project).unzip();
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        marks.iter().filter_map(project).unzip()
    }
}

/// Nearest mark whose circle contains the plot-local point.
#[must_use]
pub fn hit_test_marks(marks: &[MarkHandle], local_x: f64, local_y: f64, radius: f64) -> Option<usize> {
    if !local_x.is_finite() || !local_y.is_finite() {
        return None;
    }

    marks
        .iter()
        .filter_map(|mark| {
            let distance = (mark.cx() - local_x).hypot(mark.cy() - local_y);
            (distance <= radius).then_some((OrderedFloat(distance), mark.index))
        })
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, index)| index)
}
