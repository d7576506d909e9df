use tracing::trace;

use crate::core::{Dataset, Dimension, LinearScale, PlotArea};
use crate::error::ChartResult;
use crate::interaction::{HoverChange, HoverTracker};

use super::axis_labels::AxisLabelClasses;
use super::axis_renderer::AxisHandle;
use super::mark_renderer::{MarkHandle, build_marks, hit_test_marks};
use super::scale_builder::{build_x_scale, build_y_scale};
use super::tooltip_controller::{TooltipBinding, update_tooltip};

/// Mutable chart context: current selection, scales and visual handles.
///
/// Created once per loaded dataset and mutated only through label clicks,
/// hover updates and time steps.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartState {
    pub(super) chosen_x_axis: Dimension,
    pub(super) x_scale: LinearScale,
    pub(super) y_scale: LinearScale,
    pub(super) axis: AxisHandle,
    pub(super) marks: Vec<MarkHandle>,
    pub(super) tooltip: TooltipBinding,
    pub(super) hover: HoverTracker,
    pub(super) label_classes: AxisLabelClasses,
}

impl ChartState {
    /// Builds settled scales, axis and marks for the initial selection.
    pub fn initialize(
        dataset: &Dataset,
        plot_area: PlotArea,
        dimension: Dimension,
    ) -> ChartResult<Self> {
        let x_scale = build_x_scale(dataset.records(), dimension, plot_area)?;
        let y_scale = build_y_scale(dataset.records(), plot_area)?;
        let marks = build_marks(dataset, x_scale, y_scale, dimension)?;
        let mut hover = HoverTracker::new(marks.len());
        let (tooltip, _) = update_tooltip(None, dimension, &mut hover, marks.len());

        Ok(Self {
            chosen_x_axis: dimension,
            x_scale,
            y_scale,
            axis: AxisHandle::new(x_scale),
            marks,
            tooltip,
            hover,
            label_classes: AxisLabelClasses::new(dimension),
        })
    }

    #[must_use]
    pub fn chosen_x_axis(&self) -> Dimension {
        self.chosen_x_axis
    }

    #[must_use]
    pub fn x_scale(&self) -> LinearScale {
        self.x_scale
    }

    #[must_use]
    pub fn y_scale(&self) -> LinearScale {
        self.y_scale
    }

    #[must_use]
    pub fn axis(&self) -> &AxisHandle {
        &self.axis
    }

    #[must_use]
    pub fn marks(&self) -> &[MarkHandle] {
        &self.marks
    }

    #[must_use]
    pub fn tooltip(&self) -> TooltipBinding {
        self.tooltip
    }

    #[must_use]
    pub fn hovered_mark(&self) -> Option<usize> {
        self.hover.hovered()
    }

    #[must_use]
    pub fn label_classes(&self) -> AxisLabelClasses {
        self.label_classes
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.axis.is_animating() || self.marks.iter().any(MarkHandle::is_animating)
    }

    /// Advances every in-flight transition.
    ///
    /// Returns `true` when this step finished the last running transition.
    pub fn step(&mut self, delta_ms: f64) -> bool {
        let was_animating = self.is_animating();
        self.axis.step(delta_ms);
        for mark in &mut self.marks {
            mark.step(delta_ms);
        }
        was_animating && !self.is_animating()
    }

    /// Moves hover to the mark under the plot-local point, if any.
    pub fn hover_at(&mut self, local_x: f64, local_y: f64, radius: f64) -> Vec<HoverChange> {
        let target = hit_test_marks(&self.marks, local_x, local_y, radius);
        let changes = self.hover.update(target);
        if !changes.is_empty() {
            trace!(?changes, "hover changed");
        }
        changes
    }

    pub fn clear_hover(&mut self) -> Vec<HoverChange> {
        self.hover.on_pointer_leave()
    }
}
