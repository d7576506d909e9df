use tracing::debug;

use crate::core::{Dataset, Dimension, PlotArea};
use crate::error::ChartResult;
use crate::extensions::PluginEvent;

use super::ChartState;
use super::axis_renderer::render_x_axis;
use super::mark_renderer::render_marks;
use super::scale_builder::build_x_scale;
use super::tooltip_controller::update_tooltip;

impl ChartState {
    /// Handles a click on the label bound to `target`.
    ///
    /// Clicking the active label is a no-op and returns no events. Otherwise
    /// the re-render runs in fixed order: scale, axis, marks, tooltip, label
    /// classes. The returned events mirror that order; a tooltip visible
    /// before the click is hidden just ahead of `TooltipsReattached`. On
    /// error the state is left untouched.
    pub fn select_dimension(
        &mut self,
        dataset: &Dataset,
        plot_area: PlotArea,
        target: Dimension,
        duration_ms: f64,
    ) -> ChartResult<Vec<PluginEvent>> {
        if target == self.chosen_x_axis {
            return Ok(Vec::new());
        }

        let new_scale = build_x_scale(dataset.records(), target, plot_area)?;
        let mut marks = self.marks.clone();
        render_marks(&mut marks, dataset, new_scale, target, duration_ms)?;

        let previous = self.chosen_x_axis;
        debug!(from = %previous, to = %target, "switching x axis");
        let (domain_start, domain_end) = new_scale.domain();
        let mut events = vec![
            PluginEvent::DimensionChanged {
                from: previous,
                to: target,
            },
            PluginEvent::ScaleRebuilt {
                domain_start,
                domain_end,
            },
        ];

        self.chosen_x_axis = target;
        self.x_scale = new_scale;

        render_x_axis(&mut self.axis, new_scale, duration_ms);
        events.push(PluginEvent::AxisRetargeted);

        self.marks = marks;
        events.push(PluginEvent::MarksRetargeted {
            marks_len: self.marks.len(),
        });

        let (tooltip, hover_changes) =
            update_tooltip(Some(self.tooltip), target, &mut self.hover, self.marks.len());
        self.tooltip = tooltip;
        events.extend(hover_changes.into_iter().map(PluginEvent::from));
        events.push(PluginEvent::TooltipsReattached {
            dimension: target,
            generation: self.tooltip.generation,
        });

        self.label_classes.toggle(target);
        events.push(PluginEvent::LabelClassesToggled { active: target });

        Ok(events)
    }
}
