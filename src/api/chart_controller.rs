use std::path::Path;

use tracing::{debug, error, trace, warn};

use crate::core::{Dataset, Dimension, PlotArea};
use crate::error::{ChartError, ChartResult};
use crate::extensions::{ChartPlugin, PluginContext, PluginEvent};
use crate::interaction::HoverChange;
use crate::render::{Color, RenderFrame, Renderer};

use super::axis_labels::{build_axis_label_primitives, hit_test_axis_labels};
use super::axis_renderer::{AxisStyle, build_x_axis_primitives, build_y_axis_primitives};
use super::mark_renderer::{MarkStyle, project_marks};
use super::tooltip_controller::{TooltipStyle, build_tooltip_primitives};
use super::{ChartConfig, ChartState};

/// Main orchestration facade consumed by host applications.
///
/// Owns the dataset, the mutable `ChartState` and the renderer. Every
/// re-render side effect goes through this type.
pub struct ChartController<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartConfig,
    pub(super) plot_area: PlotArea,
    pub(super) dataset: Dataset,
    pub(super) state: ChartState,
    plugins: Vec<Box<dyn ChartPlugin>>,
}

impl<R: Renderer> ChartController<R> {
    /// Creates a controller with settled scales and marks for `dataset`.
    pub fn new(renderer: R, config: ChartConfig, dataset: Dataset) -> ChartResult<Self> {
        config.validate()?;
        let plot_area = config.plot_area()?;
        let state = ChartState::initialize(&dataset, plot_area, config.initial_dimension)?;
        debug!(
            records = dataset.len(),
            dimension = %config.initial_dimension,
            "chart controller initialized"
        );

        Ok(Self {
            renderer,
            config,
            plot_area,
            dataset,
            state,
            plugins: Vec::new(),
        })
    }

    /// Loads the CSV at `path` and builds the chart.
    ///
    /// Load failures are logged and returned; no chart is built.
    pub fn from_csv_path(renderer: R, config: ChartConfig, path: impl AsRef<Path>) -> ChartResult<Self> {
        let dataset = Dataset::from_csv_path(path).inspect_err(|err| {
            error!(error = %err, "dataset load failed; chart not rendered");
        })?;
        Self::new(renderer, config, dataset)
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.plot_area
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn state(&self) -> &ChartState {
        &self.state
    }

    #[must_use]
    pub fn chosen_x_axis(&self) -> Dimension {
        self.state.chosen_x_axis()
    }

    /// Registers a plugin with a unique identifier and announces the loaded
    /// dataset to it.
    pub fn register_plugin(&mut self, mut plugin: Box<dyn ChartPlugin>) -> ChartResult<()> {
        let plugin_id = plugin.id().to_owned();
        if plugin_id.is_empty() {
            return Err(ChartError::InvalidData(
                "plugin id must not be empty".to_owned(),
            ));
        }
        if self.plugins.iter().any(|entry| entry.id() == plugin_id) {
            return Err(ChartError::InvalidData(format!(
                "plugin with id `{plugin_id}` is already registered"
            )));
        }
        plugin.on_event(
            PluginEvent::DataLoaded {
                records_len: self.dataset.len(),
            },
            self.plugin_context(),
        );
        self.plugins.push(plugin);
        Ok(())
    }

    /// Unregisters a plugin by id. Returns `true` when removed.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        if let Some(position) = self.plugins.iter().position(|entry| entry.id() == plugin_id) {
            self.plugins.remove(position);
            return true;
        }
        false
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    /// Dispatches a click on the label bound to `dimension`.
    ///
    /// Returns `false` when the label was already active (no re-render).
    pub fn click_label(&mut self, dimension: Dimension) -> ChartResult<bool> {
        let events = self.state.select_dimension(
            &self.dataset,
            self.plot_area,
            dimension,
            self.config.transition_duration_ms,
        )?;
        if events.is_empty() {
            trace!(%dimension, "ignoring click on active label");
            return Ok(false);
        }
        for event in events {
            self.emit_plugin_event(event);
        }
        Ok(true)
    }

    /// Dispatches a click at surface coordinates; clicks outside the axis
    /// labels are ignored.
    pub fn click_at(&mut self, x: f64, y: f64) -> ChartResult<bool> {
        match hit_test_axis_labels(self.plot_area, self.config.axis_title_font_size_px, x, y) {
            Some(dimension) => self.click_label(dimension),
            None => Ok(false),
        }
    }

    /// Handles pointer movement in surface coordinates.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if !x.is_finite() || !y.is_finite() {
            warn!(x, y, "ignoring non-finite pointer position");
            return;
        }
        let (local_x, local_y) = self.plot_area.to_local(x, y);
        let changes = self
            .state
            .hover_at(local_x, local_y, self.config.mark_radius);
        self.emit_hover_changes(changes);
    }

    /// Marks the pointer as outside the chart surface.
    pub fn pointer_leave(&mut self) {
        let changes = self.state.clear_hover();
        self.emit_hover_changes(changes);
    }

    /// Tooltip text for the hovered mark, if any.
    #[must_use]
    pub fn tooltip_text(&self) -> Option<String> {
        let index = self.state.hovered_mark()?;
        let record = self.dataset.get(index)?;
        Some(self.state.tooltip().text_for(record))
    }

    /// Advances in-flight transitions by `delta_ms`.
    pub fn advance(&mut self, delta_ms: f64) {
        if !delta_ms.is_finite() || delta_ms < 0.0 {
            warn!(delta_ms, "ignoring invalid transition step");
            return;
        }
        if self.state.step(delta_ms) {
            self.emit_plugin_event(PluginEvent::TransitionsSettled);
        }
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.state.is_animating()
    }

    /// Materializes the current visual state as a backend-agnostic frame.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let config = &self.config;
        let mut frame = RenderFrame::new(config.viewport);
        let axis_style = AxisStyle {
            tick_count: config.axis_tick_count,
            font_size_px: config.axis_font_size_px,
            color: Color::BLACK,
        };

        let (x_lines, x_texts) = build_x_axis_primitives(self.state.axis(), self.plot_area, axis_style);
        let (y_lines, y_texts) =
            build_y_axis_primitives(self.state.y_scale(), self.plot_area, axis_style);
        frame.lines.extend(x_lines);
        frame.lines.extend(y_lines);
        frame.texts.extend(x_texts);
        frame.texts.extend(y_texts);

        let mark_style = MarkStyle {
            radius: config.mark_radius,
            fill: config.mark_fill,
            opacity: config.mark_opacity,
            label_font_size_px: config.mark_label_font_size_px,
            label_color: Color::BLACK,
        };
        let (circles, labels) =
            project_marks(self.state.marks(), &self.dataset, self.plot_area, mark_style);
        frame.circles.extend(circles);
        frame.texts.extend(labels);

        frame.texts.extend(build_axis_label_primitives(
            self.state.label_classes(),
            self.plot_area,
            config.margins,
            config.axis_title_font_size_px,
        ));

        if let Some(index) = self.state.hovered_mark() {
            let mark = self.state.marks().get(index);
            let record = self.dataset.get(index);
            if let (Some(mark), Some(record)) = (mark, record) {
                let (rect, text) = build_tooltip_primitives(
                    self.state.tooltip(),
                    record,
                    (mark.cx(), mark.cy()),
                    self.plot_area,
                    config.viewport,
                    TooltipStyle {
                        font_size_px: config.tooltip_font_size_px,
                        offset: config.tooltip_offset,
                        background: Color::BLACK,
                        text_color: Color::WHITE,
                    },
                );
                frame.rects.push(rect);
                frame.texts.push(text);
            }
        }

        Ok(frame)
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)?;
        self.emit_plugin_event(PluginEvent::Rendered);
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn plugin_context(&self) -> PluginContext {
        PluginContext {
            viewport: self.config.viewport,
            chosen_x_axis: self.state.chosen_x_axis(),
            x_domain: self.state.x_scale().domain(),
            y_domain: self.state.y_scale().domain(),
            records_len: self.dataset.len(),
            hovered_mark: self.state.hovered_mark(),
            transitions_active: self.state.is_animating(),
        }
    }

    fn emit_plugin_event(&mut self, event: PluginEvent) {
        let context = self.plugin_context();
        for plugin in &mut self.plugins {
            plugin.on_event(event, context);
        }
    }

    fn emit_hover_changes(&mut self, changes: Vec<HoverChange>) {
        for change in changes {
            self.emit_plugin_event(PluginEvent::from(change));
        }
    }
}
