use serde::{Deserialize, Serialize};

use crate::core::{Dimension, Viewport};
use crate::interaction::HoverChange;

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub viewport: Viewport,
    pub chosen_x_axis: Dimension,
    pub x_domain: (f64, f64),
    pub y_domain: (f64, f64),
    pub records_len: usize,
    pub hovered_mark: Option<usize>,
    pub transitions_active: bool,
}

/// Event stream exposed to plugins.
///
/// A label click that changes the selection emits, in order:
/// `DimensionChanged`, `ScaleRebuilt`, `AxisRetargeted`, `MarksRetargeted`,
/// `TooltipsReattached`, `LabelClassesToggled`. A tooltip visible at click
/// time gets its `TooltipHidden` right before `TooltipsReattached`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PluginEvent {
    DataLoaded { records_len: usize },
    DimensionChanged { from: Dimension, to: Dimension },
    ScaleRebuilt { domain_start: f64, domain_end: f64 },
    AxisRetargeted,
    MarksRetargeted { marks_len: usize },
    TooltipsReattached { dimension: Dimension, generation: u64 },
    LabelClassesToggled { active: Dimension },
    TooltipShown { index: usize },
    TooltipHidden { index: usize },
    TransitionsSettled,
    Rendered,
}

impl From<HoverChange> for PluginEvent {
    fn from(change: HoverChange) -> Self {
        match change {
            HoverChange::Entered { index } => Self::TooltipShown { index },
            HoverChange::Left { index } => Self::TooltipHidden { index },
        }
    }
}

/// Extension hook interface for bounded custom logic.
///
/// Plugins observe events and read controller context without mutating
/// chart state directly.
pub trait ChartPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: PluginEvent, context: PluginContext);
}
