mod axis_labels;
mod axis_renderer;
mod chart_config;
mod chart_controller;
mod chart_state;
mod click_dispatcher;
mod layout_helpers;
mod mark_renderer;
mod scale_builder;
mod snapshot;
mod tooltip_controller;
mod validation;

pub use axis_labels::{
    AxisLabelClasses, Y_AXIS_TITLE, axis_label_anchor, build_axis_label_primitives,
    hit_test_axis_labels,
};
pub use axis_renderer::{
    AxisHandle, AxisStyle, build_x_axis_primitives, build_y_axis_primitives, render_x_axis,
};
pub use chart_config::{ChartConfig, TooltipOffset};
pub use chart_controller::ChartController;
pub use chart_state::ChartState;
pub use mark_renderer::{MarkHandle, MarkStyle, build_marks, hit_test_marks, project_marks, render_marks};
pub use scale_builder::{X_DOMAIN_MAX_FACTOR, X_DOMAIN_MIN_FACTOR, build_x_scale, build_y_scale};
pub use snapshot::{
    CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshot, ChartSnapshotJsonContractV1, MarkSnapshot,
};
pub use tooltip_controller::{
    TooltipBinding, TooltipStyle, build_tooltip_primitives, tooltip_text, update_tooltip,
};
