use serde::{Deserialize, Serialize};

use crate::core::{Dimension, PlotArea, Record, Viewport};
use crate::interaction::{HoverChange, HoverTracker};
use crate::render::{Color, RectPrimitive, TextClass, TextHAlign, TextPrimitive};

use super::TooltipOffset;
use super::layout_helpers::{clamp_box_to_surface, estimate_label_text_width_px};

const TOOLTIP_PADDING_PX: f64 = 6.0;

/// Tooltip attachment for the current set of marks.
///
/// A new binding (with a bumped generation) is created after every mark
/// re-render; hover state never survives a reattach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipBinding {
    pub dimension: Dimension,
    pub generation: u64,
}

impl TooltipBinding {
    #[must_use]
    pub fn text_for(&self, record: &Record) -> String {
        tooltip_text(record, self.dimension)
    }
}

/// `"{state}: {Label}: {value}"`, e.g. `"Ohio: Obesity: 31.2"`.
#[must_use]
pub fn tooltip_text(record: &Record, dimension: Dimension) -> String {
    format!(
        "{}: {}: {}",
        record.state,
        dimension.tooltip_label(),
        record.value(dimension)
    )
}

/// Reattaches tooltips for `dimension` and resets every mark to idle.
///
/// The returned hover edges hide a tooltip that was visible before the
/// reattach.
pub fn update_tooltip(
    previous: Option<TooltipBinding>,
    dimension: Dimension,
    hover: &mut HoverTracker,
    marks_len: usize,
) -> (TooltipBinding, Vec<HoverChange>) {
    let changes = hover.reset(marks_len);
    let binding = TooltipBinding {
        dimension,
        generation: previous.map_or(0, |binding| binding.generation + 1),
    };
    (binding, changes)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipStyle {
    pub font_size_px: f64,
    pub offset: TooltipOffset,
    pub background: Color,
    pub text_color: Color,
}

/// Tooltip box and text for a hovered mark at plot-local `(cx, cy)`.
#[must_use]
pub fn build_tooltip_primitives(
    binding: TooltipBinding,
    record: &Record,
    mark_position: (f64, f64),
    plot_area: PlotArea,
    viewport: Viewport,
    style: TooltipStyle,
) -> (RectPrimitive, TextPrimitive) {
    let text = binding.text_for(record);
    let width = estimate_label_text_width_px(&text, style.font_size_px) + 2.0 * TOOLTIP_PADDING_PX;
    let height = style.font_size_px + 2.0 * TOOLTIP_PADDING_PX;

    let (anchor_x, anchor_y) = plot_area.to_surface(mark_position.0, mark_position.1);
    let (left, top) = clamp_box_to_surface(
        anchor_x + style.offset.dx,
        anchor_y + style.offset.dy,
        width,
        height,
        viewport,
    );

    let rect = RectPrimitive::new(left, top, width, height, style.background);
    let label = TextPrimitive::new(
        text,
        left + TOOLTIP_PADDING_PX,
        top + TOOLTIP_PADDING_PX + style.font_size_px * 0.8,
        style.font_size_px,
        style.text_color,
        TextHAlign::Left,
    )
    .with_class(TextClass::Tooltip);
    (rect, label)
}
