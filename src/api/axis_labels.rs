use serde::{Deserialize, Serialize};

use crate::core::{Dimension, Margins, PlotArea};
use crate::render::{Color, TextClass, TextHAlign, TextPrimitive};

use super::layout_helpers::estimate_label_text_width_px;

/// Label group sits this far below the plot bottom.
const LABEL_GROUP_OFFSET_PX: f64 = 20.0;
/// Vertical distance between stacked x-axis labels.
const LABEL_ROW_SPACING_PX: f64 = 20.0;

pub const Y_AXIS_TITLE: &str = "Lacks Healthcare (%)";

/// Active/inactive classes of the clickable x-axis labels.
///
/// Exactly one label is `Active` at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisLabelClasses {
    active: Dimension,
}

impl AxisLabelClasses {
    #[must_use]
    pub fn new(active: Dimension) -> Self {
        Self { active }
    }

    #[must_use]
    pub fn active(self) -> Dimension {
        self.active
    }

    #[must_use]
    pub fn class_of(self, dimension: Dimension) -> TextClass {
        if dimension == self.active {
            TextClass::Active
        } else {
            TextClass::Inactive
        }
    }

    /// Marks `active` as the selected label and every other one inactive.
    pub fn toggle(&mut self, active: Dimension) {
        self.active = active;
    }
}

/// Baseline anchor of a clickable label in surface coordinates.
#[must_use]
pub fn axis_label_anchor(dimension: Dimension, plot_area: PlotArea) -> (f64, f64) {
    let row = match dimension {
        Dimension::Poverty => 1.0,
        Dimension::Obesity => 2.0,
    };
    plot_area.to_surface(
        plot_area.width / 2.0,
        plot_area.height + LABEL_GROUP_OFFSET_PX + row * LABEL_ROW_SPACING_PX,
    )
}

/// Clickable x labels plus the rotated y-axis title.
#[must_use]
pub fn build_axis_label_primitives(
    classes: AxisLabelClasses,
    plot_area: PlotArea,
    margins: Margins,
    font_size_px: f64,
) -> Vec<TextPrimitive> {
    let mut texts: Vec<TextPrimitive> = Dimension::ALL
        .iter()
        .map(|dimension| {
            let (x, y) = axis_label_anchor(*dimension, plot_area);
            TextPrimitive::new(
                dimension.axis_label(),
                x,
                y,
                font_size_px,
                label_color(classes.class_of(*dimension)),
                TextHAlign::Center,
            )
            .with_class(classes.class_of(*dimension))
        })
        .collect();

    let title_x = plot_area.origin_x - margins.left + font_size_px;
    let title_y = plot_area.origin_y + plot_area.height / 2.0;
    texts.push(
        TextPrimitive::new(
            Y_AXIS_TITLE,
            title_x,
            title_y,
            font_size_px,
            Color::BLACK,
            TextHAlign::Center,
        )
        .with_rotation(-90.0)
        .with_class(TextClass::AxisTitle),
    );
    texts
}

/// Label whose estimated text box contains the surface point.
///
/// Box height is capped at the row spacing so stacked labels never overlap.
#[must_use]
pub fn hit_test_axis_labels(
    plot_area: PlotArea,
    font_size_px: f64,
    x: f64,
    y: f64,
) -> Option<Dimension> {
    Dimension::ALL.into_iter().find(|dimension| {
        let (anchor_x, anchor_y) = axis_label_anchor(*dimension, plot_area);
        let half_width = estimate_label_text_width_px(dimension.axis_label(), font_size_px) / 2.0;
        let height = (font_size_px * 1.25).min(LABEL_ROW_SPACING_PX);
        let top = anchor_y - height * 0.8;
        (anchor_x - half_width..=anchor_x + half_width).contains(&x)
            && (top..top + height).contains(&y)
    })
}

fn label_color(class: TextClass) -> Color {
    match class {
        TextClass::Inactive => Color::rgb(0.67, 0.67, 0.67),
        _ => Color::BLACK,
    }
}
