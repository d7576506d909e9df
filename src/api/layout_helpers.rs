use crate::core::Viewport;

pub(super) fn estimate_label_text_width_px(text: &str, font_size_px: f64) -> f64 {
    // Keep this estimate deterministic and backend-independent.
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' => 0.34,
            '-' | '+' | '%' | '(' | ')' => 0.42,
            ':' => 0.30,
            ' ' => 0.33,
            _ => 0.58,
        }
    });
    (units * font_size_px).max(font_size_px)
}

/// Formats a tick value with as many decimals as the tick step needs.
pub(super) fn format_tick_label(value: f64, step: f64) -> String {
    let decimals = if step.is_finite() && step > 0.0 {
        (-step.log10().floor()).max(0.0) as usize
    } else {
        0
    };
    let text = format!("{value:.decimals$}");
    // Avoid "-0" for values that round to zero.
    if text.trim_start_matches('-').chars().all(|ch| ch == '0' || ch == '.') {
        return text.trim_start_matches('-').to_owned();
    }
    text
}

/// Shifts a box with top-left `(x, y)` so it stays on the drawing surface.
pub(super) fn clamp_box_to_surface(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    viewport: Viewport,
) -> (f64, f64) {
    let surface_width = f64::from(viewport.width);
    let surface_height = f64::from(viewport.height);
    let max_x = (surface_width - width).max(0.0);
    let max_y = (surface_height - height).max(0.0);
    (x.clamp(0.0, max_x), y.clamp(0.0, max_y))
}
