use std::fmt::Write;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, RenderFrame, Renderer, TextHAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub lines_drawn: usize,
    pub circles_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// Serializes each frame into a standalone SVG document.
///
/// The last document is kept in memory; hosts read it with `document` or
/// persist it with `write_to`.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
    last_stats: SvgRenderStats,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> ChartResult<()> {
        let path = path.as_ref();
        fs::write(path, &self.document).map_err(|err| {
            ChartError::InvalidData(format!("failed to write svg `{}`: {err}", path.display()))
        })
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        let (document, stats) = build_svg_document(frame).map_err(map_fmt_error)?;
        debug!(
            lines = stats.lines_drawn,
            circles = stats.circles_drawn,
            texts = stats.texts_drawn,
            bytes = document.len(),
            "rendered svg frame"
        );
        self.document = document;
        self.last_stats = stats;
        Ok(())
    }
}

fn build_svg_document(frame: &RenderFrame) -> Result<(String, SvgRenderStats), std::fmt::Error> {
    let mut svg = String::new();
    let mut stats = SvgRenderStats::default();
    let width = frame.viewport.width;
    let height = frame.viewport.height;

    write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
    )?;
    svg.push_str(
        "<style>.active{font-weight:bold;cursor:pointer}.inactive{fill:#aaaaaa;cursor:pointer}</style>",
    );

    for line in &frame.lines {
        write!(
            svg,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"{}/>",
            fmt_num(line.x1),
            fmt_num(line.y1),
            fmt_num(line.x2),
            fmt_num(line.y2),
            line.color.to_hex(),
            fmt_num(line.stroke_width),
            opacity_attr("stroke-opacity", line.color),
        )?;
        stats.lines_drawn += 1;
    }

    for circle in &frame.circles {
        write!(
            svg,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"{}/>",
            fmt_num(circle.cx),
            fmt_num(circle.cy),
            fmt_num(circle.radius),
            circle.fill_color.to_hex(),
            opacity_attr("opacity", circle.fill_color),
        )?;
        stats.circles_drawn += 1;
    }

    for rect in &frame.rects {
        write!(
            svg,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"{}/>",
            fmt_num(rect.x),
            fmt_num(rect.y),
            fmt_num(rect.width),
            fmt_num(rect.height),
            rect.fill_color.to_hex(),
            opacity_attr("fill-opacity", rect.fill_color),
        )?;
        stats.rects_drawn += 1;
    }

    for text in &frame.texts {
        let anchor = match text.h_align {
            TextHAlign::Left => "start",
            TextHAlign::Center => "middle",
            TextHAlign::Right => "end",
        };
        write!(
            svg,
            "<text x=\"{}\" y=\"{}\" font-size=\"{}px\" text-anchor=\"{anchor}\" fill=\"{}\"{}",
            fmt_num(text.x),
            fmt_num(text.y),
            fmt_num(text.font_size_px),
            text.color.to_hex(),
            opacity_attr("fill-opacity", text.color),
        )?;
        if text.rotation_deg != 0.0 {
            write!(
                svg,
                " transform=\"rotate({} {} {})\"",
                fmt_num(text.rotation_deg),
                fmt_num(text.x),
                fmt_num(text.y)
            )?;
        }
        if let Some(class) = text.class {
            write!(svg, " class=\"{}\"", class.as_str())?;
        }
        write!(svg, ">{}</text>", escape_xml(&text.text))?;
        stats.texts_drawn += 1;
    }

    svg.push_str("</svg>");
    Ok((svg, stats))
}

fn opacity_attr(name: &str, color: Color) -> String {
    if color.alpha >= 1.0 {
        String::new()
    } else {
        format!(" {name}=\"{}\"", fmt_num(color.alpha))
    }
}

/// Two-decimal output with trailing zeros dropped.
fn fmt_num(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        return "0".to_owned();
    }
    rounded.to_string()
}

fn escape_xml(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn map_fmt_error(err: std::fmt::Error) -> ChartError {
    ChartError::InvalidData(format!("failed to serialize svg: {err}"))
}
