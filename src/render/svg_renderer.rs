use std::fmt::Write as _;

use tracing::trace;

use crate::error::ChartResult;
use crate::interaction::{TOOLTIP_CLASS, TooltipState};
use crate::render::{
    CanvasLayerKind, Color, LayerPrimitives, LineStrokeStyle, RenderFrame, Renderer, TextHAlign,
};

/// Renders frames into standalone SVG documents.
///
/// The tooltip is not part of the SVG; it is emitted as a separate HTML
/// overlay element positioned in surface-local pixels.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    last_svg: String,
    last_tooltip_markup: Option<String>,
}

impl SvgRenderer {
    #[must_use]
    pub fn last_svg(&self) -> &str {
        &self.last_svg
    }

    /// Overlay markup of a visible tooltip from the last render.
    #[must_use]
    pub fn last_tooltip_markup(&self) -> Option<&str> {
        self.last_tooltip_markup.as_deref()
    }

    #[must_use]
    pub fn into_svg(self) -> String {
        self.last_svg
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_svg = frame_to_svg(frame);
        self.last_tooltip_markup = frame.tooltip.visible.then(|| tooltip_markup(&frame.tooltip));
        trace!(bytes = self.last_svg.len(), "svg frame rendered");
        Ok(())
    }
}

fn frame_to_svg(frame: &RenderFrame) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = frame.viewport.width,
        h = frame.viewport.height,
    );
    for layer in &frame.layers {
        if layer.is_empty() {
            continue;
        }
        let _ = writeln!(out, r#"<g class="{}">"#, layer_class(layer.kind));
        write_layer(&mut out, layer);
        out.push_str("</g>\n");
    }
    out.push_str("</svg>\n");
    out
}

fn write_layer(out: &mut String, layer: &LayerPrimitives) {
    for rect in &layer.rects {
        let _ = write!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}""#,
            rect.x, rect.y, rect.width, rect.height
        );
        if rect.corner_radius > 0.0 {
            let _ = write!(out, r#" rx="{}""#, rect.corner_radius);
        }
        write_paint_attr(out, "fill", Some(rect.fill_color));
        write_opacity_attr(out, rect.opacity);
        out.push_str("/>\n");
    }

    for path in &layer.paths {
        let _ = write!(out, r#"<path d="{}""#, path.svg_path_data());
        write_paint_attr(out, "fill", path.fill_color);
        if path.stroke_color.is_some() {
            write_paint_attr(out, "stroke", path.stroke_color);
            let _ = write!(out, r#" stroke-width="{}""#, path.stroke_width);
            write_dash_attr(out, path.stroke_style);
        }
        out.push_str("/>\n");
    }

    for line in &layer.lines {
        let _ = write!(
            out,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke-width="{}""#,
            line.x1, line.y1, line.x2, line.y2, line.stroke_width
        );
        write_paint_attr(out, "stroke", Some(line.color));
        write_dash_attr(out, line.stroke_style);
        write_opacity_attr(out, line.opacity);
        out.push_str("/>\n");
    }

    for circle in &layer.circles {
        let _ = write!(
            out,
            r#"<circle cx="{}" cy="{}" r="{}" stroke-width="{}""#,
            circle.cx, circle.cy, circle.radius, circle.stroke_width
        );
        write_paint_attr(out, "fill", Some(circle.fill_color));
        write_paint_attr(out, "stroke", Some(circle.stroke_color));
        write_opacity_attr(out, circle.opacity);
        out.push_str("/>\n");
    }

    for text in &layer.texts {
        let anchor = match text.h_align {
            TextHAlign::Left => "start",
            TextHAlign::Center => "middle",
            TextHAlign::Right => "end",
        };
        let _ = write!(
            out,
            r#"<text x="{}" y="{}" font-size="{}" text-anchor="{anchor}""#,
            text.x, text.y, text.font_size_px
        );
        write_paint_attr(out, "fill", Some(text.color));
        out.push('>');
        out.push_str(&escape_xml(&text.text));
        out.push_str("</text>\n");
    }
}

fn tooltip_markup(tooltip: &TooltipState) -> String {
    format!(
        r#"<div class="{TOOLTIP_CLASS}" style="position:absolute;left:{}px;top:{}px">{}</div>"#,
        tooltip.x,
        tooltip.y,
        escape_xml(&tooltip.text)
    )
}

fn layer_class(kind: CanvasLayerKind) -> &'static str {
    match kind {
        CanvasLayerKind::Background => "layer-background",
        CanvasLayerKind::Grid => "layer-grid",
        CanvasLayerKind::Series => "layer-series",
        CanvasLayerKind::Overlay => "layer-overlay",
        CanvasLayerKind::Axis => "layer-axis",
    }
}

fn write_paint_attr(out: &mut String, name: &str, color: Option<Color>) {
    match color {
        None => {
            let _ = write!(out, r#" {name}="none""#);
        }
        Some(color) => {
            let _ = write!(out, r#" {name}="{}""#, color.to_hex());
            if color.alpha < 1.0 {
                let _ = write!(out, r#" {name}-opacity="{}""#, color.alpha);
            }
        }
    }
}

fn write_dash_attr(out: &mut String, style: LineStrokeStyle) {
    if let LineStrokeStyle::Dashed { dash_px, gap_px } = style {
        let _ = write!(out, r#" stroke-dasharray="{dash_px} {gap_px}""#);
    }
}

fn write_opacity_attr(out: &mut String, opacity: f64) {
    if opacity < 1.0 {
        let _ = write!(out, r#" opacity="{opacity}""#);
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
