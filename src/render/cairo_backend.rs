use cairo::{Context, Format, ImageSurface};
use kurbo::PathEl;
use pango::FontDescription;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::error::{ChartError, ChartResult};
use crate::interaction::TooltipState;
use crate::render::{
    Color, LayerPrimitives, LineStrokeStyle, RectPrimitive, RenderFrame, Renderer, TextHAlign,
};

const TOOLTIP_FONT_SIZE_PX: f64 = 13.0;
const TOOLTIP_PADDING_PX: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub rects_drawn: usize,
    pub paths_drawn: usize,
    pub lines_drawn: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
    pub tooltip_drawn: bool,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// This renderer supports two modes:
/// - offscreen image-surface rendering through `Renderer::render`
/// - in-place rendering on an external Cairo context through
///   `CairoContextRenderer`
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        apply_color(context, self.clear_color, 1.0);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();
        for layer in &frame.layers {
            draw_layer(context, layer, &mut stats)?;
        }
        if frame.tooltip.visible {
            draw_tooltip(
                context,
                &frame.tooltip,
                frame.surface.origin_x,
                frame.surface.origin_y,
            )?;
            stats.tooltip_drawn = true;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

fn draw_layer(
    context: &Context,
    layer: &LayerPrimitives,
    stats: &mut CairoRenderStats,
) -> ChartResult<()> {
    for rect in &layer.rects {
        append_rect_path(context, *rect);
        apply_color(context, rect.fill_color, rect.opacity);
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
        stats.rects_drawn += 1;
    }

    for path in &layer.paths {
        context.new_path();
        for element in path.path.elements() {
            match *element {
                PathEl::MoveTo(p) => context.move_to(p.x, p.y),
                PathEl::LineTo(p) => context.line_to(p.x, p.y),
                PathEl::QuadTo(c, p) => {
                    // Cairo has no quadratic segments; elevate to cubic.
                    let (x0, y0) = context
                        .current_point()
                        .map_err(|err| map_backend_error("path has no current point", err))?;
                    context.curve_to(
                        x0 + 2.0 / 3.0 * (c.x - x0),
                        y0 + 2.0 / 3.0 * (c.y - y0),
                        p.x + 2.0 / 3.0 * (c.x - p.x),
                        p.y + 2.0 / 3.0 * (c.y - p.y),
                        p.x,
                        p.y,
                    );
                }
                PathEl::CurveTo(c1, c2, p) => context.curve_to(c1.x, c1.y, c2.x, c2.y, p.x, p.y),
                PathEl::ClosePath => context.close_path(),
            }
        }
        if let Some(fill) = path.fill_color {
            apply_color(context, fill, 1.0);
            context
                .fill_preserve()
                .map_err(|err| map_backend_error("failed to fill path", err))?;
        }
        if let Some(stroke) = path.stroke_color {
            apply_color(context, stroke, 1.0);
            context.set_line_width(path.stroke_width);
            apply_dash(context, path.stroke_style);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke path", err))?;
            context.set_dash(&[], 0.0);
        }
        context.new_path();
        stats.paths_drawn += 1;
    }

    for line in &layer.lines {
        apply_color(context, line.color, line.opacity);
        context.set_line_width(line.stroke_width);
        apply_dash(context, line.stroke_style);
        context.move_to(line.x1, line.y1);
        context.line_to(line.x2, line.y2);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke line", err))?;
        context.set_dash(&[], 0.0);
        stats.lines_drawn += 1;
    }

    for circle in &layer.circles {
        context.new_sub_path();
        context.arc(circle.cx, circle.cy, circle.radius, 0.0, TAU);
        apply_color(context, circle.fill_color, circle.opacity);
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill circle", err))?;
        apply_color(context, circle.stroke_color, circle.opacity);
        context.set_line_width(circle.stroke_width);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke circle", err))?;
        stats.circles_drawn += 1;
    }

    for text in &layer.texts {
        let layout = pangocairo::functions::create_layout(context);
        let font_description =
            FontDescription::from_string(&format!("Sans {}", text.font_size_px));
        layout.set_font_description(Some(&font_description));
        layout.set_text(&text.text);

        let (text_width, text_height) = layout.pixel_size();
        let x = match text.h_align {
            TextHAlign::Left => text.x,
            TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
            TextHAlign::Right => text.x - f64::from(text_width),
        };

        apply_color(context, text.color, 1.0);
        context.move_to(x, text.y - f64::from(text_height) / 2.0);
        pangocairo::functions::show_layout(context, &layout);
        stats.texts_drawn += 1;
    }

    Ok(())
}

fn draw_tooltip(
    context: &Context,
    tooltip: &TooltipState,
    origin_x: f64,
    origin_y: f64,
) -> ChartResult<()> {
    let layout = pangocairo::functions::create_layout(context);
    let font_description = FontDescription::from_string(&format!("Sans {TOOLTIP_FONT_SIZE_PX}"));
    layout.set_font_description(Some(&font_description));
    layout.set_text(&tooltip.text);
    let (text_width, text_height) = layout.pixel_size();

    let x = origin_x + tooltip.x;
    let y = origin_y + tooltip.y;
    let backdrop = RectPrimitive::new(
        x,
        y,
        f64::from(text_width) + 2.0 * TOOLTIP_PADDING_PX,
        f64::from(text_height) + 2.0 * TOOLTIP_PADDING_PX,
        Color::rgba(1.0, 1.0, 1.0, 0.95),
    )
    .with_corner_radius(4.0);
    append_rect_path(context, backdrop);
    apply_color(context, backdrop.fill_color, 1.0);
    context
        .fill_preserve()
        .map_err(|err| map_backend_error("failed to fill tooltip", err))?;
    apply_color(context, Color::rgb(0.85, 0.85, 0.85), 1.0);
    context.set_line_width(1.0);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke tooltip", err))?;

    apply_color(context, Color::rgb(0.1, 0.1, 0.1), 1.0);
    context.move_to(x + TOOLTIP_PADDING_PX, y + TOOLTIP_PADDING_PX);
    pangocairo::functions::show_layout(context, &layout);
    Ok(())
}

fn apply_color(context: &Context, color: Color, opacity: f64) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha * opacity);
}

fn apply_dash(context: &Context, style: LineStrokeStyle) {
    match style {
        LineStrokeStyle::Solid => context.set_dash(&[], 0.0),
        LineStrokeStyle::Dashed { dash_px, gap_px } => context.set_dash(&[dash_px, gap_px], 0.0),
    }
}

fn append_rect_path(context: &Context, rect: RectPrimitive) {
    if rect.corner_radius <= 0.0 {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        return;
    }

    let radius = rect
        .corner_radius
        .min(rect.width * 0.5)
        .min(rect.height * 0.5);
    let left = rect.x;
    let top = rect.y;
    let right = rect.x + rect.width;
    let bottom = rect.y + rect.height;

    context.new_sub_path();
    context.arc(right - radius, top + radius, radius, -FRAC_PI_2, 0.0);
    context.arc(right - radius, bottom - radius, radius, 0.0, FRAC_PI_2);
    context.arc(left + radius, bottom - radius, radius, FRAC_PI_2, PI);
    context.arc(left + radius, top + radius, radius, PI, PI + FRAC_PI_2);
    context.close_path();
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
