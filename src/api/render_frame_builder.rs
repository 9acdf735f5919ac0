use kurbo::{Affine, BezPath};

use crate::core::polygon_series::closed_path;
use crate::core::{
    BandHighlightGeometry, BarGeometry, CartesianAxes, ChartScene, ChartShapes, LineVertex,
    PolygonGeometry, WedgeGeometry, line_path,
};
use crate::interaction::InteractionState;
use crate::render::{
    CanvasLayerKind, CirclePrimitive, LinePrimitive, LineStrokeStyle, PathPrimitive,
    RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::RenderStyle;

/// Surface-local to viewport translation.
#[derive(Debug, Clone, Copy)]
struct Origin {
    x: f64,
    y: f64,
}

impl Origin {
    fn affine(self) -> Affine {
        Affine::translate((self.x, self.y))
    }

    fn path(self, mut path: BezPath) -> BezPath {
        path.apply_affine(self.affine());
        path
    }
}

pub(super) fn populate_frame(
    frame: &mut RenderFrame,
    scene: &ChartScene,
    interaction: &InteractionState,
    style: RenderStyle,
) {
    let origin = Origin {
        x: scene.surface.origin_x,
        y: scene.surface.origin_y,
    };
    let hovered = interaction.hovered_index();

    if let Some(axes) = &scene.axes {
        push_cartesian_axes(frame, axes, origin, style, scene.surface.width);
    }

    match &scene.shapes {
        ChartShapes::Bar { bars, highlights } => {
            push_bars(frame, bars, highlights, hovered, origin, style);
        }
        ChartShapes::Line {
            vertices,
            marker_radius,
            stroke_width,
        } => push_line(
            frame,
            vertices,
            *marker_radius,
            *stroke_width,
            scene.surface.height,
            hovered,
            origin,
            style,
        ),
        ChartShapes::Pie { wedges } => push_wedges(frame, wedges, hovered, origin, style),
        ChartShapes::Polygon(polygon) => push_polygon(frame, polygon, hovered, origin, style),
    }
}

fn push_cartesian_axes(
    frame: &mut RenderFrame,
    axes: &CartesianAxes,
    origin: Origin,
    style: RenderStyle,
    surface_width: f64,
) {
    for tick in &axes.value_ticks {
        let y = origin.y + tick.y;
        frame.push_line(
            CanvasLayerKind::Grid,
            LinePrimitive::new(
                origin.x,
                y,
                origin.x + surface_width,
                y,
                style.grid_line_width,
                style.grid_color,
            )
            .with_stroke_style(LineStrokeStyle::dashed(style.grid_dash_px)),
        );
        if !tick.label.is_empty() {
            frame.push_text(
                CanvasLayerKind::Axis,
                TextPrimitive::new(
                    tick.label.clone(),
                    origin.x - style.label_offset_px,
                    y,
                    style.label_font_size_px,
                    style.label_color,
                    TextHAlign::Right,
                ),
            );
        }
    }

    for rule in [axes.baseline, axes.value_axis] {
        frame.push_line(
            CanvasLayerKind::Axis,
            LinePrimitive::new(
                origin.x + rule.x1,
                origin.y + rule.y1,
                origin.x + rule.x2,
                origin.y + rule.y2,
                style.axis_line_width,
                style.axis_color,
            ),
        );
    }

    let label_y = origin.y + axes.baseline.y1 + style.label_offset_px + style.label_font_size_px;
    for tick in axes.category_ticks.iter().filter(|tick| !tick.label.is_empty()) {
        frame.push_text(
            CanvasLayerKind::Axis,
            TextPrimitive::new(
                tick.label.clone(),
                origin.x + tick.x,
                label_y,
                style.label_font_size_px,
                style.label_color,
                TextHAlign::Center,
            ),
        );
    }
}

fn push_bars(
    frame: &mut RenderFrame,
    bars: &[BarGeometry],
    highlights: &[BandHighlightGeometry],
    hovered: Option<usize>,
    origin: Origin,
    style: RenderStyle,
) {
    for highlight in highlights {
        let opacity = if hovered == Some(highlight.index) { 1.0 } else { 0.0 };
        frame.push_rect(
            CanvasLayerKind::Background,
            RectPrimitive::new(
                origin.x + highlight.x,
                origin.y + highlight.y,
                highlight.width,
                highlight.height,
                style.band_highlight_color,
            )
            .with_opacity(opacity),
        );
    }

    for bar in bars {
        // Negative values hang below the baseline.
        let top = bar.y.min(bar.y + bar.height);
        frame.push_rect(
            CanvasLayerKind::Series,
            RectPrimitive::new(
                origin.x + bar.x,
                origin.y + top,
                bar.width,
                bar.height.abs(),
                style.series_color,
            )
            .with_corner_radius(bar.corner_radius),
        );
    }
}

#[allow(clippy::too_many_arguments)]
fn push_line(
    frame: &mut RenderFrame,
    vertices: &[LineVertex],
    marker_radius: f64,
    stroke_width: f64,
    surface_height: f64,
    hovered: Option<usize>,
    origin: Origin,
    style: RenderStyle,
) {
    frame.push_path(
        CanvasLayerKind::Series,
        PathPrimitive::new(origin.path(line_path(vertices)))
            .with_stroke(style.series_color, stroke_width),
    );

    if let Some(vertex) = hovered.and_then(|index| vertices.get(index)) {
        let x = origin.x + vertex.x;
        frame.push_line(
            CanvasLayerKind::Overlay,
            LinePrimitive::new(
                x,
                origin.y,
                x,
                origin.y + surface_height,
                style.guide_line_width,
                style.guide_line_color,
            ),
        );
    }

    for vertex in vertices {
        frame.push_circle(
            CanvasLayerKind::Overlay,
            CirclePrimitive {
                cx: origin.x + vertex.x,
                cy: origin.y + vertex.y,
                radius: marker_radius,
                fill_color: style.marker_fill_color,
                stroke_color: style.series_color,
                stroke_width,
                opacity: if hovered == Some(vertex.index) { 1.0 } else { 0.0 },
            },
        );
    }
}

fn push_wedges(
    frame: &mut RenderFrame,
    wedges: &[WedgeGeometry],
    hovered: Option<usize>,
    origin: Origin,
    style: RenderStyle,
) {
    for wedge in wedges {
        let is_hovered = hovered == Some(wedge.index);
        frame.push_path(
            CanvasLayerKind::Series,
            PathPrimitive::new(origin.path(wedge.path(is_hovered)))
                .with_fill(style.wedge_fill_color)
                .with_stroke(style.wedge_stroke_color, style.wedge_stroke_width),
        );
    }
}

fn push_polygon(
    frame: &mut RenderFrame,
    polygon: &PolygonGeometry,
    hovered: Option<usize>,
    origin: Origin,
    style: RenderStyle,
) {
    let dashed = LineStrokeStyle::dashed(style.radar_dash_px);

    for ring in &polygon.rings {
        let fill = if ring.tinted {
            style.ring_tint_color
        } else {
            style.ring_fill_color
        };
        let (width, stroke_style) = if ring.dashed {
            (style.radar_dashed_ring_width, dashed)
        } else {
            (style.radar_solid_ring_width, LineStrokeStyle::Solid)
        };
        frame.push_path(
            CanvasLayerKind::Grid,
            PathPrimitive::new(origin.path(closed_path(ring.points.iter().copied())))
                .with_fill(fill)
                .with_stroke(style.radar_grid_color, width)
                .with_stroke_style(stroke_style),
        );
    }

    for spoke in &polygon.spokes {
        let line = LinePrimitive::new(
            origin.x + spoke.x1,
            origin.y + spoke.y1,
            origin.x + spoke.x2,
            origin.y + spoke.y2,
            style.radar_spoke_width,
            style.radar_grid_color,
        );
        let line = if hovered == Some(spoke.index) {
            line.with_stroke_style(LineStrokeStyle::Solid)
                .with_color(style.series_color)
        } else {
            line.with_stroke_style(dashed)
        };
        frame.push_line(CanvasLayerKind::Grid, line);
    }

    frame.push_path(
        CanvasLayerKind::Series,
        PathPrimitive::new(origin.path(polygon.series_path()))
            .with_fill(style.radar_fill_color)
            .with_stroke(style.radar_stroke_color, style.radar_stroke_width),
    );

    for vertex in &polygon.vertices {
        frame.push_circle(
            CanvasLayerKind::Overlay,
            CirclePrimitive {
                cx: origin.x + vertex.x,
                cy: origin.y + vertex.y,
                radius: style.radar_marker_radius_px,
                fill_color: style.marker_fill_color,
                stroke_color: style.radar_stroke_color,
                stroke_width: style.radar_stroke_width,
                opacity: if hovered == Some(vertex.index) { 1.0 } else { 0.0 },
            },
        );
    }

    for label in polygon.labels.iter().filter(|label| !label.text.is_empty()) {
        frame.push_text(
            CanvasLayerKind::Axis,
            TextPrimitive::new(
                label.text.clone(),
                origin.x + label.x,
                origin.y + label.y,
                style.label_font_size_px,
                style.label_color,
                TextHAlign::Center,
            ),
        );
    }
}
