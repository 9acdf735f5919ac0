use serde::{Deserialize, Serialize};

use crate::core::{
    BandHighlightGeometry, BarGeometry, BarShapeBehavior, CartesianAxes, CategoryScale, Dataset,
    DrawingSurface, LineShapeBehavior, LineVertex, LinearScale, PieShapeBehavior,
    PolygonGeometry, PolygonShapeBehavior, ValueScale, ValueScaleKind, ValueTickPolicy,
    WedgeGeometry, build_cartesian_axes, build_value_scale, project_band_highlights,
    project_bars, project_line_vertices, project_polygon, project_wedges,
};
use crate::error::{ChartError, ChartResult};

/// Chart family selecting the shape and hit-test strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
    Polygon,
}

impl ChartKind {
    #[must_use]
    pub const fn default_tick_policy(self) -> ValueTickPolicy {
        match self {
            Self::Line => ValueTickPolicy::line_default(),
            Self::Bar | Self::Pie | Self::Polygon => ValueTickPolicy::bar_default(),
        }
    }
}

/// Per-kind shape settings consumed by [`build_scene`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SceneOptions {
    pub bar: BarShapeBehavior,
    pub line: LineShapeBehavior,
    pub pie: PieShapeBehavior,
    pub polygon: PolygonShapeBehavior,
    /// `None` picks [`ChartKind::default_tick_policy`].
    pub value_ticks: Option<ValueTickPolicy>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ChartShapes {
    Bar {
        bars: Vec<BarGeometry>,
        highlights: Vec<BandHighlightGeometry>,
    },
    Line {
        vertices: Vec<LineVertex>,
        marker_radius: f64,
        stroke_width: f64,
    },
    Pie {
        wedges: Vec<WedgeGeometry>,
    },
    Polygon(PolygonGeometry),
}

/// Immutable geometry description of one draw cycle.
///
/// Rebuilt from scratch on every draw; `generation` identifies the cycle so
/// pointer state from an older surface is never applied to a newer one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartScene {
    pub kind: ChartKind,
    pub generation: u64,
    pub surface: DrawingSurface,
    pub category_scale: Option<CategoryScale>,
    pub value_scale: ValueScale,
    pub axes: Option<CartesianAxes>,
    pub shapes: ChartShapes,
}

impl ChartScene {
    #[must_use]
    pub fn datum_count(&self) -> usize {
        match &self.shapes {
            ChartShapes::Bar { bars, .. } => bars.len(),
            ChartShapes::Line { vertices, .. } => vertices.len(),
            ChartShapes::Pie { wedges } => wedges.len(),
            ChartShapes::Polygon(polygon) => polygon.vertices.len(),
        }
    }

    #[must_use]
    pub fn linear_value_scale(&self) -> Option<LinearScale> {
        match self.value_scale {
            ValueScale::Linear(scale) | ValueScale::Radial(scale) => Some(scale),
            ValueScale::Angular(_) => None,
        }
    }
}

/// Runs scale building and shape building for one chart kind.
pub fn build_scene(
    kind: ChartKind,
    dataset: &Dataset,
    surface: DrawingSurface,
    options: &SceneOptions,
    generation: u64,
) -> ChartResult<ChartScene> {
    let values: Vec<f64> = dataset.values().collect();

    match kind {
        ChartKind::Bar | ChartKind::Line => {
            let category_scale = CategoryScale::new(dataset.categories(), surface.width)?;
            let value_scale = build_value_scale(&values, surface.height, ValueScaleKind::Linear)?;
            let ValueScale::Linear(linear) = value_scale else {
                return Err(ChartError::InvalidData(
                    "cartesian charts require a linear value scale".to_owned(),
                ));
            };
            let tick_policy = options
                .value_ticks
                .unwrap_or_else(|| kind.default_tick_policy());
            let axes =
                build_cartesian_axes(dataset, &category_scale, linear, tick_policy, surface);

            let shapes = if kind == ChartKind::Bar {
                ChartShapes::Bar {
                    bars: project_bars(dataset, &category_scale, linear, options.bar)?,
                    highlights: project_band_highlights(&category_scale, linear),
                }
            } else {
                ChartShapes::Line {
                    vertices: project_line_vertices(dataset, &category_scale, linear)?,
                    marker_radius: options.line.marker_radius_px,
                    stroke_width: options.line.stroke_width_px,
                }
            };

            Ok(ChartScene {
                kind,
                generation,
                surface,
                category_scale: Some(category_scale),
                value_scale,
                axes: Some(axes),
                shapes,
            })
        }
        ChartKind::Pie => {
            let value_scale = build_value_scale(
                &values,
                surface.radial_bound(),
                ValueScaleKind::Angular(options.pie.sort_order),
            )?;
            let ValueScale::Angular(angles) = &value_scale else {
                return Err(ChartError::InvalidData(
                    "pie charts require an angular value scale".to_owned(),
                ));
            };
            let wedges = project_wedges(angles, surface, options.pie);

            Ok(ChartScene {
                kind,
                generation,
                surface,
                category_scale: None,
                value_scale,
                axes: None,
                shapes: ChartShapes::Pie { wedges },
            })
        }
        ChartKind::Polygon => {
            let value_scale = build_value_scale(
                &values,
                surface.radial_bound(),
                ValueScaleKind::Radial {
                    domain_max: options.polygon.domain_max,
                },
            )?;
            let ValueScale::Radial(radial) = value_scale else {
                return Err(ChartError::InvalidData(
                    "polygon charts require a radial value scale".to_owned(),
                ));
            };
            let polygon = project_polygon(dataset, surface, radial, options.polygon)?;

            Ok(ChartScene {
                kind,
                generation,
                surface,
                category_scale: None,
                value_scale,
                axes: None,
                shapes: ChartShapes::Polygon(polygon),
            })
        }
    }
}
