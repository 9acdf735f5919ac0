use std::f64::consts::{FRAC_PI_2, TAU};

use kurbo::{BezPath, Point};
use serde::{Deserialize, Serialize};

use crate::core::{Dataset, DrawingSurface, LinearScale};
use crate::error::{ChartError, ChartResult};

/// Radar chart decoration and value-domain settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolygonShapeBehavior {
    /// Number of concentric grid rings behind the series.
    pub grid_rings: usize,
    /// Label distance as a multiple of the outer radius.
    pub label_radius_ratio: f64,
    /// Upper bound of the pre-normalized value domain.
    pub domain_max: f64,
}

impl Default for PolygonShapeBehavior {
    fn default() -> Self {
        Self {
            grid_rings: 3,
            label_radius_ratio: 1.05,
            domain_max: 100.0,
        }
    }
}

impl PolygonShapeBehavior {
    pub fn validate(self) -> ChartResult<Self> {
        if self.grid_rings > 32 {
            return Err(ChartError::InvalidData(
                "polygon grid rings must be <= 32".to_owned(),
            ));
        }
        if !self.label_radius_ratio.is_finite() || self.label_radius_ratio <= 0.0 {
            return Err(ChartError::InvalidData(
                "polygon label radius ratio must be finite and > 0".to_owned(),
            ));
        }
        if !self.domain_max.is_finite() || self.domain_max <= 0.0 {
            return Err(ChartError::InvalidData(
                "polygon domain max must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Screen angle of spoke `index` out of `count`: first spoke points up,
/// subsequent spokes advance clockwise.
#[must_use]
pub fn spoke_angle(index: usize, count: usize) -> f64 {
    index as f64 * (TAU / count as f64) - FRAC_PI_2
}

#[must_use]
pub fn polar_point(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PolygonVertex {
    pub index: usize,
    pub angle: f64,
    pub radius: f64,
    pub x: f64,
    pub y: f64,
}

/// Background ring drawn as a closed polygon through every spoke.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridRing {
    pub index: usize,
    pub radius: f64,
    /// Odd rings get the tinted fill.
    pub tinted: bool,
    /// The first ring is solid, the rest dashed.
    pub dashed: bool,
    pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Spoke {
    pub index: usize,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadialLabel {
    pub index: usize,
    pub text: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolygonGeometry {
    pub center_x: f64,
    pub center_y: f64,
    pub outer_radius: f64,
    pub vertices: Vec<PolygonVertex>,
    pub rings: Vec<GridRing>,
    pub spokes: Vec<Spoke>,
    pub labels: Vec<RadialLabel>,
}

impl PolygonGeometry {
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }

    /// Closed series outline through every vertex.
    #[must_use]
    pub fn series_path(&self) -> BezPath {
        closed_path(self.vertices.iter().map(|vertex| (vertex.x, vertex.y)))
    }
}

pub(crate) fn closed_path(points: impl IntoIterator<Item = (f64, f64)>) -> BezPath {
    let mut path = BezPath::new();
    let mut iter = points.into_iter();
    if let Some(first) = iter.next() {
        path.move_to(first);
        for point in iter {
            path.line_to(point);
        }
        path.close_path();
    }
    path
}

/// Builds the radar series plus its grid rings, spokes and labels.
///
/// Ring `i` sits at `(n - 2 - i) * outer_radius / rings`; radii that would go
/// negative for very small datasets are clamped to the center.
pub fn project_polygon(
    dataset: &Dataset,
    surface: DrawingSurface,
    radial_scale: LinearScale,
    behavior: PolygonShapeBehavior,
) -> ChartResult<PolygonGeometry> {
    let count = dataset.len();
    if count == 0 {
        return Err(ChartError::EmptyDataset);
    }

    let (center_x, center_y) = surface.center();
    let center = Point::new(center_x, center_y);
    let outer_radius = radial_scale.range().1;

    let vertices = dataset
        .values()
        .enumerate()
        .map(|(index, value)| {
            let angle = spoke_angle(index, count);
            let radius = radial_scale.map(value);
            let point = polar_point(center, radius, angle);
            PolygonVertex {
                index,
                angle,
                radius,
                x: point.x,
                y: point.y,
            }
        })
        .collect();

    let rings = if behavior.grid_rings == 0 {
        Vec::new()
    } else {
        let ring_step = outer_radius / behavior.grid_rings as f64;
        (0..behavior.grid_rings)
            .map(|ring| {
                let steps = count as f64 - 2.0 - ring as f64;
                let radius = (steps * ring_step).max(0.0);
                GridRing {
                    index: ring,
                    radius,
                    tinted: ring % 2 != 0,
                    dashed: ring != 0,
                    points: (0..count)
                        .map(|index| {
                            let point = polar_point(center, radius, spoke_angle(index, count));
                            (point.x, point.y)
                        })
                        .collect(),
                }
            })
            .collect()
    };

    let spokes = (0..count)
        .map(|index| {
            let end = polar_point(center, outer_radius, spoke_angle(index, count));
            Spoke {
                index,
                x1: center_x,
                y1: center_y,
                x2: end.x,
                y2: end.y,
            }
        })
        .collect();

    let label_radius = outer_radius * behavior.label_radius_ratio;
    let labels = dataset
        .categories()
        .enumerate()
        .map(|(index, category)| {
            let point = polar_point(center, label_radius, spoke_angle(index, count));
            RadialLabel {
                index,
                text: category.to_owned(),
                x: point.x,
                y: point.y,
            }
        })
        .collect();

    Ok(PolygonGeometry {
        center_x,
        center_y,
        outer_radius,
        vertices,
        rings,
        spokes,
        labels,
    })
}
