use kurbo::{BezPath, Point};
use serde::{Deserialize, Serialize};

use crate::core::{CategoryScale, Dataset, LinearScale};
use crate::error::{ChartError, ChartResult};

/// Hover marker sizing for line charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineShapeBehavior {
    pub marker_radius_px: f64,
    pub stroke_width_px: f64,
}

impl Default for LineShapeBehavior {
    fn default() -> Self {
        Self {
            marker_radius_px: 6.0,
            stroke_width_px: 3.0,
        }
    }
}

impl LineShapeBehavior {
    pub fn validate(self) -> ChartResult<Self> {
        for (name, value) in [
            ("marker radius", self.marker_radius_px),
            ("stroke width", self.stroke_width_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "line {name} must be finite and > 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Line vertex in surface pixels, placed at its band center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineVertex {
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

impl LineVertex {
    #[must_use]
    pub fn point(self) -> Point {
        Point::new(self.x, self.y)
    }
}

pub fn project_line_vertices(
    dataset: &Dataset,
    category_scale: &CategoryScale,
    value_scale: LinearScale,
) -> ChartResult<Vec<LineVertex>> {
    let half_band = category_scale.bandwidth() * 0.5;

    let mut vertices = Vec::with_capacity(dataset.len());
    for (index, point) in dataset.points().iter().enumerate() {
        let band_start = category_scale.position(&point.category).ok_or_else(|| {
            ChartError::InvalidData(format!(
                "category `{}` is missing from the category scale",
                point.category
            ))
        })?;
        vertices.push(LineVertex {
            index,
            x: band_start + half_band,
            y: value_scale.map(point.value),
        });
    }

    Ok(vertices)
}

/// Joins vertices with straight segments into one open path.
#[must_use]
pub fn line_path(vertices: &[LineVertex]) -> BezPath {
    let mut path = BezPath::new();
    let mut iter = vertices.iter();
    if let Some(first) = iter.next() {
        path.move_to(first.point());
        for vertex in iter {
            path.line_to(vertex.point());
        }
    }
    path
}
