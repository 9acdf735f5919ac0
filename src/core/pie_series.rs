use std::f64::consts::FRAC_PI_2;

use kurbo::{BezPath, Circle, Point, Shape};
use serde::{Deserialize, Serialize};

use crate::core::{DrawingSurface, PieSortOrder, WedgeAngles};
use crate::error::{ChartError, ChartResult};

/// Flattening tolerance used when converting arcs to paths.
pub const ARC_TOLERANCE: f64 = 0.1;

/// Donut radii expressed as fractions of the radial bound (half the shorter
/// surface side).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PieShapeBehavior {
    pub inner_radius_ratio: f64,
    pub outer_radius_ratio: f64,
    pub hover_outer_radius_ratio: f64,
    #[serde(default)]
    pub sort_order: PieSortOrder,
}

impl Default for PieShapeBehavior {
    fn default() -> Self {
        Self {
            inner_radius_ratio: 0.7,
            outer_radius_ratio: 0.9,
            hover_outer_radius_ratio: 1.0,
            sort_order: PieSortOrder::Input,
        }
    }
}

impl PieShapeBehavior {
    pub fn validate(self) -> ChartResult<Self> {
        let ratios = [
            self.inner_radius_ratio,
            self.outer_radius_ratio,
            self.hover_outer_radius_ratio,
        ];
        if ratios.iter().any(|ratio| !ratio.is_finite() || *ratio < 0.0) {
            return Err(ChartError::InvalidData(
                "pie radius ratios must be finite and >= 0".to_owned(),
            ));
        }
        if self.inner_radius_ratio >= self.outer_radius_ratio
            || self.outer_radius_ratio > self.hover_outer_radius_ratio
        {
            return Err(ChartError::InvalidData(
                "pie radius ratios must satisfy inner < outer <= hover outer".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// One donut wedge centered on the surface.
///
/// Angles run clockwise from 12 o'clock, in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WedgeGeometry {
    pub index: usize,
    pub value: f64,
    pub share: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub hover_outer_radius: f64,
}

impl WedgeGeometry {
    #[must_use]
    pub fn center(self) -> Point {
        Point::new(self.center_x, self.center_y)
    }

    /// Outline of the wedge at rest or in its hovered state.
    #[must_use]
    pub fn path(self, hovered: bool) -> BezPath {
        let outer = if hovered {
            self.hover_outer_radius
        } else {
            self.outer_radius
        };
        // kurbo measures angles from the +x axis; shift so 0 points up.
        Circle::new(self.center(), outer)
            .segment(
                self.inner_radius,
                self.start_angle - FRAC_PI_2,
                self.end_angle - self.start_angle,
            )
            .to_path(ARC_TOLERANCE)
    }

    /// Point-in-path test against the resting or hovered outline.
    #[must_use]
    pub fn contains(self, point: Point, hovered: bool) -> bool {
        self.sweep() > 0.0 && self.path(hovered).contains(point)
    }

    #[must_use]
    pub fn sweep(self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Whole-number percentage shown in tooltips.
    #[must_use]
    pub fn floored_percentage(self) -> f64 {
        (self.share * 100.0).floor()
    }
}

#[must_use]
pub fn project_wedges(
    angles: &[WedgeAngles],
    surface: DrawingSurface,
    behavior: PieShapeBehavior,
) -> Vec<WedgeGeometry> {
    let (center_x, center_y) = surface.center();
    let bound = surface.radial_bound();

    angles
        .iter()
        .map(|wedge| WedgeGeometry {
            index: wedge.index,
            value: wedge.value,
            share: wedge.share,
            start_angle: wedge.start_angle,
            end_angle: wedge.end_angle,
            center_x,
            center_y,
            inner_radius: bound * behavior.inner_radius_ratio,
            outer_radius: bound * behavior.outer_radius_ratio,
            hover_outer_radius: bound * behavior.hover_outer_radius_ratio,
        })
        .collect()
}
