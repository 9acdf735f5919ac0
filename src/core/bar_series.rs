use serde::{Deserialize, Serialize};

use crate::core::{CategoryScale, Dataset, LinearScale};
use crate::error::{ChartError, ChartResult};

/// Bar sizing relative to the category band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarShapeBehavior {
    /// Bar width as a fraction of the bandwidth, centered in the band.
    pub width_ratio: f64,
    /// Corner radius as a fraction of the surface width.
    pub corner_radius_ratio: f64,
}

impl Default for BarShapeBehavior {
    fn default() -> Self {
        Self {
            width_ratio: 0.25,
            corner_radius_ratio: 0.01,
        }
    }
}

impl BarShapeBehavior {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.width_ratio.is_finite() || self.width_ratio <= 0.0 || self.width_ratio > 1.0 {
            return Err(ChartError::InvalidData(
                "bar width ratio must be in (0, 1]".to_owned(),
            ));
        }
        if !self.corner_radius_ratio.is_finite() || self.corner_radius_ratio < 0.0 {
            return Err(ChartError::InvalidData(
                "bar corner radius ratio must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Bar rectangle in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BarGeometry {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
}

/// Full-band backdrop shown behind the hovered bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BandHighlightGeometry {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Projects each datum into a bar centered in its category band.
///
/// The bar spans from `value_scale(value)` down to `value_scale(0)`.
pub fn project_bars(
    dataset: &Dataset,
    category_scale: &CategoryScale,
    value_scale: LinearScale,
    behavior: BarShapeBehavior,
) -> ChartResult<Vec<BarGeometry>> {
    let bandwidth = category_scale.bandwidth();
    let width = bandwidth * behavior.width_ratio;
    let inset = (bandwidth - width) * 0.5;
    let baseline = value_scale.map(0.0);
    let corner_radius = category_scale.width() * behavior.corner_radius_ratio;

    let mut projected = Vec::with_capacity(dataset.len());
    for (index, point) in dataset.points().iter().enumerate() {
        let band_start = category_scale.position(&point.category).ok_or_else(|| {
            ChartError::InvalidData(format!(
                "category `{}` is missing from the category scale",
                point.category
            ))
        })?;
        let top = value_scale.map(point.value);

        projected.push(BarGeometry {
            index,
            x: band_start + inset,
            y: top,
            width,
            height: baseline - top,
            corner_radius,
        });
    }

    Ok(projected)
}

#[must_use]
pub fn project_band_highlights(
    category_scale: &CategoryScale,
    value_scale: LinearScale,
) -> Vec<BandHighlightGeometry> {
    let height = value_scale.map(0.0);
    (0..category_scale.len())
        .map(|index| BandHighlightGeometry {
            index,
            x: category_scale.band_start(index),
            y: 0.0,
            width: category_scale.bandwidth(),
            height,
        })
        .collect()
}
