use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Pixel size of a mount element as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Pixels reserved between the mount element edges and the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InnerPadding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl InnerPadding {
    #[must_use]
    pub const fn uniform(px: f64) -> Self {
        Self {
            top: px,
            right: px,
            bottom: px,
            left: px,
        }
    }

    pub fn validate(self) -> ChartResult<Self> {
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "inner padding `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Rectangular region one chart owns for a single draw cycle.
///
/// `origin_x`/`origin_y` locate the surface inside its mount element; all
/// shape geometry is expressed in surface-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawingSurface {
    pub origin_x: f64,
    pub origin_y: f64,
    pub width: f64,
    pub height: f64,
}

impl DrawingSurface {
    /// Carves the drawing surface out of a mount viewport.
    pub fn inside(viewport: Viewport, padding: InnerPadding) -> ChartResult<Self> {
        let width = viewport.width - padding.left - padding.right;
        let height = viewport.height - padding.top - padding.bottom;
        if !viewport.is_valid() || !(width > 0.0 && height > 0.0) {
            return Err(ChartError::InvalidViewport { width, height });
        }
        Ok(Self {
            origin_x: padding.left,
            origin_y: padding.top,
            width,
            height,
        })
    }

    /// Zero-origin surface spanning the whole viewport.
    #[must_use]
    pub fn covering(viewport: Viewport) -> Self {
        Self {
            origin_x: 0.0,
            origin_y: 0.0,
            width: viewport.width,
            height: viewport.height,
        }
    }

    #[must_use]
    pub fn center(self) -> (f64, f64) {
        (self.width * 0.5, self.height * 0.5)
    }

    /// Half of the shorter side; the bound used by radial charts.
    #[must_use]
    pub fn radial_bound(self) -> f64 {
        self.width.min(self.height) * 0.5
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub category: String,
    pub value: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(category: impl Into<String>, value: f64) -> Self {
        Self {
            category: category.into(),
            value,
        }
    }
}

/// Ordered, validated sequence of data points.
///
/// Construction rejects empty input, non-finite values and repeated
/// categories so the category mapping stays injective.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    points: Vec<DataPoint>,
}

impl Dataset {
    pub fn new(points: Vec<DataPoint>) -> ChartResult<Self> {
        if points.is_empty() {
            return Err(ChartError::EmptyDataset);
        }

        let mut seen: IndexMap<&str, usize> = IndexMap::with_capacity(points.len());
        for (index, point) in points.iter().enumerate() {
            if !point.value.is_finite() {
                return Err(ChartError::NonFiniteValue { index });
            }
            match seen.entry(point.category.as_str()) {
                Entry::Occupied(first) => {
                    return Err(ChartError::DuplicateCategory {
                        category: point.category.clone(),
                        first_index: *first.get(),
                        duplicate_index: index,
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(index);
                }
            }
        }

        Ok(Self { points })
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&DataPoint> {
        self.points.get(index)
    }

    pub fn categories(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.points.iter().map(|point| point.category.as_str())
    }

    pub fn values(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.points.iter().map(|point| point.value)
    }

    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.values().fold(f64::NEG_INFINITY, f64::max)
    }

    #[must_use]
    pub fn sum(&self) -> f64 {
        self.values().sum()
    }

    #[must_use]
    pub fn mean(&self) -> f64 {
        self.sum() / self.len() as f64
    }
}
