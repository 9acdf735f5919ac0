use std::f64::consts::TAU;

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Continuous linear mapping from a data domain to a pixel range.
///
/// Values outside the domain extrapolate; nothing is clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        let (domain_start, domain_end) = domain;
        let (range_start, range_end) = range;
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    /// Value axis of bar/line charts: `[0, max]` onto `[pixel_extent, 0]`
    /// so larger values sit higher on screen.
    pub fn for_values(values: impl IntoIterator<Item = f64>, pixel_extent: f64) -> ChartResult<Self> {
        let max = values
            .into_iter()
            .map(OrderedFloat)
            .max()
            .map_or(f64::NAN, |max| max.0);
        if !max.is_finite() || max <= 0.0 {
            return Err(ChartError::DegenerateValueDomain { max });
        }
        Self::new((0.0, max), (pixel_extent, 0.0))
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let t = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start + t * (self.range_end - self.range_start)
    }

    /// Inverse of [`LinearScale::map`]. A zero-width range maps back to the domain start.
    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let span = self.range_end - self.range_start;
        if span == 0.0 {
            return self.domain_start;
        }
        let t = (pixel - self.range_start) / span;
        self.domain_start + t * (self.domain_end - self.domain_start)
    }
}

/// Ordinal axis splitting `[0, width]` into equal contiguous bands, one per
/// category, in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryScale {
    domain: IndexMap<String, usize>,
    width: f64,
    bandwidth: f64,
}

impl CategoryScale {
    pub fn new<'a>(
        categories: impl IntoIterator<Item = &'a str>,
        pixel_width: f64,
    ) -> ChartResult<Self> {
        if !pixel_width.is_finite() || pixel_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "category scale width must be finite and > 0".to_owned(),
            ));
        }

        let mut domain: IndexMap<String, usize> = IndexMap::new();
        for (index, category) in categories.into_iter().enumerate() {
            if let Some(first_index) = domain.get(category) {
                return Err(ChartError::DuplicateCategory {
                    category: category.to_owned(),
                    first_index: *first_index,
                    duplicate_index: index,
                });
            }
            domain.insert(category.to_owned(), index);
        }
        if domain.is_empty() {
            return Err(ChartError::EmptyDataset);
        }

        let bandwidth = pixel_width / domain.len() as f64;
        Ok(Self {
            domain,
            width: pixel_width,
            bandwidth,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.domain.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    #[must_use]
    pub fn index_of(&self, category: &str) -> Option<usize> {
        self.domain.get(category).copied()
    }

    #[must_use]
    pub fn category(&self, index: usize) -> Option<&str> {
        self.domain.get_index(index).map(|(category, _)| category.as_str())
    }

    /// Band start offset of `category`.
    #[must_use]
    pub fn position(&self, category: &str) -> Option<f64> {
        self.index_of(category).map(|index| self.band_start(index))
    }

    #[must_use]
    pub fn band_start(&self, index: usize) -> f64 {
        index as f64 * self.bandwidth
    }

    #[must_use]
    pub fn band_center(&self, index: usize) -> f64 {
        self.band_start(index) + self.bandwidth * 0.5
    }

    /// Half-open `[start, end)` interval of band `index`.
    #[must_use]
    pub fn band(&self, index: usize) -> Option<(f64, f64)> {
        (index < self.len()).then(|| (self.band_start(index), self.band_start(index + 1)))
    }

    /// Band start offsets in domain order; sorted ascending by construction.
    #[must_use]
    pub fn band_starts(&self) -> Vec<f64> {
        (0..self.len()).map(|index| self.band_start(index)).collect()
    }
}

/// Layout order of pie wedges around the circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PieSortOrder {
    /// Wedges follow dataset order.
    #[default]
    Input,
    /// Larger shares first, ties broken by dataset index.
    Descending,
}

/// Angular span of one wedge, measured clockwise from 12 o'clock in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WedgeAngles {
    pub index: usize,
    pub value: f64,
    /// Fraction of the full circle in `[0, 1]`.
    pub share: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl WedgeAngles {
    #[must_use]
    pub fn sweep(self) -> f64 {
        self.end_angle - self.start_angle
    }

    #[must_use]
    pub fn percentage(self) -> f64 {
        self.share * 100.0
    }
}

/// Angular value scale for pie charts. Output is in dataset order regardless
/// of the layout order.
pub fn layout_wedge_angles(values: &[f64], order: PieSortOrder) -> ChartResult<Vec<WedgeAngles>> {
    if values.is_empty() {
        return Err(ChartError::EmptyDataset);
    }
    for (index, value) in values.iter().enumerate() {
        if !value.is_finite() {
            return Err(ChartError::NonFiniteValue { index });
        }
        if *value < 0.0 {
            return Err(ChartError::NegativeValue { index });
        }
    }

    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return Err(ChartError::DegenerateValueDomain { max: total });
    }

    let mut layout_order: Vec<usize> = (0..values.len()).collect();
    if order == PieSortOrder::Descending {
        layout_order.sort_by_key(|&index| std::cmp::Reverse(OrderedFloat(values[index])));
    }

    let mut wedges: Vec<Option<WedgeAngles>> = vec![None; values.len()];
    let mut cursor = 0.0;
    for index in layout_order {
        let share = values[index] / total;
        let end = cursor + share * TAU;
        wedges[index] = Some(WedgeAngles {
            index,
            value: values[index],
            share,
            start_angle: cursor,
            end_angle: end,
        });
        cursor = end;
    }

    Ok(wedges.into_iter().flatten().collect())
}

/// Discriminates the value-scale families a chart kind can request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ValueScaleKind {
    /// `[0, max]` onto `[extent, 0]`.
    Linear,
    /// Shares of the total laid out around the circle.
    Angular(PieSortOrder),
    /// `[0, domain_max]` onto `[0, extent]`; inputs are pre-normalized percents.
    Radial { domain_max: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ValueScale {
    Linear(LinearScale),
    Angular(Vec<WedgeAngles>),
    Radial(LinearScale),
}

pub fn build_value_scale(
    values: &[f64],
    pixel_extent: f64,
    kind: ValueScaleKind,
) -> ChartResult<ValueScale> {
    match kind {
        ValueScaleKind::Linear => Ok(ValueScale::Linear(LinearScale::for_values(
            values.iter().copied(),
            pixel_extent,
        )?)),
        ValueScaleKind::Angular(order) => {
            Ok(ValueScale::Angular(layout_wedge_angles(values, order)?))
        }
        ValueScaleKind::Radial { domain_max } => Ok(ValueScale::Radial(LinearScale::new(
            (0.0, domain_max),
            (0.0, pixel_extent),
        )?)),
    }
}
