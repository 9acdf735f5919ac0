use serde::Serialize;

use crate::core::{CategoryScale, Dataset, DrawingSurface, LinearScale, ValueTickPolicy};

/// Straight axis rule in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisRule {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Category label anchored at its band center under the baseline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTick {
    pub index: usize,
    pub x: f64,
    pub label: String,
}

/// Value tick with a dashed grid line across the surface at `y`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueTick {
    pub value: f64,
    pub y: f64,
    pub label: String,
}

/// Axes shared by the bar and line charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartesianAxes {
    pub baseline: AxisRule,
    pub value_axis: AxisRule,
    pub category_ticks: Vec<CategoryTick>,
    pub value_ticks: Vec<ValueTick>,
}

#[must_use]
pub fn build_cartesian_axes(
    dataset: &Dataset,
    category_scale: &CategoryScale,
    value_scale: LinearScale,
    tick_policy: ValueTickPolicy,
    surface: DrawingSurface,
) -> CartesianAxes {
    let category_ticks = dataset
        .categories()
        .enumerate()
        .map(|(index, category)| CategoryTick {
            index,
            x: category_scale.band_center(index),
            label: category.to_owned(),
        })
        .collect();

    let value_ticks = tick_policy
        .select(dataset.mean(), dataset.max_value())
        .into_iter()
        .map(|value| ValueTick {
            value,
            y: value_scale.map(value),
            label: value.to_string(),
        })
        .collect();

    CartesianAxes {
        baseline: AxisRule {
            x1: 0.0,
            y1: surface.height,
            x2: surface.width,
            y2: surface.height,
        },
        value_axis: AxisRule {
            x1: 0.0,
            y1: 0.0,
            x2: 0.0,
            y2: surface.height,
        },
        category_ticks,
        value_ticks,
    }
}
