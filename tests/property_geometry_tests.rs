use chart_geometry::core::{
    CategoryScale, ChartKind, DataPoint, Dataset, DrawingSurface, InnerPadding, LinearScale,
    PieSortOrder, SceneOptions, Viewport, build_scene, layout_wedge_angles,
};
use chart_geometry::interaction::resolve_index;
use proptest::prelude::*;
use std::f64::consts::TAU;

fn labels(count: usize) -> Vec<String> {
    (0..count).map(|index| format!("c{index}")).collect()
}

proptest! {
    #[test]
    fn category_bands_tile_the_width_in_order(
        count in 1usize..64,
        width in 1.0f64..5_000.0
    ) {
        let names = labels(count);
        let scale = CategoryScale::new(names.iter().map(String::as_str), width).expect("scale");

        let first = scale.band(0).expect("first band");
        prop_assert_eq!(first.0, 0.0);
        for index in 1..count {
            let previous = scale.band(index - 1).expect("band");
            let current = scale.band(index).expect("band");
            prop_assert_eq!(previous.1, current.0);
            prop_assert!(current.1 > current.0);
        }
        let last = scale.band(count - 1).expect("last band");
        prop_assert!((last.1 - width).abs() <= width * 1e-12);
    }

    #[test]
    fn linear_scale_maps_zero_to_extent_and_max_to_zero(
        mut values in prop::collection::vec(0.0f64..1_000_000.0, 0..32),
        peak in 0.001f64..1_000_000.0,
        extent in 1.0f64..4_000.0
    ) {
        values.push(peak);
        let scale = LinearScale::for_values(values.iter().copied(), extent).expect("scale");
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        prop_assert_eq!(scale.map(0.0), extent);
        prop_assert!(scale.map(max).abs() <= 1e-9 * extent);
    }

    #[test]
    fn pie_wedges_sum_to_a_full_turn(
        mut values in prop::collection::vec(0.0f64..1_000_000.0, 0..32),
        peak in 0.001f64..1_000_000.0,
        descending in any::<bool>()
    ) {
        values.push(peak);
        let order = if descending { PieSortOrder::Descending } else { PieSortOrder::Input };
        let wedges = layout_wedge_angles(&values, order).expect("angles");

        let total: f64 = wedges.iter().map(|wedge| wedge.sweep()).sum();
        prop_assert!((total - TAU).abs() <= 1e-9);
        let last_end = wedges.iter().map(|wedge| wedge.end_angle).fold(0.0, f64::max);
        prop_assert!((last_end - TAU).abs() <= 1e-9);
    }

    #[test]
    fn hit_test_agrees_with_category_bands(
        count in 1usize..64,
        width in 10.0f64..5_000.0,
        pick in any::<prop::sample::Index>(),
        fraction in 0.01f64..0.99,
        overshoot in 0.001f64..1_000.0
    ) {
        let names = labels(count);
        let scale = CategoryScale::new(names.iter().map(String::as_str), width).expect("scale");
        let index = pick.index(count);
        let (start, end) = scale.band(index).expect("band");
        let x = start + fraction * (end - start);

        prop_assert_eq!(resolve_index(x, &scale), Some(index));
        prop_assert_eq!(resolve_index(width + overshoot, &scale), None);
        prop_assert_eq!(resolve_index(-overshoot, &scale), None);
    }

    #[test]
    fn drawing_twice_yields_identical_geometry(
        values in prop::collection::vec(0.5f64..100.0, 1..24),
        kind_pick in 0usize..4
    ) {
        let kind = [ChartKind::Bar, ChartKind::Line, ChartKind::Pie, ChartKind::Polygon][kind_pick];
        let dataset = Dataset::new(
            values
                .iter()
                .enumerate()
                .map(|(index, value)| DataPoint::new(format!("c{index}"), *value))
                .collect(),
        )
        .expect("dataset");
        let surface = DrawingSurface::inside(Viewport::new(640.0, 480.0), InnerPadding::uniform(20.0))
            .expect("surface");
        let options = SceneOptions::default();

        let first = build_scene(kind, &dataset, surface, &options, 1).expect("first draw");
        let second = build_scene(kind, &dataset, surface, &options, 1).expect("second draw");
        prop_assert_eq!(first, second);
    }
}
