use approx::assert_relative_eq;
use chart_geometry::core::{
    DataPoint, Dataset, DrawingSurface, InnerPadding, PieShapeBehavior, PieSortOrder, Viewport,
    layout_wedge_angles, project_wedges,
};
use chart_geometry::interaction::resolve_wedge;
use kurbo::{Point, Shape};

fn surface() -> DrawingSurface {
    DrawingSurface::inside(Viewport::new(400.0, 300.0), InnerPadding::default()).expect("surface")
}

fn sample_values() -> Vec<f64> {
    vec![10.0, 35.0, 90.0, 73.0]
}

#[test]
fn wedges_form_a_centered_donut() {
    let angles = layout_wedge_angles(&sample_values(), PieSortOrder::Input).expect("angles");
    let wedges = project_wedges(&angles, surface(), PieShapeBehavior::default());

    assert_eq!(wedges.len(), 4);
    let first = wedges[0];
    assert_eq!(first.center(), Point::new(200.0, 150.0));
    assert_relative_eq!(first.inner_radius, 105.0, epsilon = 1e-9);
    assert_relative_eq!(first.outer_radius, 135.0, epsilon = 1e-9);
    assert_relative_eq!(first.hover_outer_radius, 150.0, epsilon = 1e-9);
    assert_eq!(first.floored_percentage(), 4.0);
}

#[test]
fn hovered_outline_grows_to_the_full_bound() {
    let angles = layout_wedge_angles(&sample_values(), PieSortOrder::Input).expect("angles");
    let wedges = project_wedges(&angles, surface(), PieShapeBehavior::default());
    let wedge = wedges[2];

    let resting = wedge.path(false).bounding_box();
    let hovered = wedge.path(true).bounding_box();
    assert!(hovered.area() > resting.area());
}

#[test]
fn point_in_path_resolves_the_wedge_under_the_pointer() {
    let angles = layout_wedge_angles(&sample_values(), PieSortOrder::Input).expect("angles");
    let wedges = project_wedges(&angles, surface(), PieShapeBehavior::default());

    // Just clockwise of 12 o'clock, inside the ring.
    assert_eq!(resolve_wedge(Point::new(205.0, 30.0), &wedges, None), Some(0));
    // 6 o'clock falls inside the third wedge.
    assert_eq!(resolve_wedge(Point::new(200.0, 270.0), &wedges, None), Some(2));
    // The donut hole and the outside resolve to nothing.
    assert_eq!(resolve_wedge(Point::new(200.0, 150.0), &wedges, None), None);
    assert_eq!(resolve_wedge(Point::new(5.0, 5.0), &wedges, None), None);
}

#[test]
fn hovered_wedge_keeps_the_pointer_on_its_grown_rim() {
    let angles = layout_wedge_angles(&sample_values(), PieSortOrder::Input).expect("angles");
    let wedges = project_wedges(&angles, surface(), PieShapeBehavior::default());
    let rim = Point::new(203.0, 10.0);

    assert_eq!(resolve_wedge(rim, &wedges, None), None);
    assert_eq!(resolve_wedge(rim, &wedges, Some(0)), Some(0));
}

#[test]
fn descending_order_starts_with_the_largest_wedge() {
    let dataset = Dataset::new(vec![
        DataPoint::new("a", 10.0),
        DataPoint::new("b", 35.0),
        DataPoint::new("c", 90.0),
    ])
    .expect("dataset");
    let values: Vec<f64> = dataset.values().collect();
    let angles = layout_wedge_angles(&values, PieSortOrder::Descending).expect("angles");

    assert_eq!(angles[2].start_angle, 0.0);
    assert_eq!(angles[1].start_angle, angles[2].end_angle);
    assert_eq!(angles[0].start_angle, angles[1].end_angle);
}

#[test]
fn behavior_requires_inner_radius_below_outer() {
    let behavior = PieShapeBehavior {
        inner_radius_ratio: 0.95,
        ..PieShapeBehavior::default()
    };
    assert!(behavior.validate().is_err());
}
