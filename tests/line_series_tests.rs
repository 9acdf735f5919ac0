use chart_geometry::core::{
    CategoryScale, DataPoint, Dataset, LineShapeBehavior, LinearScale, line_path,
    project_line_vertices,
};
use kurbo::PathEl;

fn sample() -> Dataset {
    Dataset::new(vec![
        DataPoint::new("mon", 10.0),
        DataPoint::new("tue", 35.0),
        DataPoint::new("wed", 90.0),
        DataPoint::new("thu", 73.0),
    ])
    .expect("dataset")
}

#[test]
fn vertices_sit_at_band_centers() {
    let dataset = sample();
    let categories = CategoryScale::new(dataset.categories(), 400.0).expect("categories");
    let values = LinearScale::for_values(dataset.values(), 300.0).expect("values");

    let vertices = project_line_vertices(&dataset, &categories, values).expect("vertices");

    let xs: Vec<f64> = vertices.iter().map(|vertex| vertex.x).collect();
    assert_eq!(xs, vec![50.0, 150.0, 250.0, 350.0]);
    assert_eq!(vertices[2].y, 0.0);
}

#[test]
fn line_path_joins_vertices_with_straight_segments() {
    let dataset = sample();
    let categories = CategoryScale::new(dataset.categories(), 400.0).expect("categories");
    let values = LinearScale::for_values(dataset.values(), 300.0).expect("values");
    let vertices = project_line_vertices(&dataset, &categories, values).expect("vertices");

    let path = line_path(&vertices);
    let elements = path.elements();

    assert_eq!(elements.len(), 4);
    assert!(matches!(elements[0], PathEl::MoveTo(_)));
    assert!(
        elements[1..]
            .iter()
            .all(|element| matches!(element, PathEl::LineTo(_)))
    );
}

#[test]
fn single_vertex_line_has_no_segments() {
    let dataset = Dataset::new(vec![DataPoint::new("solo", 5.0)]).expect("dataset");
    let categories = CategoryScale::new(dataset.categories(), 200.0).expect("categories");
    let values = LinearScale::for_values(dataset.values(), 100.0).expect("values");
    let vertices = project_line_vertices(&dataset, &categories, values).expect("vertices");

    assert_eq!(vertices[0].x, 100.0);
    assert_eq!(line_path(&vertices).elements().len(), 1);
}

#[test]
fn marker_behavior_rejects_non_positive_radius() {
    let behavior = LineShapeBehavior {
        marker_radius_px: 0.0,
        ..LineShapeBehavior::default()
    };
    assert!(behavior.validate().is_err());
}
