use chart_geometry::api::{ChartEngine, ChartEngineConfig, StaticSurfaceHost};
use chart_geometry::core::{ChartKind, DataPoint, InnerPadding, Viewport};
use chart_geometry::interaction::{HorizontalSide, TooltipValue, VerticalSide};
use chart_geometry::render::NullRenderer;

fn sample_points() -> Vec<DataPoint> {
    vec![
        DataPoint::new("a", 10.0),
        DataPoint::new("b", 35.0),
        DataPoint::new("c", 90.0),
        DataPoint::new("d", 73.0),
    ]
}

fn mounted(kind: ChartKind) -> ChartEngine<NullRenderer> {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), ChartEngineConfig::new(kind, "chart"))
            .expect("engine init");
    engine.set_data(sample_points()).expect("set data");
    engine
        .mount(&StaticSurfaceHost::new().with_mount("chart", Viewport::new(400.0, 300.0)))
        .expect("mount");
    engine
}

#[test]
fn bar_hover_places_tooltip_right_and_below_the_pointer() {
    let mut engine = mounted(ChartKind::Bar);

    let tooltip = engine.pointer_move(150.0, 100.0).expect("pointer move");
    assert!(tooltip.visible);
    assert_eq!(tooltip.label, "b");
    assert_eq!(tooltip.value, TooltipValue::Number(35.0));
    assert_eq!(tooltip.text, "label: b, value: 35");
    assert_eq!((tooltip.x, tooltip.y), (180.0, 110.0));
    assert_eq!(tooltip.side.horizontal, HorizontalSide::Right);
    assert_eq!(tooltip.side.vertical, VerticalSide::Below);
    assert_eq!(engine.tooltip_state(), &tooltip);
}

#[test]
fn tooltip_flips_left_and_above_past_the_midlines() {
    let mut engine = mounted(ChartKind::Line);

    let tooltip = engine.pointer_move(350.0, 250.0).expect("pointer move");
    assert_eq!(tooltip.label, "d");
    assert_eq!((tooltip.x, tooltip.y), (150.0, 120.0));
    assert_eq!(tooltip.side.horizontal, HorizontalSide::Left);
    assert_eq!(tooltip.side.vertical, VerticalSide::Above);
}

#[test]
fn moving_across_bands_switches_the_hovered_datum() {
    let mut engine = mounted(ChartKind::Bar);

    engine.pointer_move(10.0, 10.0).expect("first band");
    assert_eq!(engine.hovered_index(), Some(0));
    engine.pointer_move(250.0, 10.0).expect("third band");
    assert_eq!(engine.hovered_index(), Some(2));
    assert_eq!(engine.tooltip_state().label, "c");
}

#[test]
fn pointer_outside_the_bands_hides_the_tooltip() {
    let mut engine = mounted(ChartKind::Bar);
    engine.pointer_move(150.0, 100.0).expect("hover");

    let tooltip = engine.pointer_move(-20.0, 100.0).expect("outside");
    assert!(!tooltip.visible);
    assert_eq!(tooltip.text, "");
    assert_eq!(engine.hovered_index(), None);
}

#[test]
fn pointer_leave_restores_resting_state() {
    let mut engine = mounted(ChartKind::Bar);
    engine.pointer_move(150.0, 100.0).expect("hover");

    engine.pointer_leave().expect("leave");
    assert!(!engine.tooltip_state().visible);
    assert_eq!(engine.hovered_index(), None);
}

#[test]
fn resize_redraws_and_drops_stale_hover() {
    let mut engine = mounted(ChartKind::Bar);
    engine.pointer_move(150.0, 100.0).expect("hover");
    assert_eq!(engine.generation(), 1);

    engine.resize(Viewport::new(800.0, 300.0)).expect("resize");
    assert_eq!(engine.generation(), 2);
    assert_eq!(engine.hovered_index(), None);
    assert!(!engine.tooltip_state().visible);

    let scene = engine.scene().expect("scene");
    assert_eq!(scene.generation, 2);
    let scale = scene.category_scale.as_ref().expect("category scale");
    assert_eq!(scale.bandwidth(), 200.0);

    // Same pointer now lands in the first, wider band.
    engine.pointer_move(150.0, 100.0).expect("hover again");
    assert_eq!(engine.hovered_index(), Some(0));
}

#[test]
fn custom_formatter_replaces_default_text() {
    let mut engine = mounted(ChartKind::Bar);
    engine.set_tooltip_formatter(|context| format!("{} => {}", context.category, context.value));

    let tooltip = engine.pointer_move(150.0, 100.0).expect("pointer move");
    assert_eq!(tooltip.text, "b => 35");

    engine.clear_tooltip_formatter();
    let tooltip = engine.pointer_move(150.0, 100.0).expect("pointer move");
    assert_eq!(tooltip.text, "label: b, value: 35");
}

#[test]
fn pie_tooltip_shows_floored_share_of_total() {
    let mut engine = mounted(ChartKind::Pie);

    let tooltip = engine.pointer_move(205.0, 30.0).expect("pointer move");
    assert!(tooltip.visible);
    assert_eq!(tooltip.value, TooltipValue::Percent(4.0));
    assert_eq!(tooltip.text, "a: 4%");
    assert_eq!((tooltip.x, tooltip.y), (5.0, 40.0));

    let tooltip = engine.pointer_move(200.0, 150.0).expect("donut hole");
    assert!(!tooltip.visible);
    assert!(tooltip.text.is_empty());
    assert!(tooltip.label.is_empty());
}

#[test]
fn polygon_tooltip_reports_the_nearest_spoke() {
    let mut engine = mounted(ChartKind::Polygon);

    let tooltip = engine.pointer_move(200.0, 60.0).expect("pointer move");
    assert_eq!(engine.hovered_index(), Some(0));
    assert_eq!(tooltip.text, "label: a, value: 10");
}

#[test]
fn viewport_pointer_coordinates_subtract_the_padding() {
    let config = ChartEngineConfig::new(ChartKind::Bar, "chart")
        .with_inner_padding(InnerPadding::uniform(20.0));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_data(sample_points()).expect("set data");
    engine
        .mount(&StaticSurfaceHost::new().with_mount("chart", Viewport::new(440.0, 340.0)))
        .expect("mount");

    let tooltip = engine
        .pointer_move_in_viewport(170.0, 120.0)
        .expect("pointer move");
    assert_eq!(tooltip.label, "b");
    assert_eq!((tooltip.x, tooltip.y), (180.0, 110.0));
}

#[test]
fn redraw_with_same_inputs_yields_same_geometry() {
    let mut engine = mounted(ChartKind::Pie);
    let first = engine.scene().expect("scene").clone();

    engine.draw().expect("redraw");
    let second = engine.scene().expect("scene");
    assert_eq!(second.generation, first.generation + 1);
    assert_eq!(second.shapes, first.shapes);
    assert_eq!(second.value_scale, first.value_scale);
}

#[test]
fn rejected_data_keeps_previous_scene() {
    let mut engine = mounted(ChartKind::Line);
    let generation = engine.generation();

    engine
        .set_data(vec![DataPoint::new("x", f64::INFINITY)])
        .expect_err("non-finite");
    assert_eq!(engine.generation(), generation);
    assert_eq!(engine.dataset().map(|dataset| dataset.len()), Some(4));
    assert!(engine.scene().is_some());
}

#[test]
fn pointer_events_without_scene_are_ignored() {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), ChartEngineConfig::new(ChartKind::Bar, "chart"))
            .expect("engine init");
    let tooltip = engine.pointer_move(10.0, 10.0).expect("no scene");
    assert!(!tooltip.visible);
    engine.pointer_leave().expect("leave");
    assert_eq!(engine.renderer().render_count, 0);
}

#[test]
fn unmount_forgets_scene_and_hover() {
    let mut engine = mounted(ChartKind::Bar);
    engine.pointer_move(150.0, 100.0).expect("hover");

    engine.unmount();
    assert!(!engine.is_mounted());
    assert!(engine.scene().is_none());
    assert_eq!(engine.hovered_index(), None);
}
