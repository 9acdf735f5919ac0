use chart_geometry::ChartError;
use chart_geometry::api::{ChartEngine, ChartEngineConfig, StaticSurfaceHost};
use chart_geometry::core::{ChartKind, ChartShapes, DataPoint, InnerPadding, Viewport};
use chart_geometry::render::NullRenderer;

fn sample_points() -> Vec<DataPoint> {
    vec![
        DataPoint::new("a", 10.0),
        DataPoint::new("b", 35.0),
        DataPoint::new("c", 90.0),
        DataPoint::new("d", 73.0),
    ]
}

fn host() -> StaticSurfaceHost {
    StaticSurfaceHost::new().with_mount("chart", Viewport::new(400.0, 300.0))
}

fn engine(kind: ChartKind) -> ChartEngine<NullRenderer> {
    ChartEngine::new(NullRenderer::default(), ChartEngineConfig::new(kind, "chart"))
        .expect("engine init")
}

#[test]
fn engine_smoke_flow() {
    let mut engine = engine(ChartKind::Bar);
    engine.set_data(sample_points()).expect("set data");
    assert!(engine.scene().is_none(), "nothing is drawn before mount");

    engine.mount(&host()).expect("mount");
    assert_eq!(engine.generation(), 1);

    let scene = engine.scene().expect("scene");
    let ChartShapes::Bar { bars, .. } = &scene.shapes else {
        panic!("expected bar shapes");
    };
    let category_scale = scene.category_scale.as_ref().expect("category scale");
    assert_eq!(category_scale.bandwidth(), 100.0);
    assert_eq!(bars[2].y, 0.0);
    assert_eq!(bars[2].height, 300.0);

    let tooltip = engine.pointer_move(150.0, 100.0).expect("pointer move");
    assert!(tooltip.visible);
    assert_eq!(engine.hovered_index(), Some(1));
    assert_eq!(tooltip.text, "label: b, value: 35");

    let renderer = engine.into_renderer();
    assert_eq!(renderer.render_count, 2);
}

#[test]
fn mount_fails_fast_when_the_element_is_missing() {
    let mut engine = engine(ChartKind::Line);
    engine.set_data(sample_points()).expect("set data");

    let err = engine
        .mount(&StaticSurfaceHost::new())
        .expect_err("missing mount must fail");
    assert_eq!(
        err,
        ChartError::SurfaceNotFound {
            mount_id: "chart".to_owned()
        }
    );
    assert!(!engine.is_mounted());
}

#[test]
fn resize_before_mount_is_rejected() {
    let mut engine = engine(ChartKind::Pie);
    let err = engine
        .resize(Viewport::new(200.0, 200.0))
        .expect_err("not mounted");
    assert_eq!(err, ChartError::SurfaceNotMounted);
}

#[test]
fn invalid_datasets_are_rejected_at_the_boundary() {
    let mut engine = engine(ChartKind::Bar);
    engine.mount(&host()).expect("mount without data");

    assert_eq!(
        engine.set_data(Vec::new()).expect_err("empty"),
        ChartError::EmptyDataset
    );
    assert!(matches!(
        engine
            .set_data(vec![DataPoint::new("a", 1.0), DataPoint::new("a", 2.0)])
            .expect_err("duplicate"),
        ChartError::DuplicateCategory { .. }
    ));
    assert_eq!(
        engine
            .set_data(vec![DataPoint::new("a", f64::NAN)])
            .expect_err("nan"),
        ChartError::NonFiniteValue { index: 0 }
    );
    assert!(engine.dataset().is_none());
    assert_eq!(engine.generation(), 0);
}

#[test]
fn all_zero_values_fail_the_draw_and_leave_the_surface_empty() {
    let mut engine = engine(ChartKind::Bar);
    engine.set_data(sample_points()).expect("set data");
    engine.mount(&host()).expect("mount");
    assert!(engine.scene().is_some());

    let err = engine
        .set_data(vec![DataPoint::new("a", 0.0), DataPoint::new("b", 0.0)])
        .expect_err("degenerate");
    assert_eq!(err, ChartError::DegenerateValueDomain { max: 0.0 });
    assert!(engine.scene().is_none());

    let renderer = engine.into_renderer();
    let frame = renderer.last_frame().expect("empty frame rendered");
    assert!(frame.is_empty());
}

#[test]
fn negative_pie_values_fail_the_draw() {
    let mut engine = engine(ChartKind::Pie);
    engine.mount(&host()).expect("mount");
    let err = engine
        .set_data(vec![DataPoint::new("a", 5.0), DataPoint::new("b", -1.0)])
        .expect_err("negative");
    assert_eq!(err, ChartError::NegativeValue { index: 1 });
}

#[test]
fn padding_that_swallows_the_viewport_is_an_invalid_viewport() {
    let config = ChartEngineConfig::new(ChartKind::Bar, "chart")
        .with_inner_padding(InnerPadding::uniform(250.0));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_data(sample_points()).expect("set data before mount");

    let err = engine.mount(&host()).expect_err("no room left");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));
}

#[test]
fn blank_mount_id_is_rejected() {
    let result = ChartEngine::new(
        NullRenderer::default(),
        ChartEngineConfig::new(ChartKind::Bar, "  "),
    );
    assert!(matches!(result, Err(ChartError::InvalidData(_))));
}

#[test]
fn shrinking_below_the_padding_clears_the_rendered_chart() {
    let config = ChartEngineConfig::new(ChartKind::Bar, "chart")
        .with_inner_padding(InnerPadding::uniform(20.0));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_data(sample_points()).expect("set data");
    engine.mount(&host()).expect("mount");
    assert_eq!(engine.renderer().last_rect_count, 8);

    let err = engine
        .resize(Viewport::new(30.0, 30.0))
        .expect_err("no room left");
    assert_eq!(
        err,
        ChartError::InvalidViewport {
            width: -10.0,
            height: -10.0
        }
    );
    assert!(engine.scene().is_none());

    let frame = engine.renderer().last_frame().expect("empty frame rendered");
    assert!(frame.is_empty());
    assert_eq!(frame.surface.width, 30.0);
    assert_eq!(engine.renderer().last_rect_count, 0);
}

#[test]
fn removed_mount_element_is_no_longer_found() {
    let mut host = host().with_mount("spare", Viewport::new(200.0, 100.0));
    assert_eq!(host.mount_ids().collect::<Vec<_>>(), vec!["chart", "spare"]);

    assert_eq!(
        host.remove_mount("chart"),
        Some(Viewport::new(400.0, 300.0))
    );
    assert_eq!(host.mount_ids().collect::<Vec<_>>(), vec!["spare"]);

    let mut engine = engine(ChartKind::Bar);
    assert!(matches!(
        engine.mount(&host),
        Err(ChartError::SurfaceNotFound { .. })
    ));

    assert_eq!(host.set_mount("chart", Viewport::new(300.0, 200.0)), None);
    engine.mount(&host).expect("mount after re-adding");
    assert_eq!(engine.viewport(), Some(Viewport::new(300.0, 200.0)));
}
