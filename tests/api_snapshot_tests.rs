use chart_geometry::ChartError;
use chart_geometry::api::{
    ChartEngine, ChartEngineConfig, SCENE_JSON_SCHEMA_V1, StaticSurfaceHost,
};
use chart_geometry::core::{
    BarShapeBehavior, ChartKind, DataPoint, InnerPadding, PieShapeBehavior, PieSortOrder,
    ValueTickPolicy, Viewport,
};
use chart_geometry::interaction::TooltipPlacementBehavior;
use chart_geometry::render::NullRenderer;

fn sample_points() -> Vec<DataPoint> {
    vec![
        DataPoint::new("a", 10.0),
        DataPoint::new("b", 35.0),
        DataPoint::new("c", 90.0),
        DataPoint::new("d", 73.0),
    ]
}

#[test]
fn config_json_roundtrip_preserves_every_setting() {
    let config = ChartEngineConfig::new(ChartKind::Bar, "revenue")
        .with_inner_padding(InnerPadding {
            top: 10.0,
            right: 20.0,
            bottom: 30.0,
            left: 40.0,
        })
        .with_bar_behavior(BarShapeBehavior {
            width_ratio: 0.5,
            corner_radius_ratio: 0.0,
        })
        .with_pie_behavior(PieShapeBehavior {
            sort_order: PieSortOrder::Descending,
            ..PieShapeBehavior::default()
        })
        .with_value_ticks(ValueTickPolicy::Nice { count: 5 })
        .with_tooltip_placement(TooltipPlacementBehavior {
            right_offset_px: 12.0,
            ..TooltipPlacementBehavior::default()
        });

    let json = config.to_json_pretty().expect("serialize");
    let restored = ChartEngineConfig::from_json_str(&json).expect("parse");
    assert_eq!(restored, config);
}

#[test]
fn minimal_config_json_falls_back_to_defaults() {
    let config =
        ChartEngineConfig::from_json_str(r#"{"kind":"Pie","mount_id":"donut"}"#).expect("parse");

    assert_eq!(config, ChartEngineConfig::new(ChartKind::Pie, "donut"));
    assert_eq!(config.pie.sort_order, PieSortOrder::Input);
    assert_eq!(config.tooltip.left_offset_px, 200.0);
    assert_eq!(config.value_ticks, None);
}

#[test]
fn malformed_config_json_is_invalid_data() {
    let err = ChartEngineConfig::from_json_str(r#"{"kind":"Donut"}"#).expect_err("bad kind");
    assert!(matches!(err, ChartError::InvalidData(message) if message.contains("parse config")));
}

#[test]
fn scene_json_contract_carries_schema_version_and_hover() {
    let mut engine = ChartEngine::new(
        NullRenderer::default(),
        ChartEngineConfig::new(ChartKind::Bar, "chart"),
    )
    .expect("engine init");
    assert_eq!(
        engine.scene_json_pretty().expect_err("no scene"),
        ChartError::SurfaceNotMounted
    );

    engine.set_data(sample_points()).expect("set data");
    engine
        .mount(&StaticSurfaceHost::new().with_mount("chart", Viewport::new(400.0, 300.0)))
        .expect("mount");
    engine.pointer_move(150.0, 100.0).expect("hover");

    let json = engine.scene_json_pretty().expect("scene json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(
        value["schema_version"].as_u64(),
        Some(u64::from(SCENE_JSON_SCHEMA_V1))
    );
    assert_eq!(value["hovered_index"].as_u64(), Some(1));
    assert_eq!(value["tooltip"]["text"], "label: b, value: 35");
    assert_eq!(value["scene"]["kind"], "Bar");
    assert_eq!(value["scene"]["generation"].as_u64(), Some(1));

    let bars = value["scene"]["shapes"]["Bar"]["bars"]
        .as_array()
        .expect("bars array");
    assert_eq!(bars.len(), 4);
    assert_eq!(bars[2]["height"].as_f64(), Some(300.0));

    let ticks = value["scene"]["axes"]["value_ticks"]
        .as_array()
        .expect("ticks array");
    assert_eq!(ticks.len(), 3);
}

#[test]
fn scene_json_for_pie_lists_wedges_in_dataset_order() {
    let config = ChartEngineConfig::new(ChartKind::Pie, "chart").with_pie_behavior(
        PieShapeBehavior {
            sort_order: PieSortOrder::Descending,
            ..PieShapeBehavior::default()
        },
    );
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_data(sample_points()).expect("set data");
    engine
        .mount(&StaticSurfaceHost::new().with_mount("chart", Viewport::new(400.0, 300.0)))
        .expect("mount");

    let json = engine.scene().expect("scene").to_json_pretty().expect("json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    let wedges = value["shapes"]["Pie"]["wedges"].as_array().expect("wedges");

    let indices: Vec<u64> = wedges
        .iter()
        .filter_map(|wedge| wedge["index"].as_u64())
        .collect();
    assert_eq!(indices, vec![0, 1, 2, 3]);
    assert_eq!(wedges[2]["start_angle"].as_f64(), Some(0.0));
    assert!(value["axes"].is_null());
}
