pub mod axis;
pub mod bar_series;
pub mod line_series;
pub mod pie_series;
pub mod polygon_series;
pub mod scale;
pub mod scene;
pub mod ticks;
pub mod types;

pub use axis::{AxisRule, CartesianAxes, CategoryTick, ValueTick, build_cartesian_axes};
pub use bar_series::{
    BandHighlightGeometry, BarGeometry, BarShapeBehavior, project_band_highlights, project_bars,
};
pub use line_series::{LineShapeBehavior, LineVertex, line_path, project_line_vertices};
pub use pie_series::{ARC_TOLERANCE, PieShapeBehavior, WedgeGeometry, project_wedges};
pub use polygon_series::{
    GridRing, PolygonGeometry, PolygonShapeBehavior, PolygonVertex, RadialLabel, Spoke,
    polar_point, project_polygon, spoke_angle,
};
pub use scale::{
    CategoryScale, LinearScale, PieSortOrder, ValueScale, ValueScaleKind, WedgeAngles,
    build_value_scale, layout_wedge_angles,
};
pub use scene::{ChartKind, ChartScene, ChartShapes, SceneOptions, build_scene};
pub use ticks::{TickRounding, ValueTickPolicy};
pub use types::{DataPoint, Dataset, DrawingSurface, InnerPadding, Viewport};
