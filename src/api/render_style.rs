use crate::render::Color;

/// Colors and stroke metrics used when turning a scene into a render frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    /// Bars, the line series and hover accents.
    pub series_color: Color,
    pub band_highlight_color: Color,
    pub axis_color: Color,
    pub axis_line_width: f64,
    pub grid_color: Color,
    pub grid_line_width: f64,
    pub grid_dash_px: f64,
    pub label_color: Color,
    pub label_font_size_px: f64,
    /// Gap between an axis and its labels.
    pub label_offset_px: f64,
    pub marker_fill_color: Color,
    pub guide_line_color: Color,
    pub guide_line_width: f64,
    pub wedge_fill_color: Color,
    pub wedge_stroke_color: Color,
    pub wedge_stroke_width: f64,
    pub ring_tint_color: Color,
    pub ring_fill_color: Color,
    pub radar_grid_color: Color,
    /// Stroke of the first grid ring, the only solid one.
    pub radar_solid_ring_width: f64,
    pub radar_dashed_ring_width: f64,
    pub radar_spoke_width: f64,
    pub radar_dash_px: f64,
    pub radar_fill_color: Color,
    pub radar_stroke_color: Color,
    pub radar_stroke_width: f64,
    pub radar_marker_radius_px: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        let white = Color::rgb(1.0, 1.0, 1.0);
        Self {
            series_color: Color::from_rgba8(0x25, 0x3F, 0xEB, 0xFF),
            band_highlight_color: Color::from_rgba8(214, 222, 232, 77),
            axis_color: Color::from_rgba8(0xE4, 0xE4, 0xE4, 0xFF),
            axis_line_width: 3.0,
            grid_color: Color::from_rgba8(0xE4, 0xE4, 0xE4, 0xFF),
            grid_line_width: 1.0,
            grid_dash_px: 5.0,
            label_color: Color::from_rgba8(0x50, 0x50, 0x50, 0xFF),
            label_font_size_px: 14.0,
            label_offset_px: 10.0,
            marker_fill_color: white,
            guide_line_color: Color::from_rgba8(0xB7, 0xB7, 0xB7, 0xFF),
            guide_line_width: 2.0,
            wedge_fill_color: Color::from_rgba8(0x4E, 0x63, 0xEF, 0xFF),
            wedge_stroke_color: white,
            wedge_stroke_width: 1.0,
            ring_tint_color: Color::from_rgba8(0xF7, 0xF7, 0xF7, 0xFF),
            ring_fill_color: white,
            radar_grid_color: Color::from_rgba8(0xEF, 0xEE, 0xEE, 0xFF),
            radar_solid_ring_width: 1.0,
            radar_dashed_ring_width: 2.0,
            radar_spoke_width: 2.0,
            radar_dash_px: 4.0,
            radar_fill_color: Color::from_rgba8(0x3D, 0x58, 0xCF, 0x4D),
            radar_stroke_color: Color::from_rgba8(0x00, 0x1B, 0x8E, 0xFF),
            radar_stroke_width: 1.0,
            radar_marker_radius_px: 4.0,
        }
    }
}
