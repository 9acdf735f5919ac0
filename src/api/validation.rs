use crate::error::{ChartError, ChartResult};

use super::{ChartEngineConfig, RenderStyle};

pub(super) fn validate_engine_config(config: &ChartEngineConfig) -> ChartResult<()> {
    if config.mount_id.trim().is_empty() {
        return Err(ChartError::InvalidData(
            "mount id must not be empty".to_owned(),
        ));
    }
    config.inner_padding.validate()?;
    config.bar.validate()?;
    config.line.validate()?;
    config.pie.validate()?;
    config.polygon.validate()?;
    if let Some(policy) = config.value_ticks {
        policy.validate()?;
    }
    config.tooltip.validate()?;
    Ok(())
}

pub(super) fn validate_render_style(style: RenderStyle) -> ChartResult<RenderStyle> {
    for color in [
        style.series_color,
        style.band_highlight_color,
        style.axis_color,
        style.grid_color,
        style.label_color,
        style.marker_fill_color,
        style.guide_line_color,
        style.wedge_fill_color,
        style.wedge_stroke_color,
        style.ring_tint_color,
        style.ring_fill_color,
        style.radar_grid_color,
        style.radar_fill_color,
        style.radar_stroke_color,
    ] {
        color.validate()?;
    }

    for (name, value) in [
        ("axis_line_width", style.axis_line_width),
        ("grid_line_width", style.grid_line_width),
        ("grid_dash_px", style.grid_dash_px),
        ("guide_line_width", style.guide_line_width),
        ("wedge_stroke_width", style.wedge_stroke_width),
        ("radar_solid_ring_width", style.radar_solid_ring_width),
        ("radar_dashed_ring_width", style.radar_dashed_ring_width),
        ("radar_spoke_width", style.radar_spoke_width),
        ("radar_dash_px", style.radar_dash_px),
        ("radar_stroke_width", style.radar_stroke_width),
        ("radar_marker_radius_px", style.radar_marker_radius_px),
        ("label_font_size_px", style.label_font_size_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "render style `{name}` must be finite and > 0"
            )));
        }
    }

    if !style.label_offset_px.is_finite() || style.label_offset_px < 0.0 {
        return Err(ChartError::InvalidData(
            "render style `label_offset_px` must be finite and >= 0".to_owned(),
        ));
    }

    Ok(style)
}
