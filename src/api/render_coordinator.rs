use crate::core::DrawingSurface;
use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Renderer};

use super::ChartEngine;
use super::render_frame_builder::populate_frame;

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

pub(super) struct RenderCoordinator;

impl RenderCoordinator {
    pub(super) fn render<R: Renderer>(engine: &mut ChartEngine<R>) -> ChartResult<()> {
        let frame = engine.build_render_frame()?;
        engine.renderer.render(&frame)
    }

    #[cfg(feature = "cairo-backend")]
    pub(super) fn render_on_cairo_context<R: Renderer + CairoContextRenderer>(
        engine: &mut ChartEngine<R>,
        context: &cairo::Context,
    ) -> ChartResult<()> {
        let frame = engine.build_render_frame()?;
        engine.renderer.render_on_cairo_context(context, &frame)
    }
}

impl<R: Renderer> ChartEngine<R> {
    /// Materializes the current scene and hover state into draw primitives.
    ///
    /// An engine without a scene yields an empty frame for the mounted
    /// surface.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let viewport = self.viewport.ok_or(ChartError::SurfaceNotMounted)?;
        let surface = match &self.scene {
            Some(scene) => scene.surface,
            None => DrawingSurface::inside(viewport, self.config.inner_padding)
                .unwrap_or_else(|_| DrawingSurface::covering(viewport)),
        };
        let mut frame = RenderFrame::new(viewport, surface);
        let Some(scene) = &self.scene else {
            return Ok(frame);
        };
        populate_frame(&mut frame, scene, &self.interaction, self.render_style);
        Ok(frame.with_tooltip(self.interaction.tooltip().clone()))
    }
}
