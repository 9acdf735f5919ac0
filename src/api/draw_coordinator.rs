use tracing::{debug, warn};

use crate::core::{DrawingSurface, build_scene};
use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Renderer};

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Runs one full draw cycle: scales, shapes, pointer rebinding, render.
    ///
    /// The previous scene is discarded before anything is built. On failure
    /// the engine keeps no scene, an empty surface is rendered when possible
    /// and the error is returned to the host.
    pub fn draw(&mut self) -> ChartResult<()> {
        let viewport = self.viewport.ok_or(ChartError::SurfaceNotMounted)?;
        let dataset = self.dataset.as_ref().ok_or(ChartError::EmptyDataset)?;

        self.generation += 1;
        self.scene = None;
        self.interaction.rebind(self.generation);

        let built = DrawingSurface::inside(viewport, self.config.inner_padding).and_then(|surface| {
            build_scene(
                self.config.kind,
                dataset,
                surface,
                &self.config.scene_options(),
                self.generation,
            )
        });

        match built {
            Ok(scene) => {
                debug!(
                    generation = self.generation,
                    kind = ?scene.kind,
                    count = scene.datum_count(),
                    surface_width = scene.surface.width,
                    surface_height = scene.surface.height,
                    "chart drawn"
                );
                self.scene = Some(scene);
                self.render()
            }
            Err(err) => {
                warn!(
                    generation = self.generation,
                    error = %err,
                    "draw failed; surface left empty"
                );
                let surface = DrawingSurface::inside(viewport, self.config.inner_padding)
                    .unwrap_or_else(|_| DrawingSurface::covering(viewport));
                self.renderer.render(&RenderFrame::new(viewport, surface))?;
                Err(err)
            }
        }
    }
}
