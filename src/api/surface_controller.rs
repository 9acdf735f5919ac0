use tracing::{debug, warn};

use crate::core::{InnerPadding, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{ChartEngine, SurfaceHost};

impl<R: Renderer> ChartEngine<R> {
    /// Resolves the configured mount element on `host` and draws into it.
    ///
    /// Fails fast with [`ChartError::SurfaceNotFound`] when the host has no
    /// element for the mount id.
    pub fn mount(&mut self, host: &impl SurfaceHost) -> ChartResult<()> {
        let Some(viewport) = host.mount_size(&self.config.mount_id) else {
            warn!(mount_id = %self.config.mount_id, "mount element not found");
            return Err(ChartError::SurfaceNotFound {
                mount_id: self.config.mount_id.clone(),
            });
        };
        validate_viewport(viewport)?;
        debug!(
            mount_id = %self.config.mount_id,
            width = viewport.width,
            height = viewport.height,
            "chart mounted"
        );
        self.viewport = Some(viewport);
        self.redraw_if_ready()
    }

    /// Size-change notification from the mount element.
    pub fn resize(&mut self, viewport: Viewport) -> ChartResult<()> {
        if self.viewport.is_none() {
            return Err(ChartError::SurfaceNotMounted);
        }
        validate_viewport(viewport)?;
        debug!(
            width = viewport.width,
            height = viewport.height,
            "chart resized"
        );
        self.viewport = Some(viewport);
        self.redraw_if_ready()
    }

    /// Changes the pixels reserved around the drawing surface and redraws.
    pub fn set_inner_padding(&mut self, padding: InnerPadding) -> ChartResult<()> {
        self.config.inner_padding = padding.validate()?;
        self.redraw_if_ready()
    }

    /// Forgets the mount element, its scene and all pointer state.
    pub fn unmount(&mut self) {
        debug!(mount_id = %self.config.mount_id, "chart unmounted");
        self.viewport = None;
        self.scene = None;
        self.interaction.on_pointer_leave();
    }

    fn redraw_if_ready(&mut self) -> ChartResult<()> {
        if self.viewport.is_some() && self.dataset.is_some() {
            self.draw()?;
        }
        Ok(())
    }
}

fn validate_viewport(viewport: Viewport) -> ChartResult<()> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    Ok(())
}
