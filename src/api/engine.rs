use crate::core::{ChartScene, Dataset, Viewport};
use crate::error::ChartResult;
use crate::interaction::{InteractionState, TooltipFormatter};
use crate::render::Renderer;

use super::{ChartEngineConfig, RenderStyle, render_coordinator::RenderCoordinator};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the dataset, the mounted surface size and the scene of
/// the current draw cycle. Every draw rebuilds the scene from scratch and
/// rebinds pointer state; pointer events only touch hover and tooltip state.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartEngineConfig,
    pub(super) render_style: RenderStyle,
    pub(super) dataset: Option<Dataset>,
    pub(super) viewport: Option<Viewport>,
    pub(super) scene: Option<ChartScene>,
    pub(super) interaction: InteractionState,
    pub(super) generation: u64,
    pub(super) tooltip_formatter: Option<TooltipFormatter>,
}

impl<R: Renderer> ChartEngine<R> {
    /// Renders the current scene and hover state.
    pub fn render(&mut self) -> ChartResult<()> {
        RenderCoordinator::render(self)
    }

    /// Renders the frame into an external cairo context.
    ///
    /// This path is used by GTK draw callbacks while keeping the renderer
    /// implementation decoupled from GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        RenderCoordinator::render_on_cairo_context(self, context)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
