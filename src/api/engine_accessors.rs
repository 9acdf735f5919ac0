use crate::core::{ChartKind, ChartScene, Dataset, DrawingSurface, Viewport};
use crate::error::ChartResult;
use crate::interaction::TooltipState;
use crate::render::Renderer;

use super::validation::validate_render_style;
use super::{ChartEngine, ChartEngineConfig, RenderStyle};

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.config.kind
    }

    #[must_use]
    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    /// Size of the mount element, once mounted.
    #[must_use]
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.viewport.is_some()
    }

    /// Drawing surface of the last successful draw.
    #[must_use]
    pub fn surface(&self) -> Option<DrawingSurface> {
        self.scene.as_ref().map(|scene| scene.surface)
    }

    /// Geometry of the last successful draw; `None` after a failed draw.
    #[must_use]
    pub fn scene(&self) -> Option<&ChartScene> {
        self.scene.as_ref()
    }

    /// Number of draw cycles started so far.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn tooltip_state(&self) -> &TooltipState {
        self.interaction.tooltip()
    }

    #[must_use]
    pub fn hovered_index(&self) -> Option<usize> {
        self.interaction.hovered_index()
    }

    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.render_style
    }

    pub fn set_render_style(&mut self, style: RenderStyle) -> ChartResult<()> {
        self.render_style = validate_render_style(style)?;
        Ok(())
    }
}
