use tracing::debug;

use crate::error::ChartResult;
use crate::interaction::InteractionState;
use crate::render::Renderer;

use super::validation::validate_engine_config;
use super::{ChartEngine, ChartEngineConfig, RenderStyle};

impl<R: Renderer> ChartEngine<R> {
    /// Creates an unmounted engine without data.
    ///
    /// Nothing is drawn until both [`ChartEngine::set_data`] and
    /// [`ChartEngine::mount`] have succeeded.
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        validate_engine_config(&config)?;
        debug!(
            kind = ?config.kind,
            mount_id = %config.mount_id,
            "chart engine created"
        );

        Ok(Self {
            renderer,
            config,
            render_style: RenderStyle::default(),
            dataset: None,
            viewport: None,
            scene: None,
            interaction: InteractionState::default(),
            generation: 0,
            tooltip_formatter: None,
        })
    }
}
