use serde::Serialize;

use crate::core::ChartScene;
use crate::error::{ChartError, ChartResult};
use crate::interaction::TooltipState;
use crate::render::Renderer;

use super::ChartEngine;

pub const SCENE_JSON_SCHEMA_V1: u32 = 1;

/// Versioned envelope for scene snapshots handed to external tooling.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneJsonContractV1<'a> {
    pub schema_version: u32,
    pub scene: &'a ChartScene,
    pub hovered_index: Option<usize>,
    pub tooltip: &'a TooltipState,
}

impl ChartScene {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize scene json: {e}")))
    }
}

impl<R: Renderer> ChartEngine<R> {
    /// Current scene and hover state as a schema-versioned JSON document.
    pub fn scene_json_pretty(&self) -> ChartResult<String> {
        let scene = self.scene.as_ref().ok_or(ChartError::SurfaceNotMounted)?;
        let payload = SceneJsonContractV1 {
            schema_version: SCENE_JSON_SCHEMA_V1,
            scene,
            hovered_index: self.interaction.hovered_index(),
            tooltip: self.interaction.tooltip(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize scene contract v1: {e}"))
        })
    }
}
