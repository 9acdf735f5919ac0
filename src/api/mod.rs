//! Engine facade: configuration, mounting, the draw cycle and pointer binding.

mod data_controller;
mod draw_coordinator;
mod engine;
mod engine_accessors;
mod engine_config;
mod engine_init;
mod interaction_controller;
mod json_contract;
mod render_coordinator;
mod render_frame_builder;
mod render_style;
mod surface_controller;
mod surface_host;
mod validation;

pub use engine::ChartEngine;
pub use engine_config::ChartEngineConfig;
pub use json_contract::{SCENE_JSON_SCHEMA_V1, SceneJsonContractV1};
pub use render_style::RenderStyle;
pub use surface_host::{StaticSurfaceHost, SurfaceHost};
