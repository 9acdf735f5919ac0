//! chart-geometry: chart geometry and interaction engine.
//!
//! Builds scales, shape geometry and hit-testing for bar, line, pie and
//! polygon (radar) charts, and hands an immutable frame of primitives to a
//! pluggable renderer.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
