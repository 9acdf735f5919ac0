use serde::{Deserialize, Serialize};

use crate::core::{
    BarShapeBehavior, ChartKind, InnerPadding, LineShapeBehavior, PieShapeBehavior,
    PolygonShapeBehavior, SceneOptions, ValueTickPolicy,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::TooltipPlacementBehavior;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format. Only `kind` and `mount_id` are
/// required in JSON; every other field falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub kind: ChartKind,
    pub mount_id: String,
    #[serde(default)]
    pub inner_padding: InnerPadding,
    #[serde(default)]
    pub bar: BarShapeBehavior,
    #[serde(default)]
    pub line: LineShapeBehavior,
    #[serde(default)]
    pub pie: PieShapeBehavior,
    #[serde(default)]
    pub polygon: PolygonShapeBehavior,
    /// `None` selects the chart kind's default tick policy.
    #[serde(default)]
    pub value_ticks: Option<ValueTickPolicy>,
    #[serde(default = "default_tooltip_placement")]
    pub tooltip: TooltipPlacementBehavior,
}

impl ChartEngineConfig {
    /// Creates a config with default padding and shape behaviors.
    #[must_use]
    pub fn new(kind: ChartKind, mount_id: impl Into<String>) -> Self {
        Self {
            kind,
            mount_id: mount_id.into(),
            inner_padding: InnerPadding::default(),
            bar: BarShapeBehavior::default(),
            line: LineShapeBehavior::default(),
            pie: PieShapeBehavior::default(),
            polygon: PolygonShapeBehavior::default(),
            value_ticks: None,
            tooltip: default_tooltip_placement(),
        }
    }

    #[must_use]
    pub fn with_inner_padding(mut self, padding: InnerPadding) -> Self {
        self.inner_padding = padding;
        self
    }

    #[must_use]
    pub fn with_bar_behavior(mut self, behavior: BarShapeBehavior) -> Self {
        self.bar = behavior;
        self
    }

    #[must_use]
    pub fn with_line_behavior(mut self, behavior: LineShapeBehavior) -> Self {
        self.line = behavior;
        self
    }

    #[must_use]
    pub fn with_pie_behavior(mut self, behavior: PieShapeBehavior) -> Self {
        self.pie = behavior;
        self
    }

    #[must_use]
    pub fn with_polygon_behavior(mut self, behavior: PolygonShapeBehavior) -> Self {
        self.polygon = behavior;
        self
    }

    /// Overrides the kind's default value-axis tick policy.
    #[must_use]
    pub fn with_value_ticks(mut self, policy: ValueTickPolicy) -> Self {
        self.value_ticks = Some(policy);
        self
    }

    #[must_use]
    pub fn with_tooltip_placement(mut self, behavior: TooltipPlacementBehavior) -> Self {
        self.tooltip = behavior;
        self
    }

    /// Shape settings handed to the scene builder.
    #[must_use]
    pub fn scene_options(&self) -> SceneOptions {
        SceneOptions {
            bar: self.bar,
            line: self.line,
            pie: self.pie,
            polygon: self.polygon,
            value_ticks: self.value_ticks,
        }
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_tooltip_placement() -> TooltipPlacementBehavior {
    TooltipPlacementBehavior::default()
}
