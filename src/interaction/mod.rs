
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::{ChartKind, DrawingSurface};
use crate::error::{ChartError, ChartResult};

pub use hit_test::{resolve_hit, resolve_index, resolve_spoke, resolve_wedge};

/// Class marker carried by the tooltip overlay element.
pub const TOOLTIP_CLASS: &str = "chart-tooltip";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HorizontalSide {
    Left,
    #[default]
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VerticalSide {
    Above,
    #[default]
    Below,
}

/// Side of the pointer the tooltip was placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TooltipSide {
    pub horizontal: HorizontalSide,
    pub vertical: VerticalSide,
}

/// Value shown in a tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TooltipValue {
    Number(f64),
    /// Whole-number share of a pie total.
    Percent(f64),
}

impl Default for TooltipValue {
    fn default() -> Self {
        Self::Number(0.0)
    }
}

impl fmt::Display for TooltipValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Percent(value) => write!(f, "{value}%"),
        }
    }
}

/// Public tooltip state exposed to host applications.
///
/// Coordinates are surface-local pixels of the tooltip's anchor corner.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TooltipState {
    pub visible: bool,
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub value: TooltipValue,
    pub text: String,
    pub side: TooltipSide,
}

/// Pointer-relative tooltip offsets; the side flips at the surface midlines
/// so the tooltip stays inside the surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipPlacementBehavior {
    pub right_offset_px: f64,
    pub left_offset_px: f64,
    pub below_offset_px: f64,
    pub above_offset_px: f64,
}

impl Default for TooltipPlacementBehavior {
    fn default() -> Self {
        Self {
            right_offset_px: 30.0,
            left_offset_px: 200.0,
            below_offset_px: 10.0,
            above_offset_px: 130.0,
        }
    }
}

impl TooltipPlacementBehavior {
    pub fn validate(self) -> ChartResult<Self> {
        for (name, value) in [
            ("right", self.right_offset_px),
            ("left", self.left_offset_px),
            ("below", self.below_offset_px),
            ("above", self.above_offset_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "tooltip {name} offset must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }

    #[must_use]
    pub fn place(self, pointer_x: f64, pointer_y: f64, surface: DrawingSurface) -> (f64, f64, TooltipSide) {
        let (mid_x, mid_y) = surface.center();
        let (x, horizontal) = if pointer_x < mid_x {
            (pointer_x + self.right_offset_px, HorizontalSide::Right)
        } else {
            (pointer_x - self.left_offset_px, HorizontalSide::Left)
        };
        let (y, vertical) = if pointer_y < mid_y {
            (pointer_y + self.below_offset_px, VerticalSide::Below)
        } else {
            (pointer_y - self.above_offset_px, VerticalSide::Above)
        };
        (
            x,
            y,
            TooltipSide {
                horizontal,
                vertical,
            },
        )
    }
}

/// Data handed to tooltip text formatters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipContext<'a> {
    pub kind: ChartKind,
    pub index: usize,
    pub category: &'a str,
    pub value: TooltipValue,
}

pub type TooltipFormatter = Arc<dyn Fn(&TooltipContext<'_>) -> String + Send + Sync>;

/// Default tooltip text: `label: <category>, value: <value>` for cartesian
/// and radar charts, `<category>: <percent>%` for pie charts.
#[must_use]
pub fn default_tooltip_text(context: &TooltipContext<'_>) -> String {
    match context.value {
        TooltipValue::Percent(_) => format!("{}: {}", context.category, context.value),
        TooltipValue::Number(_) => {
            format!("label: {}, value: {}", context.category, context.value)
        }
    }
}

/// Pointer and hover state of the current draw cycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InteractionState {
    generation: u64,
    cursor: Option<(f64, f64)>,
    hovered: Option<usize>,
    tooltip: TooltipState,
}

impl InteractionState {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn cursor(&self) -> Option<(f64, f64)> {
        self.cursor
    }

    #[must_use]
    pub fn hovered_index(&self) -> Option<usize> {
        self.hovered
    }

    #[must_use]
    pub fn tooltip(&self) -> &TooltipState {
        &self.tooltip
    }

    /// Drops all pointer state and binds to a freshly drawn surface.
    pub fn rebind(&mut self, generation: u64) {
        *self = Self {
            generation,
            ..Self::default()
        };
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.cursor = Some((x, y));
    }

    pub fn show(&mut self, index: usize, tooltip: TooltipState) {
        self.hovered = Some(index);
        self.tooltip = tooltip;
    }

    /// Hides the tooltip and clears highlights while keeping the cursor.
    ///
    /// The tooltip content is reset too, so a hidden tooltip never carries
    /// the last hovered datum.
    pub fn hide(&mut self) {
        self.hovered = None;
        self.tooltip = TooltipState::default();
    }

    pub fn on_pointer_leave(&mut self) {
        self.cursor = None;
        self.hide();
    }
}
