use std::sync::Arc;

use tracing::trace;

use crate::core::{ChartKind, ChartScene, ChartShapes, Dataset};
use crate::error::ChartResult;
use crate::interaction::{
    TooltipContext, TooltipFormatter, TooltipState, TooltipValue, default_tooltip_text,
    resolve_hit,
};
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Pointer moved to surface-local `(x, y)`.
    ///
    /// Resolves the hovered datum, updates hover and tooltip state, re-renders
    /// and returns the resulting tooltip. Without a scene the tooltip stays
    /// hidden.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<TooltipState> {
        let Some(scene) = self.scene.as_ref() else {
            return Ok(self.interaction.tooltip().clone());
        };
        self.interaction.on_pointer_move(x, y);

        let hit = resolve_hit(scene, x, y, self.interaction.hovered_index());
        let tooltip = match (hit, self.dataset.as_ref()) {
            (Some(index), Some(dataset)) => {
                compose_tooltip(self, scene, dataset, index, x, y).map(|state| (index, state))
            }
            _ => None,
        };

        match tooltip {
            Some((index, state)) => {
                trace!(x, y, index, "pointer hit");
                self.interaction.show(index, state);
            }
            None => {
                trace!(x, y, "pointer miss");
                self.interaction.hide();
            }
        }

        self.render()?;
        Ok(self.interaction.tooltip().clone())
    }

    /// Pointer moved in viewport coordinates (before inner padding).
    pub fn pointer_move_in_viewport(&mut self, x: f64, y: f64) -> ChartResult<TooltipState> {
        let (origin_x, origin_y) = self
            .scene
            .as_ref()
            .map_or((0.0, 0.0), |scene| (scene.surface.origin_x, scene.surface.origin_y));
        self.pointer_move(x - origin_x, y - origin_y)
    }

    /// Pointer left the surface: hides the tooltip and restores resting shapes.
    pub fn pointer_leave(&mut self) -> ChartResult<()> {
        self.interaction.on_pointer_leave();
        trace!("pointer leave");
        if self.scene.is_some() {
            self.render()?;
        }
        Ok(())
    }

    /// Replaces the tooltip text formatter.
    pub fn set_tooltip_formatter(
        &mut self,
        formatter: impl Fn(&TooltipContext<'_>) -> String + Send + Sync + 'static,
    ) {
        self.tooltip_formatter = Some(Arc::new(formatter));
    }

    pub fn clear_tooltip_formatter(&mut self) {
        self.tooltip_formatter = None;
    }

    #[must_use]
    pub fn tooltip_formatter(&self) -> Option<TooltipFormatter> {
        self.tooltip_formatter.clone()
    }
}

fn compose_tooltip<R: Renderer>(
    engine: &ChartEngine<R>,
    scene: &ChartScene,
    dataset: &Dataset,
    index: usize,
    pointer_x: f64,
    pointer_y: f64,
) -> Option<TooltipState> {
    let datum = dataset.get(index)?;
    let value = match (&scene.shapes, scene.kind) {
        (ChartShapes::Pie { wedges }, ChartKind::Pie) => {
            TooltipValue::Percent(wedges.get(index)?.floored_percentage())
        }
        _ => TooltipValue::Number(datum.value),
    };
    let context = TooltipContext {
        kind: scene.kind,
        index,
        category: &datum.category,
        value,
    };
    let text = match &engine.tooltip_formatter {
        Some(formatter) => formatter(&context),
        None => default_tooltip_text(&context),
    };
    let (x, y, side) = engine
        .config
        .tooltip
        .place(pointer_x, pointer_y, scene.surface);

    Some(TooltipState {
        visible: true,
        x,
        y,
        label: datum.category.clone(),
        value,
        text,
        side,
    })
}
