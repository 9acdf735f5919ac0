use crate::core::{DrawingSurface, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::TooltipState;
use crate::render::{
    CanvasLayerKind, CirclePrimitive, LayerPrimitives, LinePrimitive, PathPrimitive,
    RectPrimitive, TextPrimitive,
};

/// Backend-agnostic scene for one chart draw pass.
///
/// Primitives are in viewport pixels; the surface origin is already applied.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub surface: DrawingSurface,
    pub layers: Vec<LayerPrimitives>,
    /// Tooltip overlay; coordinates are surface-local.
    pub tooltip: TooltipState,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport, surface: DrawingSurface) -> Self {
        Self {
            viewport,
            surface,
            layers: CanvasLayerKind::CANONICAL_ORDER
                .into_iter()
                .map(LayerPrimitives::empty)
                .collect(),
            tooltip: TooltipState::default(),
        }
    }

    #[must_use]
    pub fn layer(&self, kind: CanvasLayerKind) -> Option<&LayerPrimitives> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    fn layer_mut(&mut self, kind: CanvasLayerKind) -> &mut LayerPrimitives {
        let position = match self.layers.iter().position(|layer| layer.kind == kind) {
            Some(position) => position,
            None => {
                self.layers.push(LayerPrimitives::empty(kind));
                self.layers.len() - 1
            }
        };
        &mut self.layers[position]
    }

    pub fn push_rect(&mut self, kind: CanvasLayerKind, rect: RectPrimitive) {
        self.layer_mut(kind).rects.push(rect);
    }

    pub fn push_path(&mut self, kind: CanvasLayerKind, path: PathPrimitive) {
        self.layer_mut(kind).paths.push(path);
    }

    pub fn push_line(&mut self, kind: CanvasLayerKind, line: LinePrimitive) {
        self.layer_mut(kind).lines.push(line);
    }

    pub fn push_circle(&mut self, kind: CanvasLayerKind, circle: CirclePrimitive) {
        self.layer_mut(kind).circles.push(circle);
    }

    pub fn push_text(&mut self, kind: CanvasLayerKind, text: TextPrimitive) {
        self.layer_mut(kind).texts.push(text);
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: TooltipState) -> Self {
        self.tooltip = tooltip;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for layer in &self.layers {
            for rect in &layer.rects {
                rect.validate()?;
            }
            for path in &layer.paths {
                path.validate()?;
            }
            for line in &layer.lines {
                line.validate()?;
            }
            for circle in &layer.circles {
                circle.validate()?;
            }
            for text in &layer.texts {
                text.validate()?;
            }
        }

        if self.tooltip.visible && (!self.tooltip.x.is_finite() || !self.tooltip.y.is_finite()) {
            return Err(ChartError::InvalidData(
                "tooltip position must be finite".to_owned(),
            ));
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(LayerPrimitives::is_empty)
    }

    #[must_use]
    pub fn rect_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.rects.len()).sum()
    }

    #[must_use]
    pub fn path_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.paths.len()).sum()
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.lines.len()).sum()
    }

    #[must_use]
    pub fn circle_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.circles.len()).sum()
    }

    #[must_use]
    pub fn text_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.texts.len()).sum()
    }
}
