use serde::{Deserialize, Serialize};

use super::{CirclePrimitive, LinePrimitive, PathPrimitive, RectPrimitive, TextPrimitive};

/// Paint layers of one chart surface, back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    /// Hover band backgrounds.
    Background,
    Grid,
    Series,
    /// Hover decorations drawn over the series.
    Overlay,
    Axis,
}

impl CanvasLayerKind {
    pub const CANONICAL_ORDER: [Self; 5] = [
        Self::Background,
        Self::Grid,
        Self::Series,
        Self::Overlay,
        Self::Axis,
    ];
}

/// Primitives of one layer; within a layer rects paint first, then paths,
/// lines, circles and finally texts.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerPrimitives {
    pub kind: CanvasLayerKind,
    pub rects: Vec<RectPrimitive>,
    pub paths: Vec<PathPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    #[must_use]
    pub fn empty(kind: CanvasLayerKind) -> Self {
        Self {
            kind,
            rects: Vec::new(),
            paths: Vec::new(),
            lines: Vec::new(),
            circles: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
            && self.paths.is_empty()
            && self.lines.is_empty()
            && self.circles.is_empty()
            && self.texts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::CanvasLayerKind;

    #[test]
    fn canonical_order_paints_axis_last() {
        assert_eq!(
            CanvasLayerKind::CANONICAL_ORDER.first(),
            Some(&CanvasLayerKind::Background)
        );
        assert_eq!(
            CanvasLayerKind::CANONICAL_ORDER.last(),
            Some(&CanvasLayerKind::Axis)
        );
    }
}
