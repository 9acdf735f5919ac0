use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content and keeps the last frame so tests can
/// inspect what a real backend would have drawn.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_rect_count: usize,
    pub last_path_count: usize,
    pub last_line_count: usize,
    pub last_circle_count: usize,
    pub last_text_count: usize,
    pub render_count: usize,
    last_frame: Option<RenderFrame>,
}

impl NullRenderer {
    #[must_use]
    pub fn last_frame(&self) -> Option<&RenderFrame> {
        self.last_frame.as_ref()
    }
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_rect_count = frame.rect_count();
        self.last_path_count = frame.path_count();
        self.last_line_count = frame.line_count();
        self.last_circle_count = frame.circle_count();
        self.last_text_count = frame.text_count();
        self.render_count += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
