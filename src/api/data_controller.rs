use tracing::debug;

use crate::core::{DataPoint, Dataset};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Replaces the dataset and redraws when mounted.
    ///
    /// Validation runs before any state changes, so a rejected dataset leaves
    /// the previous data and scene untouched.
    pub fn set_data(&mut self, points: Vec<DataPoint>) -> ChartResult<()> {
        let dataset = Dataset::new(points)?;
        self.set_dataset(dataset)
    }

    /// Replaces the dataset with an already validated one.
    pub fn set_dataset(&mut self, dataset: Dataset) -> ChartResult<()> {
        debug!(
            count = dataset.len(),
            max = dataset.max_value(),
            "set chart data"
        );
        self.dataset = Some(dataset);
        if self.is_mounted() {
            self.draw()?;
        }
        Ok(())
    }

    /// Drops the dataset and the current scene.
    pub fn clear_data(&mut self) {
        debug!("clear chart data");
        self.dataset = None;
        self.scene = None;
        self.interaction.on_pointer_leave();
    }
}
