use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("dataset must contain at least one data point")]
    EmptyDataset,

    #[error("value at index {index} must be finite")]
    NonFiniteValue { index: usize },

    #[error("value at index {index} must be >= 0 for this chart kind")]
    NegativeValue { index: usize },

    #[error(
        "category `{category}` repeats at index {duplicate_index} (first seen at {first_index})"
    )]
    DuplicateCategory {
        category: String,
        first_index: usize,
        duplicate_index: usize,
    },

    /// Raised when the value domain would collapse to zero width (for example
    /// all values are zero), which would otherwise yield NaN geometry.
    #[error("value domain is degenerate: max={max}")]
    DegenerateValueDomain { max: f64 },

    #[error("drawing surface not found for mount `{mount_id}`")]
    SurfaceNotFound { mount_id: String },

    #[error("chart is not mounted on a drawing surface")]
    SurfaceNotMounted,
}
