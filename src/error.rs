use thiserror::Error;

use crate::core::SeriesShape;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("sample {index} does not match declared shape {expected}: found {found}")]
    ShapeMismatch {
        index: usize,
        expected: SeriesShape,
        found: String,
    },

    #[error("cannot fit scales: no retained data points")]
    EmptyDomain,

    #[error("unknown marker index {0}")]
    UnknownMarker(usize),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
