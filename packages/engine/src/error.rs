//! Engine error taxonomy
//!
//! Every fallible call validates its input before touching the grid, so
//! an `Err` always means the board is unchanged.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LifeError {
    /// Zero width/height, or a cell count that does not fit in memory.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    #[error("cell ({row}, {col}) is outside the {height}x{width} grid")]
    IndexOutOfBounds {
        row: u32,
        col: u32,
        height: u32,
        width: u32,
    },

    /// Bulk load with a buffer whose length differs from the cell count.
    #[error("expected {expected} cells, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("unknown pattern {0:?}")]
    UnknownPattern(String),

    #[error("invalid config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, LifeError>;

impl From<serde_json::Error> for LifeError {
    fn from(err: serde_json::Error) -> Self {
        LifeError::Config(err.to_string())
    }
}
