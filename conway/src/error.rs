// error.rs - Error types for the grid and its callers

use thiserror::Error;

/// Contract violations raised by grid construction and cell access
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeError {
    /// Rows must be positive, cols a positive multiple of 8
    #[error("Invalid grid dimensions {rows}x{cols}: rows must be positive and cols a positive multiple of 8")]
    InvalidDimension { rows: usize, cols: usize },

    /// Coordinates outside `[0, rows) x [0, cols)`
    #[error("Cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// Result type for grid operations
pub type LifeResult<T> = Result<T, LifeError>;
