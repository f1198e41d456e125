// config.rs - Grid size and frame pacing configuration

use std::time::Duration;

use crate::error::{LifeError, LifeResult};

// Compiled-in defaults
pub const DEFAULT_ROWS: usize = 44;                                   // Terminal lines painted per frame
pub const DEFAULT_COLS: usize = 160;                                  // Terminal columns, 20 bytes per row
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(200); // Pause between generations
pub const CELLS_PER_BYTE: usize = 8;

/// Dimensions of a packed grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSize {
    pub rows: usize,
    pub cols: usize,
}

impl GridSize {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Rows must be positive; cols must be a positive multiple of 8 so each
    /// row packs into whole bytes.
    pub fn validate(&self) -> LifeResult<()> {
        if self.rows == 0 || self.cols == 0 || self.cols % CELLS_PER_BYTE != 0 {
            return Err(LifeError::InvalidDimension { rows: self.rows, cols: self.cols });
        }
        Ok(())
    }

    pub fn bytes_per_row(&self) -> usize {
        self.cols / CELLS_PER_BYTE
    }

    pub fn byte_len(&self) -> usize {
        self.rows * self.bytes_per_row()
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

/// Everything a driver needs to run a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeConfig {
    pub size: GridSize,
    pub frame_delay: Duration,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            size: GridSize::default(),
            frame_delay: DEFAULT_FRAME_DELAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_terminal_layout() {
        let config = LifeConfig::default();
        assert_eq!(config.size, GridSize::new(44, 160));
        assert_eq!(config.frame_delay, Duration::from_millis(200));
        assert_eq!(config.size.bytes_per_row(), 20);
        assert_eq!(config.size.byte_len(), 880);
        assert!(config.size.validate().is_ok());
    }

    #[test]
    fn rejects_unpackable_sizes() {
        for (rows, cols) in [(0, 16), (10, 0), (10, 12), (3, 7)] {
            assert_eq!(
                GridSize::new(rows, cols).validate(),
                Err(LifeError::InvalidDimension { rows, cols })
            );
        }
        assert!(GridSize::new(1, 8).validate().is_ok());
    }
}
