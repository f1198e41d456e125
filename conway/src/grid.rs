// grid.rs - Bit-packed grid for Conway's Game of Life
//
// One cell per bit, row-major, 8 cells per byte. Cell (row, col) lives in
// byte `row * cols/8 + col/8` at bit `col % 8`, bit 0 being the first column
// of the byte group.

use rand::RngCore;

use crate::config::{CELLS_PER_BYTE, GridSize};
use crate::error::{LifeError, LifeResult};

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BitGrid {
    size: GridSize,
    cells: Vec<u8>,   // always size.byte_len() bytes
}

impl BitGrid {
    /// All-dead grid of `rows` x `cols` cells.
    pub fn new(rows: usize, cols: usize) -> LifeResult<Self> {
        Self::with_size(GridSize::new(rows, cols))
    }

    pub fn with_size(size: GridSize) -> LifeResult<Self> {
        size.validate()?;
        Ok(Self {
            size,
            cells: vec![0; size.byte_len()],
        })
    }

    /// Fills the grid by drawing whole bytes, each uniform in [0, 255].
    pub fn seed_random<R: RngCore + ?Sized>(&mut self, rng: &mut R) {
        rng.fill_bytes(&mut self.cells);
    }

    pub fn rows(&self) -> usize {
        self.size.rows
    }

    pub fn cols(&self) -> usize {
        self.size.cols
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> LifeResult<bool> {
        self.check_bounds(row, col)?;
        Ok(self.cell(row, col))
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> LifeResult<()> {
        self.check_bounds(row, col)?;
        self.put(row, col, alive);
        Ok(())
    }

    /// Flips one cell and returns its new state.
    pub fn toggle(&mut self, row: usize, col: usize) -> LifeResult<bool> {
        let alive = !self.get(row, col)?;
        self.put(row, col, alive);
        Ok(alive)
    }

    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// True for cells on the outermost rows or columns.
    pub fn is_border(&self, row: usize, col: usize) -> bool {
        row == 0 || col == 0 || row + 1 == self.rows() || col + 1 == self.cols()
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().map(|byte| byte.count_ones() as usize).sum()
    }

    /// Cells of one row, left to right.
    pub fn row_cells(&self, row: usize) -> impl Iterator<Item = bool> + '_ {
        (0..self.cols()).map(move |col| self.cell(row, col))
    }

    /// Every cell in row-major order as `(row, col, alive)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        (0..self.rows()).flat_map(move |row| {
            (0..self.cols()).map(move |col| (row, col, self.cell(row, col)))
        })
    }

    // Unchecked access for the generation loop; callers guarantee bounds.
    pub(crate) fn cell(&self, row: usize, col: usize) -> bool {
        let (index, mask) = self.locate(row, col);
        self.cells[index] & mask != 0
    }

    pub(crate) fn put(&mut self, row: usize, col: usize, alive: bool) {
        let (index, mask) = self.locate(row, col);
        if alive {
            self.cells[index] |= mask;
        } else {
            self.cells[index] &= !mask;
        }
    }

    fn locate(&self, row: usize, col: usize) -> (usize, u8) {
        let index = row * self.size.bytes_per_row() + col / CELLS_PER_BYTE;
        let mask = 1u8 << (col % CELLS_PER_BYTE);
        (index, mask)
    }

    fn check_bounds(&self, row: usize, col: usize) -> LifeResult<()> {
        if row >= self.rows() || col >= self.cols() {
            return Err(LifeError::OutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn bytes(&self) -> &[u8] {
        &self.cells
    }
}

impl std::fmt::Debug for BitGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "BitGrid {}x{}", self.rows(), self.cols())?;
        for row in 0..self.rows() {
            let line: String = self.row_cells(row).map(|alive| if alive { 'o' } else { '.' }).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
