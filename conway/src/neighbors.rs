// neighbors.rs - Moore neighbourhood counting

use crate::grid::BitGrid;

// Offsets of the 8 surrounding cells, row by row
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Number of live cells among the 8 neighbours of `(row, col)`.
///
/// The cell must be interior (`1..rows-1`, `1..cols-1`); every neighbour is
/// read without a bounds check. Only the generation loop calls this.
pub fn count_live_neighbors(grid: &BitGrid, row: usize, col: usize) -> u8 {
    debug_assert!(
        row >= 1 && row + 1 < grid.rows() && col >= 1 && col + 1 < grid.cols(),
        "({row}, {col}) is not an interior cell"
    );

    let mut count = 0;
    for &(dr, dc) in &NEIGHBOR_OFFSETS {
        let nr = row.wrapping_add_signed(dr);
        let nc = col.wrapping_add_signed(dc);
        if grid.cell(nr, nc) {
            count += 1;
        }
    }
    count
}
