// generation.rs - One generation of Conway's Game of Life
//
// Only interior cells evolve. Row 0, the last row, column 0 and the last
// column are copied as-is and never change: a frozen edge, not a torus and
// not dead padding.

use crate::grid::BitGrid;
use crate::neighbors::count_live_neighbors;

/// Conway's rule for a single cell.
pub fn next_state(alive: bool, live_neighbors: u8) -> bool {
    match (alive, live_neighbors) {
        (true, 2) | (true, 3) => true,   // Survival
        (false, 3)            => true,   // Birth
        _                     => false,  // Death or stays dead
    }
}

/// Computes the next generation into a fresh grid.
///
/// Every neighbour count is read from `grid`, never from the grid being
/// written, so the update is simultaneous and order-independent.
pub fn step(grid: &BitGrid) -> BitGrid {
    // Start from a copy so the border carries over unchanged
    let mut next = grid.clone();

    for row in 1..grid.rows().saturating_sub(1) {
        for col in 1..grid.cols() - 1 {
            let alive = grid.cell(row, col);
            let count = count_live_neighbors(grid, row, col);
            next.put(row, col, next_state(alive, count));
        }
    }
    next
}
