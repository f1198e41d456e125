//! Generation-level properties of the frozen-border Game of Life.
//!
//! Pure logic: no terminal, no timing.

use conway::patterns::{BLINKER, BLOCK};
use conway::{BitGrid, step};
use rand::SeedableRng;
use rand::rngs::StdRng;

// ── Helpers ────────────────────────────────────────────────────────────

fn grid_with(rows: usize, cols: usize, live: &[(usize, usize)]) -> BitGrid {
    let mut grid = BitGrid::new(rows, cols).unwrap();
    for &(row, col) in live {
        grid.set(row, col, true).unwrap();
    }
    grid
}

fn random_grid(seed: u64) -> BitGrid {
    let mut grid = BitGrid::new(44, 160).unwrap();
    grid.seed_random(&mut StdRng::seed_from_u64(seed));
    grid
}

fn live_cells(grid: &BitGrid) -> Vec<(usize, usize)> {
    grid.iter().filter(|&(_, _, alive)| alive).map(|(row, col, _)| (row, col)).collect()
}

// ── Invariants ─────────────────────────────────────────────────────────

#[test]
fn step_preserves_dimensions() {
    for (rows, cols) in [(1, 8), (3, 8), (10, 16), (44, 160)] {
        let mut grid = BitGrid::new(rows, cols).unwrap();
        grid.seed_random(&mut StdRng::seed_from_u64(rows as u64));
        let next = step(&grid);
        assert_eq!((next.rows(), next.cols()), (rows, cols));
    }
}

#[test]
fn border_cells_are_frozen() {
    for seed in 0..5 {
        let grid = random_grid(seed);
        let mut current = grid.clone();
        for _ in 0..10 {
            current = step(&current);
        }
        for (row, col, alive) in grid.iter() {
            if grid.is_border(row, col) {
                assert_eq!(current.get(row, col).unwrap(), alive, "border ({row}, {col}) changed");
            }
        }
    }
}

#[test]
fn step_does_not_mutate_and_is_deterministic() {
    let grid = random_grid(11);
    let snapshot = grid.clone();
    let first = step(&grid);
    let second = step(&grid);
    assert_eq!(grid, snapshot);
    assert_eq!(first, second);
}

// ── Fixtures ───────────────────────────────────────────────────────────

#[test]
fn dead_grid_stays_dead() {
    let grid = BitGrid::new(44, 160).unwrap();
    assert_eq!(step(&grid).live_count(), 0);
}

#[test]
fn lone_cell_dies_of_underpopulation() {
    let grid = grid_with(10, 16, &[(5, 5)]);
    let next = step(&grid);
    assert!(!next.get(5, 5).unwrap());
    assert_eq!(next.live_count(), 0);
}

#[test]
fn overcrowded_cell_dies() {
    // Centre of a plus sign has four neighbours
    let grid = grid_with(10, 16, &[(5, 5), (4, 5), (6, 5), (5, 4), (5, 6)]);
    assert!(!step(&grid).get(5, 5).unwrap());
}

#[test]
fn block_is_a_still_life() {
    let grid = grid_with(10, 16, &[(5, 5), (5, 6), (6, 5), (6, 6)]);
    assert_eq!(step(&grid), grid);

    let mut stamped = BitGrid::new(10, 16).unwrap();
    BLOCK.stamp(&mut stamped, 5, 5).unwrap();
    assert_eq!(stamped, grid);
}

#[test]
fn blinker_has_period_two() {
    let horizontal = grid_with(10, 16, &[(5, 4), (5, 5), (5, 6)]);
    let vertical = step(&horizontal);
    assert_eq!(live_cells(&vertical), vec![(4, 5), (5, 5), (6, 5)]);
    assert_eq!(step(&vertical), horizontal);

    let mut stamped = BitGrid::new(10, 16).unwrap();
    BLINKER.stamp(&mut stamped, 5, 4).unwrap();
    assert_eq!(stamped, horizontal);
}

#[test]
fn glider_translates_diagonally_every_four_generations() {
    let glider = [(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)];
    let mut grid = grid_with(16, 16, &glider);
    for _ in 0..4 {
        grid = step(&grid);
    }
    let mut expected: Vec<_> = glider.iter().map(|&(r, c)| (r + 1, c + 1)).collect();
    expected.sort();
    assert_eq!(live_cells(&grid), expected);
}

#[test]
fn patterns_across_byte_boundaries_behave_the_same() {
    // Same blinker, once inside a byte and once straddling bytes 0 and 1
    for left in [2, 6, 7] {
        let grid = grid_with(8, 16, &[(3, left), (3, left + 1), (3, left + 2)]);
        let next = step(&grid);
        assert_eq!(live_cells(&next), vec![(2, left + 1), (3, left + 1), (4, left + 1)]);
    }
}
