// simulation.rs - The driver's owned state: current grid plus bookkeeping
//
// Each frame renders the current generation, computes the next one and
// replaces the current grid with it. The previous grid is dropped right away,
// so exactly one generation is alive between frames.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::RngCore;
use tracing::debug;

use crate::config::GridSize;
use crate::error::LifeResult;
use crate::generation::step;
use crate::grid::BitGrid;
use crate::patterns::Pattern;
use crate::render::Renderer;

const HISTORY_LEN: usize = 10;  // Generations remembered for cycle detection

pub struct Simulation {
    grid: BitGrid,
    generation: u64,

    grid_history: [u64; HISTORY_LEN],
    history_count: usize,
    cycling: bool,
}

impl Simulation {
    pub fn new(grid: BitGrid) -> Self {
        let mut sim = Self {
            grid,
            generation: 0,
            grid_history: [0; HISTORY_LEN],
            history_count: 0,
            cycling: false,
        };
        sim.remember_current();
        sim
    }

    /// A randomly seeded grid of the given size.
    pub fn random<R: RngCore + ?Sized>(size: GridSize, rng: &mut R) -> LifeResult<Self> {
        let mut grid = BitGrid::with_size(size)?;
        grid.seed_random(rng);
        Ok(Self::new(grid))
    }

    pub fn grid(&self) -> &BitGrid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.live_count()
    }

    /// Whether the latest generation repeats one of the previous ten.
    pub fn is_cycling(&self) -> bool {
        self.cycling
    }

    /// Render, then step. Returns true when the new generation repeats a
    /// recent one; the caller decides whether that matters.
    pub fn frame<R: Renderer>(&mut self, renderer: &mut R) -> Result<bool, R::Error> {
        renderer.render(&self.grid)?;
        Ok(self.advance())
    }

    /// Replaces the current grid with its successor.
    pub fn advance(&mut self) -> bool {
        self.grid = step(&self.grid);
        self.generation += 1;

        let was_cycling = self.cycling;
        self.cycling = self.check_for_cycle();
        if self.cycling && !was_cycling {
            debug!(generation = self.generation, "grid settled into a repeating cycle");
        }
        debug!(generation = self.generation, population = self.population(), "advanced");
        self.cycling
    }

    pub fn clear(&mut self) {
        self.grid.clear();
        self.reset_history();
    }

    pub fn randomize<R: RngCore + ?Sized>(&mut self, rng: &mut R) {
        self.grid.seed_random(rng);
        self.reset_history();
    }

    /// Replaces the grid with `pattern` alone in its centre. On error the
    /// current grid and bookkeeping are kept as they were.
    pub fn apply_pattern(&mut self, pattern: &Pattern) -> LifeResult<()> {
        let mut grid = BitGrid::with_size(self.grid.size())?;
        pattern.stamp_centered(&mut grid)?;
        self.grid = grid;
        self.reset_history();
        Ok(())
    }

    pub fn toggle(&mut self, row: usize, col: usize) -> LifeResult<bool> {
        let alive = self.grid.toggle(row, col)?;
        self.reset_history();
        Ok(alive)
    }

    fn hash_grid(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.grid.hash(&mut hasher);
        hasher.finish()
    }

    fn check_for_cycle(&mut self) -> bool {
        let current_hash = self.hash_grid();
        let seen = self.grid_history[..self.history_count.min(HISTORY_LEN)].contains(&current_hash);
        self.push_history(current_hash);
        seen
    }

    fn remember_current(&mut self) {
        let current_hash = self.hash_grid();
        self.push_history(current_hash);
    }

    fn push_history(&mut self, hash: u64) {
        self.grid_history[self.history_count % HISTORY_LEN] = hash;
        self.history_count += 1;
    }

    fn reset_history(&mut self) {
        self.generation = 0;
        self.grid_history = [0; HISTORY_LEN];
        self.history_count = 0;
        self.cycling = false;
        self.remember_current();
    }
}
