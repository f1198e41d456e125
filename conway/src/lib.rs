// lib.rs - Conway's Game of Life on a bit-packed grid with a frozen border

pub mod config;
pub mod error;
pub mod generation;
pub mod grid;
pub mod neighbors;
pub mod patterns;
pub mod render;
pub mod simulation;

pub use config::{GridSize, LifeConfig};
pub use error::{LifeError, LifeResult};
pub use generation::{next_state, step};
pub use grid::BitGrid;
pub use neighbors::count_live_neighbors;
pub use patterns::Pattern;
pub use render::{Renderer, TextRenderer};
pub use simulation::Simulation;
