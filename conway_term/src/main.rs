// main.rs - Conway's Game of Life in the terminal
//
// Seeds a random 160x44 grid and redraws it every 200ms until `q`, Esc or
// Ctrl-C. Logs go to stderr; redirect it to keep them off the screen.

mod driver;
mod error;
mod terminal;

use std::io::{self, BufWriter};

use conway::{LifeConfig, Simulation};
use tracing::{Level, info};

use crate::error::TermError;
use crate::terminal::{TerminalRenderer, TerminalSession};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), TermError> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(io::stderr)
        .init();

    let config = LifeConfig::default();
    let mut sim = Simulation::random(config.size, &mut rand::thread_rng())?;
    info!(
        rows = config.size.rows,
        cols = config.size.cols,
        frame_delay_ms = config.frame_delay.as_millis() as u64,
        population = sim.population(),
        "starting"
    );
    terminal::warn_if_too_small(sim.grid().size());

    let session = TerminalSession::enter()?;
    let mut renderer = TerminalRenderer::for_terminal(BufWriter::new(io::stdout()))?;
    let result = driver::run(
        &mut sim,
        &mut renderer,
        config.frame_delay,
        terminal::quit_requested,
        tokio::signal::ctrl_c(),
    )
    .await;
    drop(renderer);
    drop(session);

    info!(generation = sim.generation(), population = sim.population(), "stopped");
    result
}
