// main.rs - Windowed viewer for the bit-packed Game of Life
//
// Same grid, same frozen border and same 200ms pacing as the terminal
// program, drawn with egui instead of characters.

use eframe::egui;
use egui::Color32;
use std::time::{Duration, Instant};
use tracing::{Level, info};

use conway::{BitGrid, LifeConfig, Simulation};

mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let config = LifeConfig::default();
    let viewer = LifeViewer::new(config)?;
    info!(rows = config.size.rows, cols = config.size.cols, "opening viewer");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(|_cc| Box::new(viewer)),
    )?;
    Ok(())
}

pub struct LifeViewer {
    pub sim: Simulation,
    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
}

impl LifeViewer {
    pub fn new(config: LifeConfig) -> Result<Self, conway::LifeError> {
        let mut sim = Simulation::new(BitGrid::with_size(config.size)?);
        sim.randomize(&mut rand::thread_rng());

        Ok(Self {
            sim,
            is_running: false,
            last_update: Instant::now(),
            update_interval: config.frame_delay,
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            selected_pattern: 0,
        })
    }

    /// Steps once; pauses when the grid starts repeating itself.
    pub fn update_generation(&mut self) {
        if self.sim.advance() {
            info!(generation = self.sim.generation(), "pausing on a repeating cycle");
            self.is_running = false;
        }
    }

    pub fn randomize(&mut self) {
        self.sim.randomize(&mut rand::thread_rng());
    }

    pub fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = conway::patterns::PATTERNS.get(self.selected_pattern) {
            if let Err(err) = self.sim.apply_pattern(pattern) {
                tracing::warn!(%err, pattern = pattern.name, "pattern does not fit");
            }
        }
    }

    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        if let Err(err) = self.sim.toggle(row, col) {
            tracing::warn!(%err, "toggle ignored");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pauses_on_a_still_life() {
        let mut viewer = LifeViewer::new(LifeConfig::default()).unwrap();
        viewer.selected_pattern = conway::patterns::PATTERNS
            .iter()
            .position(|p| p.name == "Block")
            .unwrap();
        viewer.apply_selected_pattern();
        viewer.is_running = true;

        viewer.update_generation();
        assert!(!viewer.is_running);
        assert_eq!(viewer.sim.population(), 4);
    }

    #[test]
    fn uses_the_configured_pace() {
        let viewer = LifeViewer::new(LifeConfig::default()).unwrap();
        assert_eq!(viewer.update_interval, Duration::from_millis(200));
        assert_eq!(viewer.sim.grid().cols(), 160);
    }
}
