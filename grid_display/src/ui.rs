// ui.rs - egui front end for LifeViewer

use eframe::egui;
use egui::{Color32, Rect, Shape, Stroke, Vec2};
use std::convert::Infallible;
use std::time::{Duration, Instant};

use conway::patterns::PATTERNS;
use conway::{BitGrid, Renderer};

use crate::LifeViewer;

const BOX_SIZE: f32 = 6.0;
const SPACING: f32 = 0.5;

impl eframe::App for LifeViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Auto-update if running
        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.update_generation();
            self.last_update = Instant::now();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.is_running = !self.is_running;
                    if self.is_running {
                        self.last_update = Instant::now();
                    }
                }

                if ui.button("⏭ Step").clicked() {
                    self.is_running = false;
                    self.update_generation();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.is_running = false;
                    self.sim.clear();
                }

                if ui.button("🎲 Random").clicked() {
                    self.is_running = false;
                    self.randomize();
                }

                ui.separator();

                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.is_running = false;
                    self.apply_selected_pattern();
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.sim.generation()));
            });

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1000.0 / self.update_interval.as_millis().max(1) as f32;
                if ui.add(egui::Slider::new(&mut speed, 0.5..=30.0).suffix(" gen/sec")).changed() {
                    self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();
            ui.label("Click cells to toggle them. The outermost rows and columns never change.");
            ui.separator();

            let grid = self.sim.grid();
            let start_pos = ui.cursor().min;
            let total_size = Vec2::new(
                (BOX_SIZE + SPACING) * grid.cols() as f32 - SPACING,
                (BOX_SIZE + SPACING) * grid.rows() as f32 - SPACING,
            );
            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());

            painter.rect_filled(Rect::from_min_size(start_pos, total_size), 0.0, Color32::BLACK);

            let mut cells = CellShapes::new(start_pos, self.live_color, self.dead_color);
            let Ok(()) = cells.render(grid);
            painter.extend(cells.into_shapes());

            let clicked_cell = if response.clicked() {
                response
                    .interact_pointer_pos()
                    .and_then(|pos| cell_at(grid, start_pos, pos))
            } else {
                None
            };

            ui.separator();

            let live_cells = grid.live_count();
            let total_cells = grid.size().cell_count();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total_cells - live_cells));
                ui.label(format!("Population: {:.1}%", live_cells as f32 / total_cells as f32 * 100.0));
            });

            if let Some((row, col)) = clicked_cell {
                self.toggle_cell(row, col);
            }
        });

        if self.is_running {
            ctx.request_repaint_after(self.update_interval);
        }
    }
}

/// Turns a grid into one filled square per cell, outlining the frozen border.
struct CellShapes {
    origin: egui::Pos2,
    live_color: Color32,
    dead_color: Color32,
    shapes: Vec<Shape>,
}

impl CellShapes {
    fn new(origin: egui::Pos2, live_color: Color32, dead_color: Color32) -> Self {
        Self { origin, live_color, dead_color, shapes: Vec::new() }
    }

    fn into_shapes(self) -> Vec<Shape> {
        self.shapes
    }
}

impl Renderer for CellShapes {
    type Error = Infallible;

    fn render(&mut self, grid: &BitGrid) -> Result<(), Self::Error> {
        self.shapes.clear();
        for (row, col, alive) in grid.iter() {
            let rect = cell_rect(self.origin, row, col);
            let cell_color = if alive { self.live_color } else { self.dead_color };
            self.shapes.push(Shape::rect_filled(rect, 0.0, cell_color));
            if grid.is_border(row, col) {
                self.shapes.push(Shape::rect_stroke(rect, 0.0, Stroke::new(0.5, Color32::from_gray(120))));
            }
        }
        Ok(())
    }
}

fn cell_rect(origin: egui::Pos2, row: usize, col: usize) -> Rect {
    let x = origin.x + col as f32 * (BOX_SIZE + SPACING);
    let y = origin.y + row as f32 * (BOX_SIZE + SPACING);
    Rect::from_min_size(egui::pos2(x, y), Vec2::splat(BOX_SIZE))
}

/// Cell under a screen position, if any.
fn cell_at(grid: &BitGrid, origin: egui::Pos2, pos: egui::Pos2) -> Option<(usize, usize)> {
    let offset = pos - origin;
    if offset.x < 0.0 || offset.y < 0.0 {
        return None;
    }
    let col = (offset.x / (BOX_SIZE + SPACING)) as usize;
    let row = (offset.y / (BOX_SIZE + SPACING)) as usize;
    (row < grid.rows() && col < grid.cols()).then_some((row, col))
}
