// render.rs - Renderer boundary and an in-memory character surface

use std::convert::Infallible;

use crate::grid::BitGrid;

pub const ALIVE_GLYPH: char = 'x';
pub const DEAD_GLYPH: char = ' ';

/// A sink that paints a whole grid every frame.
///
/// Implementations draw every cell at screen position `(row, col)`, blank
/// for dead cells, so marks left by cells that have since died are erased.
pub trait Renderer {
    type Error;

    fn render(&mut self, grid: &BitGrid) -> Result<(), Self::Error>;
}

pub fn glyph(alive: bool) -> char {
    if alive { ALIVE_GLYPH } else { DEAD_GLYPH }
}

/// One row of the grid as glyphs.
pub fn row_text(grid: &BitGrid, row: usize) -> String {
    grid.row_cells(row).map(glyph).collect()
}

/// Keeps the most recent frame as text, one line per row.
#[derive(Debug, Default)]
pub struct TextRenderer {
    frame: String,
    frames_drawn: u64,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self) -> &str {
        &self.frame
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.frame.lines()
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }
}

impl Renderer for TextRenderer {
    type Error = Infallible;

    fn render(&mut self, grid: &BitGrid) -> Result<(), Self::Error> {
        self.frame.clear();
        for row in 0..grid.rows() {
            self.frame.push_str(&row_text(grid, row));
            self.frame.push('\n');
        }
        self.frames_drawn += 1;
        Ok(())
    }
}
