// terminal.rs - crossterm character display for the grid

use std::io::{self, Write};
use std::time::Duration;

use conway::render::{self, Renderer};
use conway::{BitGrid, GridSize};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{execute, queue};
use tracing::{debug, error, warn};

/// Paints the whole grid each frame, one glyph per cell at (row, col).
///
/// Only the part of the grid inside the viewport is drawn; rows and columns
/// past the terminal edge are dropped instead of wrapping or scrolling.
pub struct TerminalRenderer<W: Write> {
    out: W,
    cols: u16,
    rows: u16,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, cols: u16, rows: u16) -> Self {
        Self { out, cols, rows }
    }

    /// Clipped to the current size of the controlling terminal.
    pub fn for_terminal(out: W) -> io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        Ok(Self::new(out, cols, rows))
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    type Error = io::Error;

    fn render(&mut self, grid: &BitGrid) -> io::Result<()> {
        let width = grid.cols().min(usize::from(self.cols));
        for y in 0..self.rows.min(u16::try_from(grid.rows()).unwrap_or(u16::MAX)) {
            let row = usize::from(y);
            let line: String = grid.row_cells(row).take(width).map(render::glyph).collect();
            queue!(self.out, MoveTo(0, y), Print(line))?;
        }
        self.out.flush()
    }
}

/// Raw mode, alternate screen and hidden cursor for as long as it lives.
pub struct TerminalSession {
    _private: (),
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        // Built before the screen switch so a failure below still restores raw mode
        let session = Self { _private: () };
        execute!(io::stdout(), EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        Ok(session)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(err) = execute!(io::stdout(), Show, LeaveAlternateScreen) {
            error!(?err, "failed to leave alternate screen");
        }
        if let Err(err) = disable_raw_mode() {
            error!(?err, "failed to disable raw mode");
        }
    }
}

/// Whether a `cols` x `rows` terminal shows every cell of the grid.
pub fn fits(size: GridSize, cols: u16, rows: u16) -> bool {
    usize::from(cols) >= size.cols && usize::from(rows) >= size.rows
}

/// Logs a warning when the terminal cannot show the whole grid.
pub fn warn_if_too_small(size: GridSize) {
    match terminal::size() {
        Ok((cols, rows)) if !fits(size, cols, rows) => {
            warn!(
                terminal_cols = cols,
                terminal_rows = rows,
                grid_cols = size.cols,
                grid_rows = size.rows,
                "terminal is smaller than the grid; output will be clipped"
            );
        }
        Ok(_) => {}
        Err(err) => debug!(?err, "could not query terminal size"),
    }
}

pub fn is_quit_key(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Drains pending input without blocking; true if a quit key was pressed.
pub fn quit_requested() -> io::Result<bool> {
    while event::poll(Duration::ZERO)? {
        if let Event::Key(key) = event::read()? {
            if is_quit_key(&key) {
                return Ok(true);
            }
        }
    }
    Ok(false)
}
