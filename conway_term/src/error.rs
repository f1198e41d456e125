// error.rs - Errors that end the terminal program

use std::convert::Infallible;

use conway::LifeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TermError {
    /// Terminal setup, drawing or input failed
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configured grid could not be built
    #[error("Grid error: {0}")]
    Life(#[from] LifeError),
}

// Lets infallible renderers share the driver loop
impl From<Infallible> for TermError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
