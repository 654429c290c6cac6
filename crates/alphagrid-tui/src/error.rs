//! TUI error type.

use std::io;

use alphagrid_core::GridError;

/// Errors that end the interactive session.
#[derive(Debug, thiserror::Error)]
pub enum TuiError {
    /// Terminal setup, drawing or event polling failed.
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),

    /// The event routing produced an index outside the grid.
    #[error(transparent)]
    Grid(#[from] GridError),
}
