//! TUI message types (Elm Messages).

use crate::keymap::{KeyAction, MouseAction};

/// Messages that drive the TUI update cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiMessage {
    /// Key press forwarded from the event loop.
    KeyPress(KeyAction),
    /// Pointer event at a screen position.
    Mouse {
        column: u16,
        row: u16,
        action: MouseAction,
    },
    /// Terminal resize event.
    Resize { width: u16, height: u16 },
    /// Tick event for periodic redraws.
    Tick,
    /// Status line text.
    Status(String),
    /// Quit the application.
    Quit,
}
