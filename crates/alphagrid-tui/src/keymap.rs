//! Keyboard and mouse input mapping.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Cancel,
    Up,
    Down,
    Left,
    Right,
    Select,
    ToggleSelect,
    Deselect,
    OpenMenu,
    Bold,
    Italic,
    PageUp,
    PageDown,
    Home,
    End,
    None,
}

/// Pointer actions the grid reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseAction {
    /// Left click: tap on a cell.
    Primary,
    /// Right click: long-press analogue, opens the context menu.
    Secondary,
    ScrollUp,
    ScrollDown,
}

/// Map a key event to an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Cancel,
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Up | KeyCode::Char('k') => KeyAction::Up,
        KeyCode::Down | KeyCode::Char('j') => KeyAction::Down,
        KeyCode::Left | KeyCode::Char('h') => KeyAction::Left,
        KeyCode::Right | KeyCode::Char('l') => KeyAction::Right,
        KeyCode::Enter => KeyAction::Select,
        KeyCode::Char(' ') => KeyAction::ToggleSelect,
        KeyCode::Backspace | KeyCode::Delete => KeyAction::Deselect,
        KeyCode::Char('m') | KeyCode::Menu => KeyAction::OpenMenu,
        KeyCode::Char('b') => KeyAction::Bold,
        KeyCode::Char('i') => KeyAction::Italic,
        KeyCode::PageUp => KeyAction::PageUp,
        KeyCode::PageDown => KeyAction::PageDown,
        KeyCode::Home => KeyAction::Home,
        KeyCode::End => KeyAction::End,
        _ => KeyAction::None,
    }
}

/// Map a mouse event to an action, if the grid cares about it.
#[must_use]
pub fn map_mouse(event: MouseEvent) -> Option<MouseAction> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(MouseAction::Primary),
        MouseEventKind::Down(MouseButton::Right) => Some(MouseAction::Secondary),
        MouseEventKind::ScrollUp => Some(MouseAction::ScrollUp),
        MouseEventKind::ScrollDown => Some(MouseAction::ScrollDown),
        _ => None,
    }
}
