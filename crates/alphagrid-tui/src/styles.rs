//! TUI styles and color themes.

use alphagrid_core::LabelVisual;
use ratatui::style::{Color, Modifier, Style};

/// Color theme for the TUI.
#[derive(Debug, Clone)]
pub struct ColorTheme {
    pub primary: Color,
    pub accent: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub cursor: Color,
    pub menu_highlight: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Blue,
            text: Color::White,
            muted: Color::DarkGray,
            border: Color::Gray,
            cursor: Color::Yellow,
            menu_highlight: Color::Cyan,
        }
    }
}

impl ColorTheme {
    /// Get the style for the title bar.
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Get the style for normal text.
    #[must_use]
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Get the style for a letter label.
    #[must_use]
    pub fn label_style(&self, visual: LabelVisual) -> Style {
        let mut style = Style::default().fg(if visual.accent {
            self.accent
        } else {
            self.text
        });
        if visual.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if visual.italic {
            style = style.add_modifier(Modifier::ITALIC);
        }
        style
    }

    /// Get the border style for a cell.
    #[must_use]
    pub fn cell_border_style(&self, is_cursor: bool) -> Style {
        if is_cursor {
            Style::default().fg(self.cursor)
        } else {
            Style::default().fg(self.border)
        }
    }

    /// Get the style for a supplementary banner caption.
    #[must_use]
    pub fn banner_style(&self) -> Style {
        Style::default()
            .fg(self.muted)
            .add_modifier(Modifier::REVERSED)
    }

    /// Get the style for a highlighted context-menu entry.
    #[must_use]
    pub fn menu_highlight_style(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(self.menu_highlight)
            .add_modifier(Modifier::BOLD)
    }
}
