//! Context menu popup offering the style actions for one item.

use alphagrid_core::constants::CONTEXT_MENU_LEN;
use alphagrid_core::StyleAction;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

const MENU_WIDTH: u16 = 16;

/// An open context menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextMenu {
    /// Item the menu was opened over.
    pub index: usize,
    /// Glyph of that item, for the title.
    pub glyph: String,
    /// Offered actions, in order.
    pub actions: [StyleAction; CONTEXT_MENU_LEN],
    /// Highlighted entry.
    pub highlighted: usize,
}

impl ContextMenu {
    #[must_use]
    pub fn new(
        index: usize,
        glyph: impl Into<String>,
        actions: [StyleAction; CONTEXT_MENU_LEN],
    ) -> Self {
        Self {
            index,
            glyph: glyph.into(),
            actions,
            highlighted: 0,
        }
    }

    /// Move the highlight up, wrapping.
    pub fn previous(&mut self) {
        self.highlighted = self
            .highlighted
            .checked_sub(1)
            .unwrap_or(self.actions.len() - 1);
    }

    /// Move the highlight down, wrapping.
    pub fn next(&mut self) {
        self.highlighted = (self.highlighted + 1) % self.actions.len();
    }

    /// The highlighted action.
    #[must_use]
    pub fn current(&self) -> StyleAction {
        self.actions[self.highlighted]
    }

    /// Popup rect centred in `area`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn popup_rect(&self, area: Rect) -> Rect {
        let height = (self.actions.len() as u16 + 2).min(area.height);
        let width = MENU_WIDTH.min(area.width);
        Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        )
    }

    /// Action under screen position (`column`, `row`) when drawn in `area`.
    #[must_use]
    pub fn hit_test(&self, area: Rect, column: u16, row: u16) -> Option<StyleAction> {
        let popup = self.popup_rect(area);
        let inner_x = popup.x + 1..popup.right().saturating_sub(1);
        if !inner_x.contains(&column) {
            return None;
        }
        let entry = usize::from(row.checked_sub(popup.y + 1)?);
        if row >= popup.bottom().saturating_sub(1) {
            return None;
        }
        self.actions.get(entry).copied()
    }
}

/// Render the menu as a popup over `area`.
pub fn render_context_menu(frame: &mut Frame, area: Rect, menu: &ContextMenu, theme: &ColorTheme) {
    let popup = menu.popup_rect(area);
    let lines: Vec<Line> = menu
        .actions
        .iter()
        .enumerate()
        .map(|(i, action)| {
            let style = if i == menu.highlighted {
                theme.menu_highlight_style()
            } else {
                theme.text_style()
            };
            Line::from(Span::styled(action.title(), style))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.header_style())
        .title(format!(" {} ", menu.glyph));

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        popup,
    );
}
