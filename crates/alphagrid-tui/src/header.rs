//! TUI title bar.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// What the title bar reports.
#[derive(Debug, Clone, Default)]
pub struct HeaderInfo<'a> {
    pub cursor: &'a str,
    pub selected: Option<&'a str>,
    pub style: &'a str,
    pub status: &'a str,
}

/// Render the title bar.
pub fn render_header(frame: &mut Frame, area: Rect, info: &HeaderInfo<'_>) {
    let text = vec![
        Line::from(vec![
            Span::styled("AlphaGrid", Style::default().fg(Color::Cyan)),
            Span::raw(format!(
                " | Cursor: {} | Selected: {} | Style: {}",
                info.cursor,
                info.selected.unwrap_or("none"),
                info.style
            )),
        ]),
        Line::from(Span::styled(
            info.status.to_string(),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default().borders(Borders::BOTTOM);

    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}
