//! TUI footer panel.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const NAVIGATION: [(&str, &str); 4] = [
    ("q", "quit"),
    ("arrows", "move"),
    ("enter", "select"),
    ("space", "toggle"),
];

const STYLING: [(&str, &str); 3] = [("del", "deselect"), ("m", "menu"), ("b/i", "bold/italic")];

fn hint_line(shortcuts: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(shortcuts.len() * 2);
    for (i, (key, label)) in shortcuts.iter().enumerate() {
        spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
        let sep = if i + 1 < shortcuts.len() { " | " } else { "" };
        spans.push(Span::raw(format!(": {label}{sep}")));
    }
    Line::from(spans)
}

/// Render the footer panel with keyboard shortcuts, one line per group.
pub fn render_footer(frame: &mut Frame, area: Rect) {
    let lines = vec![hint_line(&NAVIGATION), hint_line(&STYLING)];
    let block = Block::default().borders(Borders::TOP);
    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn render_footer_does_not_panic() {
        let backend = TestBackend::new(80, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_footer(frame, area);
            })
            .unwrap();
    }

    #[test]
    fn render_footer_fits_standard_terminal() {
        let backend = TestBackend::new(80, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_footer(frame, area);
            })
            .unwrap();

        // Rows 1 and 2 (after the border) hold the two hint groups
        let row = |y: u16| -> String {
            (0..buf.area.width)
                .map(|x| buf.buffer[(x, y)].symbol().to_string())
                .collect()
        };
        let navigation = row(1);
        assert!(navigation.contains("q: quit"));
        assert!(navigation.contains("space: toggle"));
        let styling = row(2);
        assert!(styling.contains("del: deselect"));
        assert!(styling.contains("m: menu"));
        assert!(styling.contains("b/i: bold/italic"));
    }

    #[test]
    fn render_footer_small_area() {
        let backend = TestBackend::new(20, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_footer(frame, area);
            })
            .unwrap();
    }
}
