//! Scrollable letter grid.
//!
//! The full content is drawn into an off-screen buffer and the visible slice
//! is copied into the frame.

use alphagrid_core::{GridDataSource, SupplementaryKind};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};
use ratatui::Frame;

use crate::banner::render_banner;
use crate::geometry::GridGeometry;
use crate::labels::LabelCache;
use crate::styles::ColorTheme;

/// Everything needed to paint the grid.
pub struct GridView<'a> {
    pub source: &'a dyn GridDataSource,
    pub labels: &'a LabelCache,
    pub cursor: usize,
    pub scroll_offset: u16,
    pub theme: &'a ColorTheme,
}

/// Render the grid content at full size into a fresh buffer.
#[must_use]
pub fn render_content(view: &GridView<'_>, geometry: &GridGeometry) -> Buffer {
    let mut canvas = Buffer::empty(Rect::new(0, 0, geometry.width, geometry.content_height()));

    render_banner(
        &mut canvas,
        geometry.header_rect(),
        SupplementaryKind::Header,
        view.theme,
    );

    for index in 0..view.source.item_count() {
        let (Some(rect), Ok(item)) = (geometry.cell_rect(index), view.source.item_at(index)) else {
            continue;
        };
        let label = Span::styled(
            item.glyph.as_str(),
            view.theme.label_style(view.labels.get(index)),
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(view.theme.cell_border_style(index == view.cursor));
        Paragraph::new(Line::from(label))
            .alignment(Alignment::Center)
            .block(block)
            .render(rect, &mut canvas);
    }

    render_banner(
        &mut canvas,
        geometry.footer_rect(),
        SupplementaryKind::Footer,
        view.theme,
    );
    canvas
}

/// Copy rows `offset..` of `canvas` into `area` of `target`.
pub fn blit(canvas: &Buffer, target: &mut Buffer, area: Rect, offset: u16) {
    let width = area.width.min(canvas.area.width);
    for y in 0..area.height {
        let Some(cy) = offset.checked_add(y) else {
            break;
        };
        if cy >= canvas.area.height {
            break;
        }
        for x in 0..width {
            target[(area.x + x, area.y + y)] = canvas[(x, cy)].clone();
        }
    }
}

/// Render the visible part of the grid into `area`.
pub fn render_grid(frame: &mut Frame, area: Rect, view: &GridView<'_>) {
    let geometry = GridGeometry::compute(view.source, area.width);
    let canvas = render_content(view, &geometry);
    blit(&canvas, frame.buffer_mut(), area, view.scroll_offset);
}

#[cfg(test)]
mod tests {
    use super::*;
    use alphagrid_core::{GridCommands, GridPresenter, StyleAction};
    use ratatui::backend::TestBackend;
    use ratatui::style::{Color, Modifier};
    use ratatui::Terminal;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    fn draw(presenter: &GridPresenter, labels: &LabelCache, offset: u16, height: u16) -> Buffer {
        let theme = ColorTheme::default();
        let backend = TestBackend::new(40, height);
        let mut terminal = Terminal::new(backend).unwrap();
        let view = GridView {
            source: presenter,
            labels,
            cursor: 0,
            scroll_offset: offset,
            theme: &theme,
        };
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_grid(frame, area, &view);
            })
            .unwrap()
            .buffer
            .clone();
        buf
    }

    #[test]
    fn first_rows_show_banner_and_letters() {
        let presenter = GridPresenter::new();
        let labels = LabelCache::from_source(&presenter);
        let buf = draw(&presenter, &labels, 0, 10);

        assert!(row_text(&buf, 0).contains("SUPPLEMENTARY"));
        let label_row = row_text(&buf, 2);
        assert!(label_row.contains('A'));
        assert!(label_row.contains('B'));
    }

    #[test]
    fn scrolled_to_end_shows_last_letters_and_footer() {
        let presenter = GridPresenter::new();
        let labels = LabelCache::from_source(&presenter);
        // Content is 41 rows tall; a 10-row viewport at offset 31 shows the tail.
        let buf = draw(&presenter, &labels, 31, 10);

        assert!(row_text(&buf, 9).contains("SUPPLEMENTARY"));
        let all: String = (0..10).map(|y| row_text(&buf, y)).collect();
        assert!(all.contains('W'));
        assert!(all.contains('Z'));
        // "C" never appears in the banner caption.
        assert!(!all.contains('C'));
    }

    #[test]
    fn selected_label_is_bold_blue() {
        let mut presenter = GridPresenter::new();
        let mut labels = LabelCache::from_source(&presenter);
        presenter.on_select(0, &mut labels).unwrap();
        presenter
            .request_style_action(1, StyleAction::Italic, &mut labels)
            .unwrap();
        let buf = draw(&presenter, &labels, 0, 10);

        let a = (0..40).find(|&x| buf[(x, 2)].symbol() == "A").unwrap();
        let cell = &buf[(a, 2)];
        assert_eq!(cell.fg, Color::Blue);
        assert!(cell.modifier.contains(Modifier::BOLD));

        let b = (0..40).find(|&x| buf[(x, 2)].symbol() == "B").unwrap();
        assert!(buf[(b, 2)].modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn blit_clips_to_canvas() {
        let canvas = Buffer::empty(Rect::new(0, 0, 4, 2));
        let mut target = Buffer::empty(Rect::new(0, 0, 10, 10));
        blit(&canvas, &mut target, Rect::new(0, 0, 10, 10), 1);
        blit(&canvas, &mut target, Rect::new(0, 0, 10, 10), u16::MAX);
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let presenter = GridPresenter::new();
        let labels = LabelCache::from_source(&presenter);
        let theme = ColorTheme::default();
        let backend = TestBackend::new(1, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let view = GridView {
            source: &presenter,
            labels: &labels,
            cursor: 0,
            scroll_offset: 0,
            theme: &theme,
        };
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_grid(frame, area, &view);
            })
            .unwrap();
    }
}
