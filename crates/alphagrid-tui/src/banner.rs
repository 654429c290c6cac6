//! Supplementary header and footer banners.

use alphagrid_core::layout::supplementary_caption;
use alphagrid_core::SupplementaryKind;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::styles::ColorTheme;

/// Render a banner caption centred in `area`.
pub fn render_banner(buf: &mut Buffer, area: Rect, kind: SupplementaryKind, theme: &ColorTheme) {
    if area.is_empty() {
        return;
    }
    let line = Line::from(Span::styled(supplementary_caption(kind), theme.banner_style()));
    Paragraph::new(line)
        .alignment(Alignment::Center)
        .style(theme.banner_style())
        .render(area, buf);
}
