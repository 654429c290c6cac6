//! Vertical scroll state for the grid viewport.

/// Scroll state for the content area, measured in terminal rows.
#[derive(Debug, Clone, Default)]
pub struct GridScrollState {
    /// First visible content row.
    pub offset: u16,
}

impl GridScrollState {
    /// Create a new scroll state.
    #[must_use]
    pub fn new() -> Self {
        Self { offset: 0 }
    }

    /// Largest valid offset for this content and viewport.
    #[must_use]
    pub fn max_offset(content_height: u16, viewport: u16) -> u16 {
        content_height.saturating_sub(viewport)
    }

    /// Scroll up by `rows`.
    pub fn scroll_up(&mut self, rows: u16) {
        self.offset = self.offset.saturating_sub(rows);
    }

    /// Scroll down by `rows`, stopping at the end of the content.
    pub fn scroll_down(&mut self, rows: u16, content_height: u16, viewport: u16) {
        self.offset = self
            .offset
            .saturating_add(rows)
            .min(Self::max_offset(content_height, viewport));
    }

    /// Jump to top.
    pub fn home(&mut self) {
        self.offset = 0;
    }

    /// Jump to bottom.
    pub fn end(&mut self, content_height: u16, viewport: u16) {
        self.offset = Self::max_offset(content_height, viewport);
    }

    /// Re-clamp after the viewport or content changed size.
    pub fn clamp(&mut self, content_height: u16, viewport: u16) {
        self.offset = self.offset.min(Self::max_offset(content_height, viewport));
    }

    /// Scroll the minimum amount that brings rows `top..top + height` into view.
    pub fn ensure_visible(&mut self, top: u16, height: u16, viewport: u16) {
        let bottom = top.saturating_add(height);
        if top < self.offset {
            self.offset = top;
        } else if bottom > self.offset.saturating_add(viewport) {
            self.offset = bottom.saturating_sub(viewport).min(top);
        }
    }
}
