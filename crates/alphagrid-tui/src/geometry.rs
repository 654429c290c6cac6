//! Content geometry: where banners and cells sit in the scrollable content.
//!
//! Horizontal sizes from the presenter are terminal columns. Vertical sizes
//! are points, converted to rows at one caption line per row.

use alphagrid_core::constants::CAPTION_LINE_HEIGHT;
use alphagrid_core::layout::{items_per_row, row_count};
use alphagrid_core::{GridDataSource, SupplementaryKind};
use ratatui::layout::Rect;

/// Points per terminal row.
pub const POINTS_PER_ROW: f64 = CAPTION_LINE_HEIGHT;

/// Convert a height in points to whole terminal rows, rounding up.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn points_to_rows(points: f64) -> u16 {
    (points / POINTS_PER_ROW)
        .ceil()
        .clamp(0.0, f64::from(u16::MAX)) as u16
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_columns(width: f64) -> u16 {
    width.floor().clamp(0.0, f64::from(u16::MAX)) as u16
}

/// Layout of the grid content at one width, in content coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    pub width: u16,
    pub columns: usize,
    pub item_count: usize,
    pub item_width: u16,
    pub item_height: u16,
    pub spacing: u16,
    pub header_height: u16,
    pub footer_height: u16,
}

impl GridGeometry {
    /// Ask `source` for sizes at `width` columns.
    #[must_use]
    pub fn compute(source: &dyn GridDataSource, width: u16) -> Self {
        let available = f64::from(width);
        let item = source.item_size(available);
        let header = source.supplementary_size(SupplementaryKind::Header, available);
        let footer = source.supplementary_size(SupplementaryKind::Footer, available);
        Self {
            width,
            columns: items_per_row(available),
            item_count: source.item_count(),
            item_width: to_columns(item.width),
            item_height: points_to_rows(item.height),
            spacing: to_columns(source.inter_item_spacing()),
            header_height: points_to_rows(header.height),
            footer_height: points_to_rows(footer.height),
        }
    }

    /// Number of item rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        row_count(self.item_count, self.columns)
    }

    fn items_height(&self) -> u16 {
        u16::try_from(self.rows())
            .unwrap_or(u16::MAX)
            .saturating_mul(self.item_height)
    }

    /// Total height of the content.
    #[must_use]
    pub fn content_height(&self) -> u16 {
        self.header_height
            .saturating_add(self.items_height())
            .saturating_add(self.footer_height)
    }

    /// Header banner rect.
    #[must_use]
    pub fn header_rect(&self) -> Rect {
        Rect::new(0, 0, self.width, self.header_height)
    }

    /// Footer banner rect.
    #[must_use]
    pub fn footer_rect(&self) -> Rect {
        let y = self.header_height.saturating_add(self.items_height());
        Rect::new(0, y, self.width, self.footer_height)
    }

    /// Rect of the cell for item `index`, if it is laid out at all.
    #[must_use]
    pub fn cell_rect(&self, index: usize) -> Option<Rect> {
        if index >= self.item_count || self.columns == 0 || self.item_width == 0 {
            return None;
        }
        let row = u16::try_from(index / self.columns).ok()?;
        let col = u16::try_from(index % self.columns).ok()?;
        let x = col.checked_mul(self.item_width.checked_add(self.spacing)?)?;
        let y = self
            .header_height
            .checked_add(row.checked_mul(self.item_height)?)?;
        Some(Rect::new(x, y, self.item_width, self.item_height))
    }

    /// Item under content position (`x`, `y`).
    #[must_use]
    pub fn hit_test(&self, x: u16, y: u16) -> Option<usize> {
        if self.columns == 0 || self.item_width == 0 || self.item_height == 0 {
            return None;
        }
        let items_y = y.checked_sub(self.header_height)?;
        if items_y >= self.items_height() {
            return None;
        }
        let stride = self.item_width + self.spacing;
        let col = usize::from(x / stride);
        if col >= self.columns || x % stride >= self.item_width {
            return None;
        }
        let row = usize::from(items_y / self.item_height);
        let index = row * self.columns + col;
        (index < self.item_count).then_some(index)
    }
}
