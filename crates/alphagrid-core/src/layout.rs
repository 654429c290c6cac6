//! Layout policy: item sizes, spacing and banner sizes.
//!
//! Widths are whatever unit the host measures its container in; heights are
//! in points. Every function here is total over non-negative widths.

use serde::Serialize;

use crate::constants::{
    CAPTION_LINE_HEIGHT, COLUMNS, INTER_ITEM_SPACING, ITEM_HEIGHT, SUPPLEMENTARY_CAPTION,
};

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Kind of supplementary banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SupplementaryKind {
    Header,
    Footer,
}

/// Caption text for a banner. Header and footer share one caption.
#[must_use]
pub fn supplementary_caption(_kind: SupplementaryKind) -> &'static str {
    SUPPLEMENTARY_CAPTION
}

/// Natural size of a banner: the full available width and one line of caption.
#[must_use]
pub fn supplementary_size(kind: SupplementaryKind, available_width: f64) -> Size {
    let width = available_width.max(0.0);
    let height = if supplementary_caption(kind).is_empty() {
        0.0
    } else {
        CAPTION_LINE_HEIGHT
    };
    Size::new(width, height)
}

/// Fixed two-column item size.
#[must_use]
pub fn item_size(available_width: f64) -> Size {
    #[allow(clippy::cast_precision_loss)]
    let columns = COLUMNS as f64;
    Size::new(available_width.max(0.0) / columns, ITEM_HEIGHT)
}

/// Horizontal gap between items.
#[must_use]
pub fn inter_item_spacing() -> f64 {
    INTER_ITEM_SPACING
}

/// How many items sit on one row at this width.
///
/// Every positive width holds exactly [`COLUMNS`] items; zero-width items
/// (width 0) fit nowhere.
#[must_use]
pub fn items_per_row(available_width: f64) -> usize {
    if available_width > 0.0 {
        COLUMNS
    } else {
        0
    }
}

/// Number of rows needed for `count` items at `per_row` items per row.
#[must_use]
pub fn row_count(count: usize, per_row: usize) -> usize {
    if per_row == 0 {
        0
    } else {
        count.div_ceil(per_row)
    }
}
