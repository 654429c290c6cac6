//! Serializable view of the whole grid at one container width.

use serde::Serialize;

use crate::interfaces::GridDataSource;
use crate::layout::{items_per_row, supplementary_caption, Size, SupplementaryKind};
use crate::style::{LabelStyle, LabelVisual};

/// One header or footer banner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BannerSnapshot {
    pub kind: SupplementaryKind,
    pub caption: String,
    pub size: Size,
}

/// One cell of the grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellSnapshot {
    pub index: usize,
    pub glyph: String,
    pub row: usize,
    pub column: usize,
    pub selected: bool,
    pub style: LabelStyle,
    pub visual: LabelVisual,
}

/// Full grid state and geometry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridSnapshot {
    pub width: f64,
    pub item_size: Size,
    pub inter_item_spacing: f64,
    pub columns: usize,
    pub selected_index: Option<usize>,
    pub header: BannerSnapshot,
    pub cells: Vec<CellSnapshot>,
    pub footer: BannerSnapshot,
}

impl GridSnapshot {
    /// Capture `source` as laid out at `width`.
    #[must_use]
    pub fn capture(source: &dyn GridDataSource, width: f64) -> Self {
        let columns = items_per_row(width);
        let selected_index = source.selected_index();
        let cells = (0..source.item_count())
            .filter_map(|index| {
                let item = source.item_at(index).ok()?;
                Some(CellSnapshot {
                    index,
                    glyph: item.glyph.clone(),
                    row: index.checked_div(columns).unwrap_or(0),
                    column: index.checked_rem(columns).unwrap_or(0),
                    selected: selected_index == Some(index),
                    style: source.style_of(index).ok()?,
                    visual: source.visual_of(index).ok()?,
                })
            })
            .collect();

        Self {
            width,
            item_size: source.item_size(width),
            inter_item_spacing: source.inter_item_spacing(),
            columns,
            selected_index,
            header: banner(source, SupplementaryKind::Header, width),
            cells,
            footer: banner(source, SupplementaryKind::Footer, width),
        }
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn banner(source: &dyn GridDataSource, kind: SupplementaryKind, width: f64) -> BannerSnapshot {
    BannerSnapshot {
        kind,
        caption: supplementary_caption(kind).to_string(),
        size: source.supplementary_size(kind, width),
    }
}
