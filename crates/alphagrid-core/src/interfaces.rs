//! Host-facing interfaces.
//!
//! The presenter answers queries through [`GridDataSource`] and reacts to
//! input through [`GridCommands`]. Visual changes flow back to the host via a
//! [`LabelRenderer`] passed into each command.

use crate::constants::CONTEXT_MENU_LEN;
use crate::error::GridError;
use crate::layout::{Size, SupplementaryKind};
use crate::letter::LetterItem;
use crate::style::{LabelStyle, LabelVisual, StyleAction};

/// Receives label treatment changes from the presenter.
pub trait LabelRenderer {
    /// Repaint the label of item `index` with `visual`.
    fn render_label(&mut self, index: usize, visual: LabelVisual);
}

/// Read-only queries a host needs to lay out and paint the grid.
pub trait GridDataSource {
    /// Number of items; constant.
    fn item_count(&self) -> usize;

    /// The item at `index`.
    fn item_at(&self, index: usize) -> Result<&LetterItem, GridError>;

    /// Size of every item at this container width.
    fn item_size(&self, available_width: f64) -> Size;

    /// Horizontal gap between items.
    fn inter_item_spacing(&self) -> f64;

    /// Natural size of a header or footer banner.
    fn supplementary_size(&self, kind: SupplementaryKind, available_width: f64) -> Size;

    /// Currently selected item, if any.
    fn selected_index(&self) -> Option<usize>;

    /// Stored style of item `index`.
    fn style_of(&self, index: usize) -> Result<LabelStyle, GridError>;

    /// Current treatment of item `index`.
    fn visual_of(&self, index: usize) -> Result<LabelVisual, GridError>;
}

/// Commands a host issues in response to user input.
pub trait GridCommands {
    /// The user selected item `index`.
    fn on_select(&mut self, index: usize, renderer: &mut dyn LabelRenderer)
        -> Result<(), GridError>;

    /// The user deselected item `index`.
    fn on_deselect(
        &mut self,
        index: usize,
        renderer: &mut dyn LabelRenderer,
    ) -> Result<(), GridError>;

    /// The user picked a context-menu action on item `index`.
    fn request_style_action(
        &mut self,
        index: usize,
        action: StyleAction,
        renderer: &mut dyn LabelRenderer,
    ) -> Result<(), GridError>;

    /// Actions offered when a context menu opens over item `index`.
    fn context_menu_actions(
        &self,
        index: usize,
    ) -> Result<[StyleAction; CONTEXT_MENU_LEN], GridError>;
}
