//! The grid presenter: fixed letters plus selection and style state.

use crate::constants::{CONTEXT_MENU_LEN, ITEM_COUNT};
use crate::error::{check_index, GridError};
use crate::interfaces::{GridCommands, GridDataSource, LabelRenderer};
use crate::layout::{self, Size, SupplementaryKind};
use crate::letter::{alphabet_items, LetterItem};
use crate::style::{LabelStyle, LabelVisual, StyleAction};

/// Mutable interaction state owned by the presenter.
///
/// At most one item is selected. Styles are kept per item and do not depend
/// on selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<usize>,
    styles: Vec<LabelStyle>,
}

impl SelectionState {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            selected: None,
            styles: vec![LabelStyle::Normal; len],
        }
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn style(&self, index: usize) -> Option<LabelStyle> {
        self.styles.get(index).copied()
    }

    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }
}

/// Presenter for the alphabet grid.
#[derive(Debug, Clone)]
pub struct GridPresenter {
    items: Vec<LetterItem>,
    state: SelectionState,
}

impl GridPresenter {
    #[must_use]
    pub fn new() -> Self {
        let items = alphabet_items();
        debug_assert_eq!(items.len(), ITEM_COUNT);
        let state = SelectionState::new(items.len());
        Self { items, state }
    }

    /// Borrow the interaction state.
    #[must_use]
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// All items in display order.
    #[must_use]
    pub fn items(&self) -> &[LetterItem] {
        &self.items
    }

    /// Push the current treatment of every item to `renderer`.
    pub fn render_all(&self, renderer: &mut dyn LabelRenderer) {
        for index in 0..self.items.len() {
            renderer.render_label(index, self.visual_unchecked(index));
        }
    }

    fn check(&self, index: usize) -> Result<usize, GridError> {
        check_index(index, self.items.len())
    }

    fn visual_unchecked(&self, index: usize) -> LabelVisual {
        let style = self.state.styles[index];
        LabelVisual::compose(self.state.is_selected(index), style)
    }
}

impl Default for GridPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl GridDataSource for GridPresenter {
    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn item_at(&self, index: usize) -> Result<&LetterItem, GridError> {
        let index = self.check(index)?;
        Ok(&self.items[index])
    }

    fn item_size(&self, available_width: f64) -> Size {
        layout::item_size(available_width)
    }

    fn inter_item_spacing(&self) -> f64 {
        layout::inter_item_spacing()
    }

    fn supplementary_size(&self, kind: SupplementaryKind, available_width: f64) -> Size {
        layout::supplementary_size(kind, available_width)
    }

    fn selected_index(&self) -> Option<usize> {
        self.state.selected
    }

    fn style_of(&self, index: usize) -> Result<LabelStyle, GridError> {
        let index = self.check(index)?;
        Ok(self.state.styles[index])
    }

    fn visual_of(&self, index: usize) -> Result<LabelVisual, GridError> {
        let index = self.check(index)?;
        Ok(self.visual_unchecked(index))
    }
}

impl GridCommands for GridPresenter {
    fn on_select(
        &mut self,
        index: usize,
        renderer: &mut dyn LabelRenderer,
    ) -> Result<(), GridError> {
        let index = self.check(index)?;
        let previous = self.state.selected.replace(index);
        tracing::debug!(index, ?previous, "select");

        if let Some(prev) = previous.filter(|&p| p != index) {
            renderer.render_label(prev, self.visual_unchecked(prev));
        }
        renderer.render_label(index, self.visual_unchecked(index));
        Ok(())
    }

    fn on_deselect(
        &mut self,
        index: usize,
        renderer: &mut dyn LabelRenderer,
    ) -> Result<(), GridError> {
        let index = self.check(index)?;
        if self.state.selected != Some(index) {
            tracing::debug!(index, "deselect ignored, item not selected");
            return Ok(());
        }
        self.state.selected = None;
        tracing::debug!(index, "deselect");
        renderer.render_label(index, self.visual_unchecked(index));
        Ok(())
    }

    fn request_style_action(
        &mut self,
        index: usize,
        action: StyleAction,
        renderer: &mut dyn LabelRenderer,
    ) -> Result<(), GridError> {
        let index = self.check(index)?;
        self.state.styles[index] = action.into();
        tracing::debug!(index, ?action, "style action");
        renderer.render_label(index, self.visual_unchecked(index));
        Ok(())
    }

    fn context_menu_actions(
        &self,
        index: usize,
    ) -> Result<[StyleAction; CONTEXT_MENU_LEN], GridError> {
        self.check(index)?;
        Ok(StyleAction::ALL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderers::{NoOpRenderer, RecordingRenderer};

    #[test]
    fn count_and_glyphs() {
        let presenter = GridPresenter::new();
        assert_eq!(presenter.item_count(), 26);
        let glyphs: String = (0..26)
            .map(|i| presenter.item_at(i).unwrap().glyph.clone())
            .collect();
        assert_eq!(glyphs, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    }

    #[test]
    fn initial_state_is_clear() {
        let presenter = GridPresenter::new();
        assert_eq!(presenter.selected_index(), None);
        for i in 0..26 {
            assert_eq!(presenter.style_of(i), Ok(LabelStyle::Normal));
            assert_eq!(presenter.visual_of(i), Ok(LabelVisual::default()));
        }
    }

    #[test]
    fn select_sets_index_and_signals() {
        let mut presenter = GridPresenter::new();
        let mut renderer = RecordingRenderer::new();
        presenter.on_select(4, &mut renderer).unwrap();

        assert_eq!(presenter.selected_index(), Some(4));
        let visual = renderer.last_for(4).unwrap();
        assert!(visual.bold);
        assert!(visual.accent);
    }

    #[test]
    fn select_other_moves_selection() {
        let mut presenter = GridPresenter::new();
        let mut renderer = RecordingRenderer::new();
        presenter.on_select(1, &mut renderer).unwrap();
        presenter.on_select(7, &mut renderer).unwrap();

        assert_eq!(presenter.selected_index(), Some(7));
        // The previous item is reverted.
        assert_eq!(renderer.last_for(1), Some(LabelVisual::default()));
        assert!(renderer.last_for(7).unwrap().accent);
    }

    #[test]
    fn reselect_same_item_signals_once() {
        let mut presenter = GridPresenter::new();
        let mut renderer = RecordingRenderer::new();
        presenter.on_select(2, &mut renderer).unwrap();
        renderer.clear();
        presenter.on_select(2, &mut renderer).unwrap();
        assert_eq!(renderer.updates().len(), 1);
        assert_eq!(presenter.selected_index(), Some(2));
    }

    #[test]
    fn deselect_clears_selection() {
        let mut presenter = GridPresenter::new();
        let mut renderer = RecordingRenderer::new();
        presenter.on_select(3, &mut renderer).unwrap();
        presenter.on_deselect(3, &mut renderer).unwrap();

        assert_eq!(presenter.selected_index(), None);
        assert_eq!(renderer.last_for(3), Some(LabelVisual::default()));
    }

    #[test]
    fn deselect_other_is_noop() {
        let mut presenter = GridPresenter::new();
        let mut renderer = RecordingRenderer::new();
        presenter.on_select(3, &mut renderer).unwrap();
        let before = presenter.state().clone();
        renderer.clear();

        presenter.on_deselect(10, &mut renderer).unwrap();
        assert_eq!(presenter.state(), &before);
        assert!(renderer.updates().is_empty());

        // Repeating the real deselect is also harmless.
        presenter.on_deselect(3, &mut renderer).unwrap();
        presenter.on_deselect(3, &mut renderer).unwrap();
        assert_eq!(presenter.selected_index(), None);
        assert_eq!(renderer.updates().len(), 1);
    }

    #[test]
    fn style_last_write_wins() {
        let mut presenter = GridPresenter::new();
        let mut renderer = NoOpRenderer::new();
        presenter
            .request_style_action(5, StyleAction::Bold, &mut renderer)
            .unwrap();
        presenter
            .request_style_action(5, StyleAction::Italic, &mut renderer)
            .unwrap();
        assert_eq!(presenter.style_of(5), Ok(LabelStyle::Italic));
        assert_eq!(presenter.selected_index(), None);
    }

    #[test]
    fn style_does_not_touch_selection() {
        let mut presenter = GridPresenter::new();
        let mut renderer = NoOpRenderer::new();
        presenter.on_select(0, &mut renderer).unwrap();
        presenter
            .request_style_action(9, StyleAction::Bold, &mut renderer)
            .unwrap();
        assert_eq!(presenter.selected_index(), Some(0));
    }

    #[test]
    fn selection_does_not_reset_style() {
        let mut presenter = GridPresenter::new();
        let mut renderer = NoOpRenderer::new();
        presenter
            .request_style_action(8, StyleAction::Italic, &mut renderer)
            .unwrap();
        presenter.on_select(8, &mut renderer).unwrap();
        presenter.on_deselect(8, &mut renderer).unwrap();
        assert_eq!(presenter.style_of(8), Ok(LabelStyle::Italic));
        assert!(presenter.visual_of(8).unwrap().italic);
    }

    #[test]
    fn menu_always_offers_both_actions() {
        let mut presenter = GridPresenter::new();
        let mut renderer = NoOpRenderer::new();
        assert_eq!(
            presenter.context_menu_actions(0),
            Ok([StyleAction::Bold, StyleAction::Italic])
        );
        presenter
            .request_style_action(0, StyleAction::Bold, &mut renderer)
            .unwrap();
        presenter.on_select(0, &mut renderer).unwrap();
        assert_eq!(
            presenter.context_menu_actions(0),
            Ok([StyleAction::Bold, StyleAction::Italic])
        );
    }

    #[test]
    fn out_of_range_fails_fast() {
        let mut presenter = GridPresenter::new();
        let mut renderer = RecordingRenderer::new();
        let oob = GridError::OutOfRange { index: 26, len: 26 };

        assert_eq!(presenter.item_at(26).unwrap_err(), oob);
        assert!(presenter.on_select(usize::MAX, &mut renderer).is_err());
        assert!(presenter
            .request_style_action(100, StyleAction::Bold, &mut renderer)
            .is_err());
        assert!(presenter.on_deselect(26, &mut renderer).is_err());
        assert!(presenter.context_menu_actions(26).is_err());
        assert!(presenter.style_of(26).is_err());

        // Nothing changed and nothing was painted.
        assert_eq!(presenter.selected_index(), None);
        assert!(renderer.updates().is_empty());
    }

    #[test]
    fn render_all_covers_every_item() {
        let mut presenter = GridPresenter::new();
        let mut renderer = RecordingRenderer::new();
        presenter.on_select(12, &mut renderer).unwrap();
        renderer.clear();

        presenter.render_all(&mut renderer);
        assert_eq!(renderer.updates().len(), 26);
        assert!(renderer.last_for(12).unwrap().accent);
        assert!(!renderer.last_for(13).unwrap().accent);
    }

    #[test]
    fn layout_queries_delegate_to_policy() {
        let presenter = GridPresenter::new();
        assert_eq!(presenter.item_size(100.0), Size::new(50.0, 50.0));
        assert!(presenter.inter_item_spacing().abs() < f64::EPSILON);
        let header = presenter.supplementary_size(SupplementaryKind::Header, 100.0);
        let footer = presenter.supplementary_size(SupplementaryKind::Footer, 100.0);
        assert_eq!(header, footer);
    }
}
