//! Cross-crate walk-through of a selection and styling session.
//!
//! The same command sequence is driven through the core presenter, the TUI
//! label cache and the interactive model, and the results must agree.

use alphagrid_cli::output::render_text;
use alphagrid_core::{
    GridCommands, GridDataSource, GridError, GridPresenter, GridSnapshot, LabelRenderer,
    LabelStyle, LabelVisual, RecordingRenderer, StyleAction, SupplementaryKind,
};
use alphagrid_tui::keymap::KeyAction;
use alphagrid_tui::{LabelCache, TuiApp};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

const SELECTED: LabelVisual = LabelVisual {
    bold: true,
    italic: false,
    accent: true,
};

/// Run the walk-through against any renderer and return the presenter.
fn walk_through(renderer: &mut dyn LabelRenderer) -> GridPresenter {
    let mut grid = GridPresenter::new();
    assert_eq!(grid.item_count(), 26);

    grid.on_select(0, renderer).unwrap();
    assert_eq!(grid.visual_of(0), Ok(SELECTED));

    assert_eq!(grid.context_menu_actions(0), Ok([StyleAction::Bold, StyleAction::Italic]));
    grid.request_style_action(0, StyleAction::Italic, renderer).unwrap();
    assert_eq!(grid.selected_index(), Some(0));
    assert_eq!(grid.style_of(0), Ok(LabelStyle::Italic));

    grid.on_deselect(0, renderer).unwrap();
    grid
}

#[test]
fn core_walk_through() {
    let mut renderer = RecordingRenderer::new();
    let grid = walk_through(&mut renderer);

    assert_eq!(grid.selected_index(), None);
    assert_eq!(grid.style_of(0), Ok(LabelStyle::Italic));
    // Weight and colour revert, the italic trait stays.
    let expected = LabelVisual {
        bold: false,
        italic: true,
        accent: false,
    };
    assert_eq!(grid.visual_of(0), Ok(expected));
    assert_eq!(renderer.last_for(0), Some(expected));
    assert_eq!(renderer.updates().len(), 3);
}

#[test]
fn label_cache_tracks_presenter() {
    let mut cache = LabelCache::new(26);
    let grid = walk_through(&mut cache);

    for index in 0..grid.item_count() {
        assert_eq!(Ok(cache.get(index)), grid.visual_of(index));
    }
    assert_eq!(cache.repaints(), 3);
}

#[test]
fn text_output_after_walk_through() {
    let grid = walk_through(&mut RecordingRenderer::new());
    let text = render_text(&GridSnapshot::capture(&grid, 40.0));
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 15);
    assert_eq!(lines[1].split_whitespace().collect::<Vec<_>>(), ["/A/", "B"]);
    assert!(!text.contains('['));
}

#[test]
fn interactive_walk_through() {
    let (_tx, rx) = crossbeam_channel::unbounded();
    let mut app = TuiApp::new(rx);

    app.handle_key_action(KeyAction::Select).unwrap();
    assert_eq!(app.presenter().selected_index(), Some(0));

    // Open the menu and choose its second entry.
    app.handle_key_action(KeyAction::OpenMenu).unwrap();
    app.handle_key_action(KeyAction::Down).unwrap();
    app.handle_key_action(KeyAction::Select).unwrap();
    assert_eq!(app.presenter().style_of(0), Ok(LabelStyle::Italic));
    assert_eq!(app.presenter().selected_index(), Some(0));

    let mut terminal = Terminal::new(TestBackend::new(40, 24)).unwrap();
    let frame = terminal.draw(|frame| app.render(frame)).unwrap();
    let header: String = (0..40)
        .map(|x| frame.buffer[(x, 0)].symbol().to_string())
        .collect();
    assert!(header.contains("Selected: A"));

    app.handle_key_action(KeyAction::Deselect).unwrap();
    assert_eq!(app.presenter().selected_index(), None);
    assert_eq!(app.presenter().style_of(0), Ok(LabelStyle::Italic));
}

#[test]
fn out_of_range_indices_are_rejected() {
    let mut grid = GridPresenter::new();
    let mut renderer = RecordingRenderer::new();
    let err = GridError::OutOfRange {
        index: 26,
        len: 26,
    };

    assert_eq!(grid.item_at(26).unwrap_err(), err);
    assert_eq!(grid.on_select(26, &mut renderer), Err(err.clone()));
    assert_eq!(
        grid.request_style_action(26, StyleAction::Bold, &mut renderer),
        Err(err.clone())
    );
    assert_eq!(grid.context_menu_actions(26), Err(err));
    assert!(grid.on_select(usize::MAX, &mut renderer).is_err());

    assert_eq!(grid.selected_index(), None);
    assert!(renderer.updates().is_empty());
}

#[test]
fn sizes_at_reference_width() {
    let grid = GridPresenter::new();
    let item = grid.item_size(375.0);
    assert!((item.width - 187.5).abs() < f64::EPSILON);
    assert!((item.height - 50.0).abs() < f64::EPSILON);
    assert!(grid.inter_item_spacing().abs() < f64::EPSILON);

    let header = grid.supplementary_size(SupplementaryKind::Header, 375.0);
    let footer = grid.supplementary_size(SupplementaryKind::Footer, 375.0);
    assert_eq!(header, footer);
    assert!((header.width - 375.0).abs() < f64::EPSILON);
    assert!(header.height > 0.0);
}
