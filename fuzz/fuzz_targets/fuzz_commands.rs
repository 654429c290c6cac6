#![no_main]

use libfuzzer_sys::fuzz_target;

use alphagrid_core::{
    GridCommands, GridDataSource, GridPresenter, RecordingRenderer, StyleAction, ITEM_COUNT,
};

fuzz_target!(|data: &[u8]| {
    let mut grid = GridPresenter::new();
    let mut renderer = RecordingRenderer::new();

    // Each byte pair is one command: opcode, then index (indices past 25 must be rejected)
    for pair in data.chunks_exact(2) {
        let index = usize::from(pair[1]);
        let result = match pair[0] % 4 {
            0 => grid.on_select(index, &mut renderer),
            1 => grid.on_deselect(index, &mut renderer),
            2 => grid.request_style_action(index, StyleAction::Bold, &mut renderer),
            _ => grid.request_style_action(index, StyleAction::Italic, &mut renderer),
        };
        assert_eq!(result.is_err(), index >= ITEM_COUNT);
    }

    if let Some(selected) = grid.selected_index() {
        assert!(selected < ITEM_COUNT);
    }
    // The renderer's last word on every item matches the presenter.
    for index in 0..ITEM_COUNT {
        if let Some(visual) = renderer.last_for(index) {
            assert_eq!(Ok(visual), grid.visual_of(index));
        }
    }
});
