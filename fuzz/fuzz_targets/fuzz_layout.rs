#![no_main]

use libfuzzer_sys::fuzz_target;

use alphagrid_core::{GridPresenter, GridSnapshot};

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let width = f64::from_le_bytes([
        data[0], data[1], data[2], data[3], data[4], data[5], data[6], data[7],
    ]);
    if !width.is_finite() {
        return;
    }

    // Should not panic
    let snapshot = GridSnapshot::capture(&GridPresenter::new(), width);
    assert!(snapshot.header.size.width >= 0.0);
    assert_eq!(snapshot.cells.len(), 26);
});
