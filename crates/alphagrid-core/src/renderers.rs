//! Concrete label renderer implementations.

use crate::interfaces::LabelRenderer;
use crate::style::LabelVisual;

/// No-op renderer that discards every update.
#[derive(Debug, Default)]
pub struct NoOpRenderer;

impl NoOpRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl LabelRenderer for NoOpRenderer {
    fn render_label(&mut self, _index: usize, _visual: LabelVisual) {}
}

/// Renderer that records every update in order.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    updates: Vec<(usize, LabelVisual)>,
}

impl RecordingRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All updates received so far.
    #[must_use]
    pub fn updates(&self) -> &[(usize, LabelVisual)] {
        &self.updates
    }

    /// Most recent update for `index`.
    #[must_use]
    pub fn last_for(&self, index: usize) -> Option<LabelVisual> {
        self.updates
            .iter()
            .rev()
            .find(|(i, _)| *i == index)
            .map(|(_, visual)| *visual)
    }

    /// Forget recorded updates.
    pub fn clear(&mut self) {
        self.updates.clear();
    }
}

impl LabelRenderer for RecordingRenderer {
    fn render_label(&mut self, index: usize, visual: LabelVisual) {
        self.updates.push((index, visual));
    }
}
