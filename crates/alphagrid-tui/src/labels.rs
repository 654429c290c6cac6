//! Label cache: the adapter that receives presenter repaint signals.

use alphagrid_core::{GridDataSource, LabelRenderer, LabelVisual};

/// Per-item label treatment as last signalled by the presenter.
#[derive(Debug, Clone)]
pub struct LabelCache {
    visuals: Vec<LabelVisual>,
    repaints: u64,
}

impl LabelCache {
    /// Create a cache with `len` default labels.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            visuals: vec![LabelVisual::default(); len],
            repaints: 0,
        }
    }

    /// Create a cache seeded from the current state of `source`.
    #[must_use]
    pub fn from_source(source: &dyn GridDataSource) -> Self {
        let visuals = (0..source.item_count())
            .map(|i| source.visual_of(i).unwrap_or_default())
            .collect();
        Self {
            visuals,
            repaints: 0,
        }
    }

    /// Treatment for item `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> LabelVisual {
        self.visuals.get(index).copied().unwrap_or_default()
    }

    /// Number of repaint signals received.
    #[must_use]
    pub fn repaints(&self) -> u64 {
        self.repaints
    }
}

impl LabelRenderer for LabelCache {
    fn render_label(&mut self, index: usize, visual: LabelVisual) {
        if let Some(slot) = self.visuals.get_mut(index) {
            *slot = visual;
            self.repaints += 1;
        } else {
            tracing::warn!(index, "repaint signal for unknown label");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alphagrid_core::{GridCommands, GridPresenter, StyleAction};

    #[test]
    fn new_cache_is_default() {
        let cache = LabelCache::new(26);
        assert_eq!(cache.get(0), LabelVisual::default());
        assert_eq!(cache.repaints(), 0);
    }

    #[test]
    fn follows_presenter_signals() {
        let mut presenter = GridPresenter::new();
        let mut cache = LabelCache::from_source(&presenter);

        presenter.on_select(0, &mut cache).unwrap();
        assert!(cache.get(0).accent);

        presenter
            .request_style_action(0, StyleAction::Italic, &mut cache)
            .unwrap();
        presenter.on_deselect(0, &mut cache).unwrap();
        let visual = cache.get(0);
        assert!(visual.italic);
        assert!(!visual.accent);
        assert!(!visual.bold);
        assert_eq!(cache.repaints(), 3);
    }

    #[test]
    fn unknown_index_is_ignored() {
        let mut cache = LabelCache::new(2);
        cache.render_label(9, LabelVisual::default());
        assert_eq!(cache.repaints(), 0);
        assert_eq!(cache.get(9), LabelVisual::default());
    }
}
