//! CLI label change reporting.

use alphagrid_core::{GridDataSource, LabelRenderer, LabelVisual};

use crate::output::decorate;

/// Label renderer for CLI mode.
///
/// Collects one human-readable line per repaint signal so verbose runs can
/// show what each command changed.
#[derive(Debug, Default)]
pub struct CliLabelPresenter {
    changes: Vec<(usize, LabelVisual)>,
}

impl CliLabelPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Describe every recorded change using glyphs from `source`.
    #[must_use]
    pub fn describe(&self, source: &dyn GridDataSource) -> Vec<String> {
        self.changes
            .iter()
            .filter_map(|&(index, visual)| {
                let item = source.item_at(index).ok()?;
                Some(format!(
                    "{} -> {} ({})",
                    item.glyph,
                    decorate(&item.glyph, visual),
                    describe_visual(visual)
                ))
            })
            .collect()
    }

    /// Number of repaint signals received.
    #[must_use]
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

impl LabelRenderer for CliLabelPresenter {
    fn render_label(&mut self, index: usize, visual: LabelVisual) {
        tracing::debug!(index, ?visual, "label changed");
        self.changes.push((index, visual));
    }
}

fn describe_visual(visual: LabelVisual) -> String {
    let mut traits = Vec::new();
    if visual.bold {
        traits.push("bold");
    }
    if visual.italic {
        traits.push("italic");
    }
    if visual.accent {
        traits.push("accent");
    }
    if traits.is_empty() {
        "regular".to_string()
    } else {
        traits.join(", ")
    }
}
