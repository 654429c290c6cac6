//! CLI output formatting.

use std::fs;
use std::io;
use std::path::Path;

use alphagrid_core::snapshot::{BannerSnapshot, GridSnapshot};
use alphagrid_core::LabelVisual;

/// Decorate a glyph with text markers for its treatment.
///
/// Italic wraps in `/…/`, bold in `*…*`, and the selected accent in `[…]`.
#[must_use]
pub fn decorate(glyph: &str, visual: LabelVisual) -> String {
    let mut text = glyph.to_string();
    if visual.italic {
        text = format!("/{text}/");
    }
    if visual.bold {
        text = format!("*{text}*");
    }
    if visual.accent {
        text = format!("[{text}]");
    }
    text
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn columns_of(width: f64) -> usize {
    width.max(0.0).floor() as usize
}

fn banner_line(banner: &BannerSnapshot) -> String {
    let width = columns_of(banner.size.width);
    format!("{:^width$}", banner.caption)
        .trim_end()
        .to_string()
}

/// Render a snapshot as plain text, one line per item row between banners.
#[must_use]
pub fn render_text(snapshot: &GridSnapshot) -> String {
    let mut lines = vec![banner_line(&snapshot.header)];

    let cell_width = columns_of(snapshot.item_size.width);
    if snapshot.columns > 0 {
        for row in snapshot.cells.chunks(snapshot.columns) {
            let line: String = row
                .iter()
                .map(|cell| format!("{:^cell_width$}", decorate(&cell.glyph, cell.visual)))
                .collect();
            lines.push(line.trim_end().to_string());
        }
    }

    lines.push(banner_line(&snapshot.footer));
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Write rendered output to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &Path, contents: &str) -> io::Result<()> {
    fs::write(path, contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alphagrid_core::{GridCommands, GridPresenter, NoOpRenderer, StyleAction};

    #[test]
    fn decorate_plain() {
        assert_eq!(decorate("A", LabelVisual::default()), "A");
    }

    #[test]
    fn decorate_combinations() {
        let selected_italic = LabelVisual {
            bold: true,
            italic: true,
            accent: true,
        };
        assert_eq!(decorate("A", selected_italic), "[*/A/*]");

        let bold = LabelVisual {
            bold: true,
            ..LabelVisual::default()
        };
        assert_eq!(decorate("B", bold), "*B*");
    }

    #[test]
    fn render_default_grid() {
        let presenter = GridPresenter::new();
        let text = render_text(&GridSnapshot::capture(&presenter, 20.0));
        let lines: Vec<&str> = text.lines().collect();

        // Header, 13 item rows, footer.
        assert_eq!(lines.len(), 15);
        assert!(lines[0].contains(">> SUPPLEMENTARY IS HERE <<"));
        assert!(lines[14].contains(">> SUPPLEMENTARY IS HERE <<"));
        assert_eq!(lines[1].split_whitespace().collect::<Vec<_>>(), ["A", "B"]);
        assert_eq!(lines[13].split_whitespace().collect::<Vec<_>>(), ["Y", "Z"]);
    }

    #[test]
    fn render_reflects_state() {
        let mut presenter = GridPresenter::new();
        let mut renderer = NoOpRenderer::new();
        presenter.on_select(0, &mut renderer).unwrap();
        presenter
            .request_style_action(3, StyleAction::Italic, &mut renderer)
            .unwrap();

        let text = render_text(&GridSnapshot::capture(&presenter, 20.0));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1].split_whitespace().collect::<Vec<_>>(), ["[*A*]", "B"]);
        assert_eq!(lines[2].split_whitespace().collect::<Vec<_>>(), ["C", "/D/"]);
    }

    #[test]
    fn render_zero_width_has_only_banners() {
        let presenter = GridPresenter::new();
        let text = render_text(&GridSnapshot::capture(&presenter, 0.0));
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn write_file_roundtrip() {
        let path = std::env::temp_dir().join(format!("alphagrid-out-{}.txt", std::process::id()));
        write_to_file(&path, "grid\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "grid\n");
        let _ = std::fs::remove_file(&path);
    }
}
