//! Application entry point and dispatch.

use anyhow::{Context, Result};

use alphagrid_cli::output::{render_text, write_to_file};
use alphagrid_cli::CliLabelPresenter;
use alphagrid_core::letter::index_of_letter;
use alphagrid_core::{
    GridCommands, GridPresenter, GridSnapshot, LabelRenderer, NoOpRenderer, StyleAction,
};
use alphagrid_tui::{TuiApp, TuiMessage};

use crate::config::AppConfig;
use crate::errors::ConfigError;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        alphagrid_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    // Handle TUI mode
    if config.tui {
        return run_tui(config);
    }

    // CLI mode
    run_cli(config)
}

/// Resolve a letter argument to its grid index.
pub fn letter_index(letter: char) -> Result<usize, ConfigError> {
    index_of_letter(letter).ok_or(ConfigError::UnknownLetter(letter))
}

fn letters(arg: &str) -> impl Iterator<Item = char> + '_ {
    arg.chars().filter(|c| !c.is_whitespace() && *c != ',')
}

/// Apply the start-up commands from `config`: bold, then italic, then select.
pub fn apply_commands(
    grid: &mut GridPresenter,
    renderer: &mut dyn LabelRenderer,
    config: &AppConfig,
) -> Result<()> {
    for (arg, action) in [
        (&config.bold, StyleAction::Bold),
        (&config.italic, StyleAction::Italic),
    ] {
        for letter in letters(arg) {
            let index = letter_index(letter)?;
            grid.request_style_action(index, action, renderer)?;
        }
    }
    if let Some(letter) = config.select {
        let index = letter_index(letter)?;
        grid.on_select(index, renderer)?;
    }
    Ok(())
}

fn run_cli(config: &AppConfig) -> Result<()> {
    let mut grid = GridPresenter::new();
    let mut changes = CliLabelPresenter::new();
    apply_commands(&mut grid, &mut changes, config)?;

    if config.verbose {
        for line in changes.describe(&grid) {
            eprintln!("{line}");
        }
    }

    let snapshot = GridSnapshot::capture(&grid, f64::from(config.width));
    let text = if config.json {
        let mut json = snapshot.to_json().context("failed to serialize grid")?;
        json.push('\n');
        json
    } else {
        render_text(&snapshot)
    };

    // Write to file if requested
    if let Some(ref path) = config.output {
        write_to_file(path, &text)
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), "grid written");
    } else {
        print!("{text}");
    }
    Ok(())
}

fn run_tui(config: &AppConfig) -> Result<()> {
    let tick_rate = config.tick_rate_duration()?;

    let mut grid = GridPresenter::new();
    apply_commands(&mut grid, &mut NoOpRenderer::new(), config)?;

    // Create crossbeam channel for TUI messages
    let (tx, rx) = crossbeam_channel::unbounded::<TuiMessage>();

    let mut app = TuiApp::new(rx)
        .with_presenter(grid)
        .with_tick_rate(tick_rate)
        .with_mouse_capture(!config.no_mouse);

    // Set up Ctrl+C handler
    ctrlc_handler(tx.clone())?;

    let _ = tx.send(TuiMessage::Status(
        "Enter selects, m opens the style menu".to_string(),
    ));

    // Run TUI event loop on the main thread
    app.run().context("TUI error")?;
    Ok(())
}

fn ctrlc_handler(tx: crossbeam_channel::Sender<TuiMessage>) -> Result<()> {
    ctrlc::set_handler(move || {
        let _ = tx.send(TuiMessage::Quit);
    })
    .context("Error setting Ctrl+C handler")
}
