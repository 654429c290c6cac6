//! AlphaGrid: alphabet letter grid with selection and styling.

use std::process::ExitCode;

use alphagrid_lib::{app, config, errors, logging};

fn main() -> ExitCode {
    let config = config::AppConfig::parse();

    // Initialize tracing
    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(logging::log_filter(
            rust_log.as_deref(),
            config.tui,
            config.verbose,
        ))
        .init();

    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(u8::try_from(errors::exit_code(&err)).unwrap_or(1))
        }
    }
}
