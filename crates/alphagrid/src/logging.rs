//! Tracing filter selection.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is not set.
///
/// In TUI mode stderr shares the screen, so the default is silence.
#[must_use]
pub fn default_level(tui: bool, verbose: bool) -> LevelFilter {
    if tui {
        LevelFilter::OFF
    } else if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    }
}

/// Build the subscriber filter.
///
/// A non-empty, parsable `rust_log` is used as given; otherwise the filter
/// falls back to [`default_level`].
#[must_use]
pub fn log_filter(rust_log: Option<&str>, tui: bool, verbose: bool) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::default().add_directive(default_level(tui, verbose).into()))
}
