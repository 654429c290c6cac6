//! Application configuration from CLI flags and environment.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::errors::ConfigError;

/// AlphaGrid: a two-column grid of the letters A to Z.
#[derive(Parser, Debug, Clone)]
#[command(name = "alphagrid", version, about)]
pub struct AppConfig {
    /// Launch interactive TUI.
    #[arg(long)]
    pub tui: bool,

    /// Container width, in columns, for text output.
    #[arg(short, long, default_value = "40", env = "ALPHAGRID_WIDTH")]
    pub width: u16,

    /// Letter to select at start-up.
    #[arg(short, long)]
    pub select: Option<char>,

    /// Letters to make bold at start-up (e.g. "ABC").
    #[arg(short, long, default_value = "")]
    pub bold: String,

    /// Letters to make italic at start-up (applied after bold).
    #[arg(short, long, default_value = "")]
    pub italic: String,

    /// Print the grid as JSON.
    #[arg(long)]
    pub json: bool,

    /// Output file path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Event poll interval for the TUI (e.g. "250ms", "1s").
    #[arg(long, default_value = "250ms", env = "ALPHAGRID_TICK_RATE")]
    pub tick_rate: String,

    /// Do not capture the mouse in the TUI.
    #[arg(long)]
    pub no_mouse: bool,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse the tick rate string into a Duration.
    pub fn tick_rate_duration(&self) -> Result<Duration, ConfigError> {
        parse_duration(&self.tick_rate)
            .filter(|d| !d.is_zero())
            .ok_or_else(|| ConfigError::InvalidTickRate(self.tick_rate.clone()))
    }
}

/// Parse a duration string like "250ms", "1s", "2m".
fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if let Some(ms) = s.strip_suffix("ms") {
        let n: u64 = ms.parse().ok()?;
        Some(Duration::from_millis(n))
    } else if let Some(secs) = s.strip_suffix('s') {
        let n: u64 = secs.parse().ok()?;
        Some(Duration::from_secs(n))
    } else if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().ok()?;
        Some(Duration::from_secs(n.checked_mul(60)?))
    } else {
        let n: u64 = s.parse().ok()?;
        Some(Duration::from_millis(n))
    }
}
