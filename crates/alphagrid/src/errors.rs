//! Error handling and exit codes.

use alphagrid_core::constants::exit_codes;
use alphagrid_core::GridError;
use alphagrid_tui::TuiError;

/// Invalid command-line configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A letter argument is not in A..Z.
    #[error("'{0}' is not a letter from A to Z")]
    UnknownLetter(char),

    /// The tick rate could not be parsed or is zero.
    #[error("invalid tick rate '{0}'")]
    InvalidTickRate(String),
}

/// Map an application error to the process exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<ConfigError>().is_some() {
        exit_codes::ERROR_CONFIG
    } else if err.downcast_ref::<GridError>().is_some()
        || matches!(err.downcast_ref::<TuiError>(), Some(TuiError::Grid(_)))
    {
        exit_codes::ERROR_OUT_OF_RANGE
    } else {
        exit_codes::ERROR_GENERIC
    }
}
