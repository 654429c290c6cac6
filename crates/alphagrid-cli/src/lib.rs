//! # alphagrid-cli
//!
//! Plain-text grid output, label change reporting, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;

pub use presenter::CliLabelPresenter;
