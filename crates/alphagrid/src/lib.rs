//! Application logic for the AlphaGrid letter grid binary.

pub mod app;
pub mod config;
pub mod errors;
pub mod logging;
