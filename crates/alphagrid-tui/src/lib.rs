//! # alphagrid-tui
//!
//! Interactive terminal host for the letter grid using ratatui with Elm
//! architecture. The presenter lives in `alphagrid-core`; this crate lays it
//! out, routes keyboard and mouse input into its commands and paints the
//! labels it signals.

pub mod banner;
pub mod context_menu;
pub mod error;
pub mod footer;
pub mod geometry;
pub mod grid;
pub mod header;
pub mod keymap;
pub mod labels;
pub mod messages;
pub mod model;
pub mod scroll;
pub mod styles;

pub use context_menu::ContextMenu;
pub use error::TuiError;
pub use geometry::GridGeometry;
pub use labels::LabelCache;
pub use messages::TuiMessage;
pub use model::TuiApp;
pub use scroll::GridScrollState;
