//! # alphagrid-core
//!
//! Presenter for a two-column grid of the letters A to Z. Owns selection and
//! per-item style state and the layout policy; rendering is left to a host
//! that implements [`LabelRenderer`].

pub mod constants;
pub mod error;
pub mod interfaces;
pub mod layout;
pub mod letter;
pub mod presenter;
pub mod renderers;
pub mod snapshot;
pub mod style;

// Re-exports
pub use constants::{exit_codes, ALPHABET, ITEM_COUNT, SUPPLEMENTARY_CAPTION};
pub use error::GridError;
pub use interfaces::{GridCommands, GridDataSource, LabelRenderer};
pub use layout::{Size, SupplementaryKind};
pub use letter::LetterItem;
pub use presenter::{GridPresenter, SelectionState};
pub use renderers::{NoOpRenderer, RecordingRenderer};
pub use snapshot::GridSnapshot;
pub use style::{LabelStyle, LabelVisual, StyleAction};
