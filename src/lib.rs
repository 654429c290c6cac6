//! Workspace-level integration test harness for AlphaGrid.
//!
//! The cross-crate tests live in `tests/`.
