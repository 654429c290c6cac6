//! Presenter errors.

/// Errors raised by the grid presenter.
///
/// An out-of-range index means the host routed an event to a cell that does
/// not exist; it is never clamped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// The index does not address any item.
    #[error("index {index} out of range for grid of {len} items")]
    OutOfRange { index: usize, len: usize },
}

/// Check that `index` addresses one of `len` items.
pub(crate) fn check_index(index: usize, len: usize) -> Result<usize, GridError> {
    if index < len {
        Ok(index)
    } else {
        tracing::warn!(index, len, "rejected out-of-range grid index");
        Err(GridError::OutOfRange { index, len })
    }
}
