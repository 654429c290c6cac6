//! Constants for the letter grid and its layout policy.

/// Letters shown by the grid, in display order.
pub const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Number of items in the grid.
pub const ITEM_COUNT: usize = ALPHABET.len();

/// Fixed item height, in points.
pub const ITEM_HEIGHT: f64 = 50.0;

/// Number of item columns produced by the layout policy.
pub const COLUMNS: usize = 2;

/// Horizontal gap between neighbouring items.
pub const INTER_ITEM_SPACING: f64 = 0.0;

/// Height of one line of label or caption text, in points.
pub const CAPTION_LINE_HEIGHT: f64 = 17.0;

/// Caption shown in both the header and the footer banner.
pub const SUPPLEMENTARY_CAPTION: &str = ">> SUPPLEMENTARY IS HERE <<";

/// Actions offered by the context menu, in menu order.
pub const CONTEXT_MENU_LEN: usize = 2;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// An index outside the grid reached the presenter.
    pub const ERROR_OUT_OF_RANGE: i32 = 5;
}
