//! Letter items.

use serde::Serialize;

use crate::constants::ALPHABET;

/// One immutable cell of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LetterItem {
    /// Position in the grid (0-based).
    pub index: usize,
    /// Single-character display string.
    pub glyph: String,
}

impl LetterItem {
    #[must_use]
    pub fn new(index: usize, glyph: char) -> Self {
        Self {
            index,
            glyph: glyph.to_string(),
        }
    }
}

/// Build the fixed item sequence from [`ALPHABET`].
#[must_use]
pub fn alphabet_items() -> Vec<LetterItem> {
    ALPHABET
        .iter()
        .enumerate()
        .map(|(index, &glyph)| LetterItem::new(index, glyph))
        .collect()
}

/// Find the index of a letter, ignoring case.
#[must_use]
pub fn index_of_letter(letter: char) -> Option<usize> {
    let upper = letter.to_ascii_uppercase();
    ALPHABET.iter().position(|&c| c == upper)
}
