//! Label styles and the visual treatment derived from them.

use serde::Serialize;

use crate::constants::CONTEXT_MENU_LEN;

/// Per-item font trait, independent of selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum LabelStyle {
    #[default]
    Normal,
    Bold,
    Italic,
}

/// Action offered by the context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StyleAction {
    Bold,
    Italic,
}

impl StyleAction {
    /// Every action, in menu order.
    pub const ALL: [StyleAction; CONTEXT_MENU_LEN] = [StyleAction::Bold, StyleAction::Italic];

    /// Menu title for this action.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            StyleAction::Bold => "Bold",
            StyleAction::Italic => "Italic",
        }
    }
}

impl From<StyleAction> for LabelStyle {
    fn from(action: StyleAction) -> Self {
        match action {
            StyleAction::Bold => LabelStyle::Bold,
            StyleAction::Italic => LabelStyle::Italic,
        }
    }
}

/// How a label should be painted.
///
/// Selection contributes bold weight and the accent colour; the stored style
/// contributes its own trait on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LabelVisual {
    pub bold: bool,
    pub italic: bool,
    pub accent: bool,
}

impl LabelVisual {
    /// Combine selection and style into one treatment.
    #[must_use]
    pub fn compose(selected: bool, style: LabelStyle) -> Self {
        Self {
            bold: selected || style == LabelStyle::Bold,
            italic: style == LabelStyle::Italic,
            accent: selected,
        }
    }
}
