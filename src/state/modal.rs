//! Modal dialog state for the UI.

use crate::state::types::AlumniRecord;

/// What: Modal dialogs layered over the main view.
///
/// Details:
/// - At most one modal is open; event handling routes keys to it first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    /// No modal; keys go to the focused pane.
    #[default]
    None,
    /// Full profile of one alumnus.
    Details {
        /// Record being shown.
        record: Box<AlumniRecord>,
    },
    /// Keybinding overview.
    Help,
    /// One-line notice that must be acknowledged.
    Alert {
        /// Text to display.
        message: String,
    },
}

impl Modal {
    /// Whether any modal is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}
