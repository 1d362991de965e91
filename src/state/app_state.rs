//! Central mutable state owned by the event loop.

use std::path::PathBuf;

use ratatui::widgets::ListState;

use crate::state::{FeedController, Modal, SearchState};

/// Which pane receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Search input: characters edit the query.
    Search,
    /// Alumni list: characters are navigation shortcuts.
    Results,
}

/// What: Everything the renderer and the handlers share.
///
/// Details:
/// - Owned by the runtime loop; workers never touch it directly and report through channels.
/// - `feed` and `search` are the only writers of their own data.
#[derive(Debug)]
pub struct AppState {
    /// Paginated feed and its exclusion set.
    pub feed: FeedController,
    /// Search overlay store.
    pub search: SearchState,
    /// Pane receiving typed characters.
    pub focus: Focus,
    /// Index of the selected row in the displayed list.
    pub selected: usize,
    /// Ratatui list state mirroring `selected`.
    pub list_state: ListState,
    /// Open modal, if any.
    pub modal: Modal,
    /// Whether the navigation sidebar is shown (persisted).
    pub sidebar_open: bool,
    /// `sidebar_open` changed since the last write.
    pub sidebar_dirty: bool,
    /// File holding the persisted UI flag; empty until the runtime resolves it.
    pub ui_state_path: PathBuf,
    /// Rows from the end of the feed at which the next page is requested.
    pub prefetch_threshold: usize,
    /// Whether the keybinds footer is drawn.
    pub show_keybinds_footer: bool,
    /// Directory endpoint shown in the sidebar.
    pub base_url: String,
    /// Height of the list area from the last frame, used for page navigation.
    pub list_viewport_rows: u16,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            feed: FeedController::default(),
            search: SearchState::default(),
            focus: Focus::Search,
            selected: 0,
            list_state: ListState::default(),
            modal: Modal::None,
            sidebar_open: false,
            sidebar_dirty: false,
            ui_state_path: PathBuf::new(),
            prefetch_threshold: crate::theme::Settings::default().prefetch_threshold,
            show_keybinds_footer: true,
            base_url: crate::theme::Settings::default().base_url,
            list_viewport_rows: 0,
        }
    }
}

impl AppState {
    /// What: Flip the sidebar and mark the flag for persistence.
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
        self.sidebar_dirty = true;
        tracing::debug!(open = self.sidebar_open, "[UI] Sidebar toggled");
    }

    /// What: Clamp the selection to `len` rows and sync the list widget state.
    pub fn clamp_selection(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.selected = self.selected.min(len - 1);
            self.list_state.select(Some(self.selected));
        }
    }
}
