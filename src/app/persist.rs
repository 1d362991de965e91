use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// On-disk shape of `ui_state.json`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct UiStateFile {
    /// Whether the navigation sidebar was open.
    #[serde(default)]
    sidebar_open: bool,
}

/// What: Read the persisted sidebar flag.
///
/// Inputs:
/// - `path`: Location of `ui_state.json`.
///
/// Output:
/// - The stored flag; `false` when the file is missing or unreadable.
#[must_use]
pub fn load_sidebar_flag(path: &Path) -> bool {
    let Ok(s) = fs::read_to_string(path) else {
        tracing::debug!(path = %path.display(), "[Persist] No UI state file, sidebar closed");
        return false;
    };
    match serde_json::from_str::<UiStateFile>(&s) {
        Ok(file) => file.sidebar_open,
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "[Persist] UI state file is malformed, ignoring"
            );
            false
        }
    }
}

/// What: Persist the sidebar flag to disk if marked dirty.
///
/// Inputs:
/// - `app`: Application state containing `sidebar_open` and `ui_state_path`
///
/// Output:
/// - Writes `{"sidebar_open": bool}` to `ui_state_path` and clears the dirty flag.
pub fn maybe_flush_sidebar(app: &mut AppState) {
    if !app.sidebar_dirty {
        return;
    }
    if app.ui_state_path.as_os_str().is_empty() {
        tracing::debug!("[Persist] UI state path unset, skipping write");
        app.sidebar_dirty = false;
        return;
    }
    let file = UiStateFile {
        sidebar_open: app.sidebar_open,
    };
    if let Ok(s) = serde_json::to_string(&file) {
        match fs::write(&app.ui_state_path, &s) {
            Ok(()) => {
                tracing::debug!(
                    path = %app.ui_state_path.display(),
                    open = app.sidebar_open,
                    "[Persist] Sidebar flag persisted"
                );
            }
            Err(e) => {
                tracing::warn!(
                    path = %app.ui_state_path.display(),
                    error = %e,
                    "[Persist] Failed to write UI state"
                );
            }
        }
    }
    // Cleared regardless so a read-only config dir does not cause a write every tick.
    app.sidebar_dirty = false;
}
