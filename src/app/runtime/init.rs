use crate::app::persist::load_sidebar_flag;
use crate::state::AppState;
use crate::theme::Settings;

/// What: Copy settings and the persisted sidebar flag into a fresh state.
///
/// Inputs:
/// - `app`: State to initialize
/// - `settings`: Normalized settings with CLI overrides already applied
///
/// Details:
/// - An unset `app.ui_state_path` resolves to `ui_state.json` in the config directory;
///   a path set beforehand is kept, so tests can point it at a temp dir.
pub fn initialize_app_state(app: &mut AppState, settings: &Settings) {
    if app.ui_state_path.as_os_str().is_empty() {
        app.ui_state_path = crate::theme::config_dir().join("ui_state.json");
    }
    app.prefetch_threshold = settings.prefetch_threshold;
    app.show_keybinds_footer = settings.show_keybinds_footer;
    app.base_url.clone_from(&settings.base_url);
    app.sidebar_open = load_sidebar_flag(&app.ui_state_path);
    app.sidebar_dirty = false;
    tracing::debug!(
        base_url = %app.base_url,
        prefetch_threshold = app.prefetch_threshold,
        sidebar_open = app.sidebar_open,
        "[Runtime] App state initialized"
    );
}
