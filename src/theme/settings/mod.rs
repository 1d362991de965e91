use std::fs;

use crate::theme::paths::resolve_settings_config_path;
use crate::theme::types::Settings;
use tracing::{debug, warn};

mod normalize;
mod parse_settings;

use normalize::normalize;
use parse_settings::parse_settings;

/// What: Load user settings from `settings.conf` under HOME/XDG.
///
/// Inputs:
/// - None (reads `settings.conf` if present)
///
/// Output:
/// - A `Settings` value; falls back to `Settings::default()` when missing or invalid.
#[must_use]
pub fn settings() -> Settings {
    let mut out = Settings::default();
    match resolve_settings_config_path() {
        Some(p) => match fs::read_to_string(&p) {
            Ok(content) => {
                debug!(path = %p.display(), bytes = content.len(), "[Config] Loaded settings.conf");
                parse_settings(&content, &mut out);
            }
            Err(e) => {
                warn!(
                    path = %p.display(),
                    error = %e,
                    "[Config] settings.conf unreadable, using defaults"
                );
            }
        },
        None => debug!("[Config] No settings.conf found, using defaults"),
    }
    normalize(&mut out);
    out
}
