//! Palette, settings, and config paths.

/// Path resolution for config directories.
mod paths;
/// Settings loading and normalization.
mod settings;
/// Theme and settings type definitions.
mod types;

pub use paths::{config_dir, logs_dir};
pub use settings::settings;
pub use types::{Settings, Theme};

/// What: Palette used by every renderer.
#[must_use]
pub fn theme() -> Theme {
    Theme::default()
}

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// Serializes tests that mutate process-wide environment variables.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
