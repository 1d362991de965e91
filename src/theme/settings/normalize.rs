use crate::theme::types::Settings;

/// Bounds for the search quiet window.
const DEBOUNCE_RANGE_MS: (u64, u64) = (100, 2000);

/// What: Normalize settings values parsed from configuration files.
///
/// Inputs:
/// - `settings`: Mutable reference to `Settings` to normalize in-place.
///
/// Details:
/// - Strips trailing slashes from `base_url`; restores the default when it is blank.
/// - Clamps `search_debounce_ms` to 100..=2000 and `request_timeout_secs` to 1..=120.
/// - Forces `prefetch_threshold` to at least 1.
pub fn normalize(settings: &mut Settings) {
    let trimmed = settings.base_url.trim().trim_end_matches('/').to_string();
    settings.base_url = if trimmed.is_empty() {
        Settings::default().base_url
    } else {
        trimmed
    };
    settings.search_debounce_ms = settings
        .search_debounce_ms
        .clamp(DEBOUNCE_RANGE_MS.0, DEBOUNCE_RANGE_MS.1);
    settings.request_timeout_secs = settings.request_timeout_secs.clamp(1, 120);
    if settings.prefetch_threshold == 0 {
        settings.prefetch_threshold = 1;
    }
}
