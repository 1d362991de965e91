use crate::theme::types::Settings;

/// What: Drop a trailing `# comment` from a value.
///
/// Details:
/// - Only a `#` preceded by whitespace starts a comment, so URL fragments survive.
fn strip_inline_comment(s: &str) -> &str {
    let bytes = s.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if *b == b'#' && i > 0 && bytes[i - 1].is_ascii_whitespace() {
            return s[..i].trim();
        }
    }
    s.trim()
}

/// Parse a boolean the way every boolean setting accepts it.
fn parse_bool(val: &str) -> Option<bool> {
    match val.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// What: Parse settings from settings.conf content.
///
/// Inputs:
/// - `content`: Content of the settings.conf file as a string.
/// - `settings`: Mutable reference to `Settings` to populate.
///
/// Output:
/// - None (modifies `settings` in-place).
///
/// Details:
/// - `key = value` lines; `#` and `//` lines are comments.
/// - Keys are case-insensitive and `.`/`-`/space are treated as `_`.
/// - Unknown keys and unparsable values are ignored.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        let Some((raw_key, val_raw)) = trimmed.split_once('=') else {
            continue;
        };
        let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
        let val = strip_inline_comment(val_raw);
        match key.as_str() {
            "base_url" | "endpoint" | "api_url" => {
                settings.base_url = val.to_string();
            }
            "search_debounce_ms" | "debounce_ms" => {
                if let Ok(v) = val.parse::<u64>() {
                    settings.search_debounce_ms = v;
                }
            }
            "request_timeout_secs" | "timeout_secs" => {
                if let Ok(v) = val.parse::<u64>() {
                    settings.request_timeout_secs = v;
                }
            }
            "prefetch_threshold" => {
                if let Ok(v) = val.parse::<usize>() {
                    settings.prefetch_threshold = v;
                }
            }
            "show_keybinds_footer" | "keybinds_visible" => {
                if let Some(v) = parse_bool(val) {
                    settings.show_keybinds_footer = v;
                }
            }
            _ => {}
        }
    }
}
