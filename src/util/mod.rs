//! Small utility helpers for time formatting, text fitting, and launching the browser.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Environment switch that bypasses terminal setup and external process launches.
pub const HEADLESS_ENV: &str = "ALUMNI_TUI_TEST_HEADLESS";

/// What: Whether the process runs headless (tests and smoke runs).
#[must_use]
pub fn is_headless() -> bool {
    std::env::var(HEADLESS_ENV).ok().as_deref() == Some("1")
}

/// What: Format a Unix timestamp (seconds) as `YYYY-MM-DD HH:MM:SS` in UTC.
///
/// Inputs:
/// - `ts`: Optional timestamp.
///
/// Output:
/// - Formatted string; empty for `None`, the raw number when out of range.
#[must_use]
pub fn ts_to_date(ts: Option<i64>) -> String {
    let Some(t) = ts else {
        return String::new();
    };
    chrono::DateTime::from_timestamp(t, 0).map_or_else(
        || t.to_string(),
        |dt| dt.format("%Y-%m-%d %H:%M:%S").to_string(),
    )
}

/// What: Cut `s` so it occupies at most `max` terminal columns, adding `…` when cut.
///
/// Details:
/// - Width is measured with `unicode-width`, so wide glyphs count double.
#[must_use]
pub fn fit_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// What: Open a URL in the user's browser without blocking the UI.
///
/// Output:
/// - `false` when the URL is not `http(s)` and nothing was launched.
///
/// Details:
/// - The launch itself is skipped in tests and headless runs.
pub fn open_url(url: &str) -> bool {
    let url = url.trim();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        tracing::debug!(url = %url, "[UI] Refusing to open non-http URL");
        return false;
    }
    if cfg!(test) || is_headless() {
        return true;
    }
    let url = url.to_string();
    std::thread::spawn(move || {
        #[cfg(target_os = "windows")]
        {
            let _ = std::process::Command::new("cmd")
                .args(["/c", "start", "", &url])
                .stdin(std::process::Stdio::null())
                .stdout(std::process::Stdio::null())
                .stderr(std::process::Stdio::null())
                .spawn();
        }
        #[cfg(not(target_os = "windows"))]
        {
            // Try xdg-open first (Linux), then open (macOS)
            let _ = std::process::Command::new("xdg-open")
                .arg(&url)
                .stdin(std::process::Stdio::null())
                .stdout(std::process::Stdio::null())
                .stderr(std::process::Stdio::null())
                .spawn()
                .or_else(|_| {
                    std::process::Command::new("open")
                        .arg(&url)
                        .stdin(std::process::Stdio::null())
                        .stdout(std::process::Stdio::null())
                        .stderr(std::process::Stdio::null())
                        .spawn()
                });
        }
    });
    true
}
