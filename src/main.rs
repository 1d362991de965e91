//! alumni-tui binary entrypoint kept minimal. The full runtime lives in `app`.

use std::sync::OnceLock;
use std::{fmt, time::SystemTime};

use alumni_tui::args::{Args, determine_log_level};
use alumni_tui::{app, theme, util};
use clap::Parser;

/// Log timestamp formatter shared by the file and stderr writers.
struct AppTimer;

impl tracing_subscriber::fmt::time::FormatTime for AppTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let secs = SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX));
        let s = util::ts_to_date(Some(secs)); // "YYYY-MM-DD HH:MM:SS"
        let ts = s.replacen(' ', "-T", 1); // "YYYY-MM-DD-T HH:MM:SS"
        w.write_str(&ts)
    }
}

/// Keeps the non-blocking writer flushing until process exit.
static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Install the tracing subscriber.
///
/// Details:
/// - Writes to `~/.config/alumni-tui/logs/alumni-tui.log`; falls back to stderr when the
///   file cannot be opened. Stderr is not useful once the alternate screen is up, so the
///   file is preferred.
fn init_logging(level: &str) {
    let mut log_path = theme::logs_dir();
    log_path.push("alumni-tui.log");
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_new(level)
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
    };
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(AppTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(AppTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(&determine_log_level(&args));

    tracing::info!(
        base_url = ?args.base_url,
        search = ?args.search,
        "alumni-tui starting"
    );
    if let Err(err) = app::run(args.run_options()).await {
        tracing::error!(error = ?err, "Application error");
        eprintln!("alumni-tui: {err}");
    }
    tracing::info!("alumni-tui exited");
}
