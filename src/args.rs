//! Command-line argument definition.

use clap::Parser;

use crate::app::RunOptions;

/// alumni-tui - Browse an alumni directory with infinite scroll and live search
#[derive(Parser, Debug)]
#[command(name = "alumni-tui")]
#[command(version)]
#[command(about = "Browse an alumni directory with infinite scroll and live search", long_about = None)]
pub struct Args {
    /// Directory service base URL (overrides `base_url` in settings.conf)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Start with this query in the search bar
    #[arg(short, long)]
    pub search: Option<String>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Do not capture the mouse (keeps terminal text selection working)
    #[arg(long)]
    pub no_mouse: bool,
}

impl Args {
    /// What: Runtime options carried over from the parsed arguments.
    #[must_use]
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            base_url: self.base_url.clone(),
            initial_search: self.search.clone(),
            no_mouse: self.no_mouse,
        }
    }
}

/// What: Determine the log level based on command-line arguments and environment variables.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Filter directive for `tracing-subscriber`.
///
/// Details:
/// - `RUST_LOG` wins when set; then `--verbose`; then `--log-level`.
#[must_use]
pub fn determine_log_level(args: &Args) -> String {
    if let Ok(env) = std::env::var("RUST_LOG")
        && !env.trim().is_empty()
    {
        return env;
    }
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}
