//! Library entry for alumni-tui exposing the feed controller and UI for integration tests.

pub mod app;
pub mod args;
pub mod error;
pub mod events;
pub mod logic;
pub mod sources;
pub mod state;
pub mod theme;
pub mod ui;
pub mod util;
