// dayplan keeps three tasks and a note per calendar day.
//
// The browser view is an endless list of day tiles: only a window of dates
// is materialized, and the window grows at either edge as the user scrolls,
// bounded by the configured date range. Records live in a single JSON
// document in the data directory, the same shape `export` writes.

mod args;
mod commands;
pub mod config;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
