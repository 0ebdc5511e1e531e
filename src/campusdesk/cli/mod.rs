//! # CLI Layer
//!
//! One client of the campusdesk library. This is the only place that knows
//! about terminal I/O, argument parsing and exit codes.
//!
//! - `setup`: clap definitions
//! - `commands`: `run()` and the per-command handlers
//! - `render`: turns `CmdResult`s into terminal text
//! - `styles`: shared terminal styles

mod commands;
mod render;
mod setup;
mod styles;

pub use commands::run;
