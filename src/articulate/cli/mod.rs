//! # CLI Layer
//!
//! One UI client for the articulate library. This is the only place that
//! touches stdin, stdout or exit codes.
//!
//! - `args`: clap definitions
//! - `commands`: context setup and per-command handlers
//! - `print`: terminal formatting of cards and messages
//! - `prompt`: interactive field entry and confirmation

mod args;
mod commands;
mod print;
mod prompt;

pub use commands::run;
