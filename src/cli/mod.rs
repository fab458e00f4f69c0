// src/cli/mod.rs
//! CLI argument definitions and command handlers.

pub mod args;
pub mod handlers;
pub mod prompt;

pub use args::{Cli, Commands};
pub use handlers::{handle_chain, handle_path, handle_session};
