//! Command-line interface definitions and handlers.

mod commands;
pub mod handlers;

pub use commands::{Cli, Commands};
