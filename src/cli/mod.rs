//! CLI module
//!
//! Command-line interface for the catalog engine.
//!
//! # Commands
//!
//! - `all` - List every record in the catalog
//! - `search` - List records matching filters

mod commands;
mod console;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, SearchArgs};
pub use console::ConsoleSink;
pub use runner::Runner;
