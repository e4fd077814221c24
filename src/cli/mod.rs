//! CLI module for the plant catalog
//!
//! Provides command-line interface for:
//! - init: Create and seed the catalog database
//! - list: One-shot query, printed as text or JSON
//! - serve: Run the web front end

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command, OrderArgs};
pub use commands::{init, init_catalog, list, listing_response, render_list, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_json, write_text};
