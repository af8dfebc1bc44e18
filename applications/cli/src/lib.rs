//! Reel Player interactive shell
//!
//! Wires the catalog, playback, and search crates into a line-oriented
//! command shell. `main` connects the shell to stdin/stdout; tests drive
//! the same [`Shell`] over in-memory buffers.

pub mod commands;
pub mod config;
pub mod error;
pub mod render;
pub mod shell;

pub use config::ShellConfig;
pub use error::{CliError, Result};
pub use shell::Shell;

use reel_core::types::Video;

/// Sample catalog compiled into the binary, used when no catalog file
/// is configured.
const SAMPLE_CATALOG: &str = include_str!("../data/videos.txt");

/// Parses the built-in sample catalog.
pub fn sample_catalog() -> Result<Vec<Video>> {
    Ok(reel_library::loader::parse_catalog(SAMPLE_CATALOG)?)
}
