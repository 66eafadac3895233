//! Immutable scan configuration, built once from the parsed command line
//! and passed by reference into the walker and scanner.

use crate::cli::Cli;
use std::path::PathBuf;

/// Extensions scanned when `-e` adds nothing.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".h", ".c", ".hpp", ".cpp"];

/// Floor for the configured maximum line length.
pub const MIN_LINE_LENGTH: usize = 20;

#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
    /// Bare directory names excluded from recursion.
    pub ignored_dirs: Vec<String>,
    /// Extension whitelist, each entry including the leading dot.
    /// An empty list accepts every regular file.
    pub extensions: Vec<String>,
    pub max_line_length: usize,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        let mut extensions: Vec<String> =
            DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect();
        extensions.extend(cli.extensions.iter().cloned());

        Self {
            root: cli.path.clone(),
            ignored_dirs: cli.ignore.clone(),
            extensions,
            max_line_length: cli.line_size.max(MIN_LINE_LENGTH),
        }
    }
}
