//! File discovery: recursive directory walk plus the extension whitelist.

use crate::config::Config;
use std::path::PathBuf;
use tracing::debug;
use walkdir::WalkDir;

/// True when the file name's suffix (from the last `.` inclusive) exactly
/// matches a configured entry. An empty whitelist accepts everything; a
/// name without a `.` never matches a non-empty one. Case-sensitive.
pub fn has_valid_extension(file_name: &str, extensions: &[String]) -> bool {
    if extensions.is_empty() {
        return true;
    }

    match file_name.rfind('.') {
        Some(pos) => extensions.iter().any(|ext| ext == &file_name[pos..]),
        None => false,
    }
}

/// Enumerates regular files under the configured root, skipping descent
/// into directories whose bare name is on the ignore list.
pub struct DirectoryWalker<'a> {
    config: &'a Config,
}

impl<'a> DirectoryWalker<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Lazy sequence of matching file paths, in platform enumeration order.
    ///
    /// File types come from the enumeration metadata, so symlinks and
    /// other non-regular entries are skipped without an extra stat.
    /// Unreadable directories (the root included) yield fewer files
    /// rather than an error; the drop is only visible as a trace.
    pub fn files(&self) -> impl Iterator<Item = PathBuf> + 'a {
        let config = self.config;

        WalkDir::new(&config.root)
            .into_iter()
            .filter_entry(move |entry| {
                // The root is walked unconditionally; the ignore list only
                // applies to directory names below it, never to files.
                if entry.depth() == 0 || !entry.file_type().is_dir() {
                    return true;
                }
                let name = entry.file_name().to_string_lossy();
                !config.ignored_dirs.iter().any(|dir| dir.as_str() == name)
            })
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    debug!(error = %err, "dropping unreadable directory entry");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .filter(move |entry| {
                let name = entry.file_name().to_string_lossy();
                has_valid_extension(&name, &config.extensions)
            })
            .map(|entry| entry.into_path())
    }
}
