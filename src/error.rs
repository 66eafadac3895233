use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TablenError {
    /// A discovered file could not be opened or read. Non-fatal: the
    /// driver records the message and continues with the next file.
    #[error("Unable to process file: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, TablenError>;
