pub mod cli;
pub mod config;
pub mod error;
pub mod reporter;
pub mod run;
pub mod scanner;
pub mod walker;

pub use cli::Cli;
pub use config::{Config, DEFAULT_EXTENSIONS, MIN_LINE_LENGTH};
pub use error::{Result, TablenError};
pub use reporter::{ReportEntry, Reporter, ScanReport, TerminalReporter};
pub use run::{run, run_scan};
pub use scanner::{LineSpan, StyleScanner, Violation, ViolationKind};
pub use walker::{DirectoryWalker, has_valid_extension};
