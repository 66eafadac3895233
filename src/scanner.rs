//! Single-pass style scanner over raw file bytes.
//!
//! This is the only component with real logic: one forward pass per file
//! detects tab runs (coalescing consecutive tab-containing lines into one
//! reported range) and line-length overflow (reported at most once per
//! line). Bytes are treated as a flat stream; the only recognized line
//! terminator is `\n` and no encoding validation is performed.

use crate::config::Config;
use crate::error::{Result, TablenError};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::trace;

/// Inclusive range of 1-based line numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan {
    pub start: usize,
    pub stop: usize,
}

impl LineSpan {
    pub fn single(line: usize) -> Self {
        Self {
            start: line,
            stop: line,
        }
    }

    pub fn is_single(&self) -> bool {
        self.start == self.stop
    }
}

impl fmt::Display for LineSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{} - {}", self.start, self.stop)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    TabFound,
    LineTooLong { max: usize },
}

/// A single reported style problem, tagged with kind and location.
/// Created by the scanner, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub file: PathBuf,
    pub lines: LineSpan,
    pub kind: ViolationKind,
}

impl Violation {
    fn tabs(file: &Path, span: LineSpan) -> Self {
        Self {
            file: file.to_path_buf(),
            lines: span,
            kind: ViolationKind::TabFound,
        }
    }

    fn line_too_long(file: &Path, line: usize, max: usize) -> Self {
        Self {
            file: file.to_path_buf(),
            lines: LineSpan::single(line),
            kind: ViolationKind::LineTooLong { max },
        }
    }

    /// Human message without the `<path>(<lines>): ` prefix.
    pub fn message(&self) -> String {
        match &self.kind {
            ViolationKind::TabFound if self.lines.is_single() => "Tab Found!".to_string(),
            ViolationKind::TabFound => "Tabs Found!".to_string(),
            ViolationKind::LineTooLong { max } => {
                format!("Line is greater than {max} characters!")
            }
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}): {}",
            self.file.display(),
            self.lines,
            self.message()
        )
    }
}

/// Scans one file at a time against the configured line-length limit.
pub struct StyleScanner<'a> {
    config: &'a Config,
}

impl<'a> StyleScanner<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Read a file fully and scan it. A file that cannot be read produces
    /// an error; the caller records it and continues with the next file.
    pub fn scan_file(&self, path: &Path) -> Result<Vec<Violation>> {
        let bytes = fs::read(path).map_err(|source| TablenError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        trace!(file = %path.display(), bytes = bytes.len(), "scanning file");
        Ok(self.scan_content(path, &bytes))
    }

    /// Single forward pass over raw bytes, in detection order.
    ///
    /// A tab counts one character toward line length but is only flagged
    /// for its presence; the overflow check fires on ordinary bytes. An
    /// open tab run closes when the newline of a tab-free line is seen, or
    /// at end of input when the file ends with a newline. A run still
    /// pending at end of file without a trailing newline is never reported.
    pub fn scan_content(&self, path: &Path, bytes: &[u8]) -> Vec<Violation> {
        let mut violations = Vec::new();

        let mut line = 1usize;
        let mut chars_on_line = 0usize;
        let mut tab_range: Option<LineSpan> = None;
        let mut tab_on_line = false;
        let mut flagged_too_long = false;

        for &byte in bytes {
            chars_on_line += 1;

            match byte {
                b'\t' => tab_on_line = true,
                b'\n' => {
                    if tab_on_line {
                        tab_range = Some(match tab_range {
                            None => LineSpan::single(line),
                            Some(span) => LineSpan {
                                start: span.start,
                                stop: line,
                            },
                        });
                    } else if let Some(span) = tab_range.take() {
                        violations.push(Violation::tabs(path, span));
                    }

                    line += 1;
                    chars_on_line = 0;
                    tab_on_line = false;
                    flagged_too_long = false;
                }
                _ => {
                    if chars_on_line > self.config.max_line_length && !flagged_too_long {
                        flagged_too_long = true;
                        violations.push(Violation::line_too_long(
                            path,
                            line,
                            self.config.max_line_length,
                        ));
                    }
                }
            }
        }

        // A trailing newline leaves the scan at a fresh line boundary; a
        // run still open there ends with the file. A partial final line
        // (no terminating newline) leaves any pending run unreported.
        if chars_on_line == 0
            && let Some(span) = tab_range.take()
        {
            violations.push(Violation::tabs(path, span));
        }

        violations
    }
}
