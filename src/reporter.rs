//! Report aggregation and rendering.

use crate::scanner::Violation;
use colored::Colorize;
use std::fmt;
use std::path::PathBuf;

/// One line of the final report, in detection order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEntry {
    Violation(Violation),
    /// A discovered file that could not be opened or read.
    Unreadable(PathBuf),
}

impl fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportEntry::Violation(violation) => write!(f, "{violation}"),
            ReportEntry::Unreadable(path) => {
                write!(f, "Unable to process file: {}", path.display())
            }
        }
    }
}

/// Everything a single scan produced: the ordered message list plus the
/// number of files the walker discovered.
#[derive(Debug, Default)]
pub struct ScanReport {
    pub files_scanned: usize,
    pub entries: Vec<ReportEntry>,
}

impl ScanReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a discovered file, whether or not it turns out readable.
    pub fn record_file(&mut self) {
        self.files_scanned += 1;
    }

    pub fn add_violations(&mut self, violations: Vec<Violation>) {
        self.entries
            .extend(violations.into_iter().map(ReportEntry::Violation));
    }

    pub fn add_unreadable(&mut self, path: PathBuf) {
        self.entries.push(ReportEntry::Unreadable(path));
    }

    /// The run fails when any message was produced or any file at all was
    /// scanned; only a scan that discovered nothing counts as success.
    pub fn failed(&self) -> bool {
        !self.entries.is_empty() || self.files_scanned > 0
    }
}

pub trait Reporter {
    fn report(&self, report: &ScanReport) -> String;
}

/// Renders one message per line for the error stream. Message text is
/// highlighted when stderr is a terminal; piped output stays plain.
pub struct TerminalReporter;

impl Reporter for TerminalReporter {
    fn report(&self, report: &ScanReport) -> String {
        let mut output = String::new();

        for entry in &report.entries {
            match entry {
                ReportEntry::Violation(violation) => {
                    output.push_str(&format!(
                        "{}({}): {}\n",
                        violation.file.display(),
                        violation.lines,
                        violation.message().yellow()
                    ));
                }
                ReportEntry::Unreadable(path) => {
                    output.push_str(&format!(
                        "{}\n",
                        format!("Unable to process file: {}", path.display()).red()
                    ));
                }
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::{LineSpan, ViolationKind};
    use std::path::Path;

    fn tab_violation(file: &str, start: usize, stop: usize) -> Violation {
        Violation {
            file: Path::new(file).to_path_buf(),
            lines: LineSpan { start, stop },
            kind: ViolationKind::TabFound,
        }
    }

    fn long_line_violation(file: &str, line: usize, max: usize) -> Violation {
        Violation {
            file: Path::new(file).to_path_buf(),
            lines: LineSpan::single(line),
            kind: ViolationKind::LineTooLong { max },
        }
    }

    #[test]
    fn test_empty_report_renders_nothing() {
        let report = ScanReport::new();
        assert_eq!(TerminalReporter.report(&report), "");
    }

    #[test]
    fn test_single_line_violation_format() {
        colored::control::set_override(false);
        let mut report = ScanReport::new();
        report.record_file();
        report.add_violations(vec![tab_violation("src/a.c", 3, 3)]);

        assert_eq!(TerminalReporter.report(&report), "src/a.c(3): Tab Found!\n");
    }

    #[test]
    fn test_line_range_violation_format() {
        colored::control::set_override(false);
        let mut report = ScanReport::new();
        report.add_violations(vec![tab_violation("src/a.c", 3, 7)]);

        assert_eq!(
            TerminalReporter.report(&report),
            "src/a.c(3 - 7): Tabs Found!\n"
        );
    }

    #[test]
    fn test_long_line_violation_format() {
        colored::control::set_override(false);
        let mut report = ScanReport::new();
        report.add_violations(vec![long_line_violation("src/a.c", 12, 120)]);

        assert_eq!(
            TerminalReporter.report(&report),
            "src/a.c(12): Line is greater than 120 characters!\n"
        );
    }

    #[test]
    fn test_unreadable_entry_format() {
        colored::control::set_override(false);
        let mut report = ScanReport::new();
        report.record_file();
        report.add_unreadable(Path::new("locked.c").to_path_buf());

        assert_eq!(
            TerminalReporter.report(&report),
            "Unable to process file: locked.c\n"
        );
    }

    #[test]
    fn test_entries_keep_insertion_order() {
        colored::control::set_override(false);
        let mut report = ScanReport::new();
        report.add_violations(vec![
            long_line_violation("a.c", 1, 20),
            tab_violation("a.c", 2, 3),
        ]);
        report.add_unreadable(Path::new("b.c").to_path_buf());

        let output = TerminalReporter.report(&report);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "a.c(1): Line is greater than 20 characters!",
                "a.c(2 - 3): Tabs Found!",
                "Unable to process file: b.c",
            ]
        );
    }

    #[test]
    fn test_empty_scan_is_the_only_success() {
        let report = ScanReport::new();
        assert!(!report.failed());
    }

    #[test]
    fn test_clean_scan_of_one_file_still_fails() {
        let mut report = ScanReport::new();
        report.record_file();
        assert!(report.failed());
    }

    #[test]
    fn test_messages_without_files_fail() {
        // Not reachable from the driver today, but the predicate is an OR.
        let mut report = ScanReport::new();
        report.add_unreadable(Path::new("x.c").to_path_buf());
        assert!(report.failed());
    }
}
