//! Scan orchestration: walk, scan each file, print the report, exit.

use crate::cli::Cli;
use crate::config::Config;
use crate::reporter::{Reporter, ScanReport, TerminalReporter};
use crate::scanner::StyleScanner;
use crate::walker::DirectoryWalker;
use std::process::ExitCode;
use tracing::{debug, info};

/// Run a full scan for the parsed command line and map the result to the
/// process exit code. Failure means at least one message or at least one
/// scanned file; success requires an empty walk.
pub fn run(cli: &Cli) -> ExitCode {
    let config = Config::from_cli(cli);
    info!(
        root = %config.root.display(),
        max_line_length = config.max_line_length,
        "starting scan"
    );

    let report = run_scan(&config);
    eprint!("{}", TerminalReporter.report(&report));

    debug!(
        files = report.files_scanned,
        messages = report.entries.len(),
        "scan completed"
    );

    if report.failed() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Scan every file the walker yields, in walk order. Per-file read
/// failures become report entries; nothing stops the scan.
pub fn run_scan(config: &Config) -> ScanReport {
    let scanner = StyleScanner::new(config);
    let mut report = ScanReport::new();

    for path in DirectoryWalker::new(config).files() {
        report.record_file();
        match scanner.scan_file(&path) {
            Ok(violations) => report.add_violations(violations),
            Err(err) => {
                debug!(error = %err, "recording unreadable file");
                report.add_unreadable(path);
            }
        }
    }

    report
}
