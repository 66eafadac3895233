use clap::Parser;
use std::process::ExitCode;
use tablen::{Cli, run};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Logs go to stdout; stderr carries only the violation report.
    let filter = EnvFilter::try_from_env("TABLEN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    run(&cli)
}
