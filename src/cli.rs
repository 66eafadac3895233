use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "tablen",
    version,
    about = "Static style checker for literal tabs and overlong lines",
    long_about = "tablen walks a directory tree and scans source files for literal tab \
                  characters and lines exceeding a configurable maximum length."
)]
pub struct Cli {
    /// Root directory to scan
    #[arg(short, long)]
    pub path: PathBuf,

    /// Extensions to scan in addition to the defaults, each beginning with '.'
    #[arg(short, long, num_args = 1..)]
    pub extensions: Vec<String>,

    /// Maximum characters per line (values below 20 are clamped up to 20)
    #[arg(short = 'l', long = "line_size", default_value_t = 120)]
    pub line_size: usize,

    /// Directory names (not paths) to exclude from recursion
    #[arg(short, long, num_args = 1..)]
    pub ignore: Vec<String>,
}
