//! CLI argument definitions using clap.
//!
//! `check_unused <path> [--template-path <file>] [--verbose]`

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about = "Check for unused language keys", long_about = None)]
pub struct Arguments {
    /// Path of the script folder to scan
    pub path: PathBuf,

    /// Template path (default: ../../common/template.toml next to the executable)
    #[arg(short, long)]
    pub template_path: Option<PathBuf>,

    /// Print a scan summary to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
