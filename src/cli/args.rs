//! CLI argument definitions using clap.
//!
//! Values given here take precedence over the `.adoctipsrc.json` config file.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Asciidoc files or directories to scan (overrides config file)
    pub paths: Vec<PathBuf>,

    /// Write JSON to this file instead of stdout (overrides config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// JSON file listing the expected keys; fail if the extracted keys differ
    #[arg(short = 'k', long)]
    pub expected_keys: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
