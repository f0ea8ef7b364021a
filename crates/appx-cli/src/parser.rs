//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for locating and driving `MakeAppx.exe`.
#[derive(Parser, Debug)]
#[command(name = "appx")]
#[command(about = "Locate and run the Windows SDK app packager (MakeAppx.exe)")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Use this packager executable instead of searching for one
    #[arg(long = "tool-path", global = true, value_name = "PATH")]
    pub tool_path: Option<PathBuf>,

    /// Resolve relative paths against, and run the packager in, this directory
    #[arg(long = "working-dir", global = true, value_name = "DIR")]
    pub working_dir: Option<PathBuf>,

    /// Print the packager command line instead of running it
    #[arg(long = "dry-run", global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
