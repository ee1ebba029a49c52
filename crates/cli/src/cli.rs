//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use termcolor::ColorChoice;

use crate::color::ColorMode;

/// A fast batch formatter for Clojure and EDN source trees
#[derive(Parser)]
#[command(name = "groom")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Color output mode
    #[arg(long, global = true, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Worker threads for batch processing (0 = one per core)
    #[arg(short = 'j', long, global = true, default_value_t = 0, value_name = "N")]
    pub jobs: usize,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Verify formatting without modifying any file
    Check(CheckArgs),
    /// Reformat files in place
    Fix(FixArgs),
    /// Print the merged configuration for a path
    Config(ConfigArgs),
    /// Print the version
    Version,
}

#[derive(clap::Args)]
pub struct CheckArgs {
    /// Files or directories to check
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct FixArgs {
    /// Files or directories to fix
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct ConfigArgs {
    /// Path whose merged configuration to print
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,
}

#[derive(Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Immutable per-invocation options threaded to every component that
/// needs them. Never ambient state.
pub struct RunOptions {
    pub verbose: bool,
    pub color: ColorChoice,
    pub jobs: usize,
}
