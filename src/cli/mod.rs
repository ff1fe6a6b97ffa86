//! CLI module for StitchX
//!
//! This module handles command-line argument parsing and turns the parsed
//! flags plus configuration into a stitch request.

use clap::Parser;

pub mod args;
pub mod commands;

pub use args::StitchArgs;

/// StitchX video clip stitcher
///
/// Joins every clip of a folder into one video, opening with the chosen clip
/// and continuing with the rest in shuffled order.
#[derive(Parser, Debug)]
#[command(name = "stitcher")]
#[command(about = "StitchX - stitch a folder of clips into one reel")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Logging level or filter directive (overrides the config file)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (default: ./stitchx.toml when present)
    #[arg(long, global = true)]
    pub config: Option<std::path::PathBuf>,

    #[command(flatten)]
    pub stitch: StitchArgs,
}
