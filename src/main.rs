//! StitchX Video Clip Stitcher
//!
//! Stitches every clip of a folder into a single video, starting with a chosen
//! clip and shuffling the rest, normalizing all clips to a common encoding
//! before a stream-copy join.
//!
//! # Usage
//!
//! ```bash
//! stitcher --folder /path/to/mp4s --start intro.mp4
//! stitcher --folder . --start 0001.mp4 -o reel.mp4 --fps 30 --width 1920 --height 1080
//! stitcher --folder ./takes --start take1.mp4 --seed 42
//! stitcher --folder ./takes --start take1.mp4 --fast
//! ```

use std::process::ExitCode;

use clap::Parser;
use tracing::info;

use stitchx_cli::cli::{commands, Cli};
use stitchx_cli::config::StitchConfig;
use stitchx_cli::domain::errors::{EXIT_FAILURE, EXIT_USAGE};
use stitchx_cli::utils::{init_logging, LogFormat};

/// Main entry point for the StitchX CLI application
#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // --help and --version are not failures
            return if e.use_stderr() {
                exit_code(EXIT_USAGE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let config = match StitchConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return exit_code(e.exit_code());
        }
    };

    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());
    let format = LogFormat::from_json_flag(cli.log_json || config.logging.json);
    if let Err(e) = init_logging(&level, format) {
        eprintln!("Error: {:#}", e);
        return exit_code(EXIT_USAGE);
    }

    info!("Starting StitchX v{}", env!("CARGO_PKG_VERSION"));

    match commands::stitch(cli.stitch, &config).await {
        Ok(report) => {
            info!(
                "Stitched {} clips{}",
                report.clip_count(),
                if report.fast { " (fast mode)" } else { "" }
            );
            println!("Done → {}", report.output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit_code(e.exit_code())
        }
    }
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(EXIT_FAILURE as u8))
}
