//! Command-line argument definitions

use std::path::PathBuf;

use clap::Args;

/// Arguments for a stitch run
#[derive(Args, Debug, Clone)]
pub struct StitchArgs {
    /// Folder containing the clips (non-recursive)
    #[arg(long)]
    pub folder: PathBuf,

    /// File name of the first clip (must be inside --folder)
    #[arg(long)]
    pub start: String,

    /// Output video path (default: stitched_reel.mp4)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output frames per second (default: 30)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub fps: Option<u32>,

    /// Output width (default: start clip's width, else 1920)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: Option<u32>,

    /// Output height (default: start clip's height, else 1080)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: Option<u32>,

    /// x264 constant rate factor, lower is higher quality (default: 20)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=51))]
    pub crf: Option<u8>,

    /// x264 preset, ultrafast..veryslow (default: medium)
    #[arg(long)]
    pub preset: Option<String>,

    /// Audio bitrate (default: 192k)
    #[arg(long)]
    pub audio_bitrate: Option<String>,

    /// Random seed for reproducible shuffles
    #[arg(long, allow_negative_numbers = true)]
    pub seed: Option<i64>,

    /// Skip the normalize pass and join the clips directly (clips must match)
    #[arg(long)]
    pub fast: bool,
}
