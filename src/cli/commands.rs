//! Command implementations

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::app::{AppContainer, DefaultAppContainer};
use crate::cli::args::StitchArgs;
use crate::config::StitchConfig;
use crate::domain::errors::{DomainError, StitchResult};
use crate::domain::model::{ProfileOverrides, StitchReport, StitchRequest};

/// Build the stitch request from flags, falling back to configuration
pub fn build_request(
    args: &StitchArgs,
    config: &StitchConfig,
    cwd: &Path,
) -> StitchResult<StitchRequest> {
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| config.defaults.output.clone());

    Ok(StitchRequest {
        folder: absolutize(cwd, &args.folder),
        start: args.start.clone(),
        output: absolutize(cwd, &output),
        extension: config.defaults.extension.clone(),
        overrides: ProfileOverrides {
            width: args.width,
            height: args.height,
            fps: args.fps,
            crf: args.crf,
            preset: args.preset.clone(),
            audio_bitrate: args.audio_bitrate.clone(),
        },
        defaults: config.defaults.profile_defaults()?,
        seed: args.seed,
        fast: args.fast,
    })
}

/// True when `output` would itself be listed as a clip of `folder`
pub fn output_in_clip_folder(request: &StitchRequest) -> bool {
    let same_dir = request.output.parent() == Some(request.folder.as_path());
    let same_ext = request
        .output
        .extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(&request.extension))
        .unwrap_or(false);
    same_dir && same_ext
}

fn absolutize(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Execute the stitch command against the real ffmpeg toolchain
pub async fn stitch(args: StitchArgs, config: &StitchConfig) -> StitchResult<StitchReport> {
    let cwd = std::env::current_dir()
        .map_err(|e| DomainError::io("reading current directory", e))?;
    let request = build_request(&args, config, &cwd)?;

    info!("Folder: {}", request.folder.display());
    info!("Start: {}", request.start);
    info!("Output: {}", request.output.display());
    if output_in_clip_folder(&request) {
        warn!(
            "Output {} is inside the clip folder and will be picked up as a clip by later runs",
            request.output.display()
        );
    }

    let container = DefaultAppContainer::new(&config.tools);
    container.stitch_interactor().execute(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    fn parse(argv: &[&str]) -> Cli {
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_minimal_args_use_config_defaults() {
        let cli = parse(&["stitcher", "--folder", "clips", "--start", "intro.mp4"]);
        let request =
            build_request(&cli.stitch, &StitchConfig::default(), Path::new("/work")).unwrap();

        assert_eq!(request.folder, PathBuf::from("/work/clips"));
        assert_eq!(request.output, PathBuf::from("/work/stitched_reel.mp4"));
        assert_eq!(request.start, "intro.mp4");
        assert_eq!(request.extension, "mp4");
        assert_eq!(request.overrides, ProfileOverrides::default());
        assert_eq!(request.seed, None);
        assert!(!request.fast);
    }

    #[test]
    fn test_all_flags() {
        let cli = parse(&[
            "stitcher",
            "--folder",
            "/clips",
            "--start",
            "0001.mp4",
            "-o",
            "/out/intro.mp4",
            "--fps",
            "24",
            "--width",
            "1080",
            "--height",
            "1920",
            "--crf",
            "18",
            "--preset",
            "slow",
            "--audio-bitrate",
            "256k",
            "--seed",
            "-3",
            "--fast",
        ]);
        let request =
            build_request(&cli.stitch, &StitchConfig::default(), Path::new("/work")).unwrap();

        assert_eq!(request.folder, PathBuf::from("/clips"));
        assert_eq!(request.output, PathBuf::from("/out/intro.mp4"));
        assert_eq!(request.overrides.width, Some(1080));
        assert_eq!(request.overrides.height, Some(1920));
        assert_eq!(request.overrides.fps, Some(24));
        assert_eq!(request.overrides.crf, Some(18));
        assert_eq!(request.overrides.preset.as_deref(), Some("slow"));
        assert_eq!(request.overrides.audio_bitrate.as_deref(), Some("256k"));
        assert_eq!(request.seed, Some(-3));
        assert!(request.fast);
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        assert!(Cli::try_parse_from(["stitcher", "--folder", "c", "--start", "a", "--fps", "0"]).is_err());
        assert!(Cli::try_parse_from(["stitcher", "--folder", "c", "--start", "a", "--crf", "52"]).is_err());
        assert!(Cli::try_parse_from(["stitcher", "--folder", "c"]).is_err());
    }

    #[test]
    fn test_output_in_clip_folder_detected() {
        let cli = parse(&["stitcher", "--folder", ".", "--start", "a.mp4"]);
        let request =
            build_request(&cli.stitch, &StitchConfig::default(), Path::new("/work")).unwrap();
        assert!(output_in_clip_folder(&request));

        let cli = parse(&["stitcher", "--folder", "clips", "--start", "a.mp4"]);
        let request =
            build_request(&cli.stitch, &StitchConfig::default(), Path::new("/work")).unwrap();
        assert!(!output_in_clip_folder(&request));

        let cli = parse(&["stitcher", "--folder", ".", "--start", "a.mp4", "-o", "reel.mkv"]);
        let request =
            build_request(&cli.stitch, &StitchConfig::default(), Path::new("/work")).unwrap();
        assert!(!output_in_clip_folder(&request));
    }

    #[test]
    fn test_config_output_used_when_flag_absent() {
        let cli = parse(&["stitcher", "--folder", "c", "--start", "a.mp4"]);
        let mut config = StitchConfig::default();
        config.defaults.output = PathBuf::from("/reels/today.mp4");

        let request = build_request(&cli.stitch, &config, Path::new("/work")).unwrap();
        assert_eq!(request.output, PathBuf::from("/reels/today.mp4"));
    }
}
