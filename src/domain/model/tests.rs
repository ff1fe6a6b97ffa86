// Unit tests for domain models

use super::*;
use crate::domain::errors::*;

#[test]
fn test_clip_name_is_file_name() {
    let clip = Clip::new("/videos/sora/take1.mp4");
    assert_eq!(clip.name(), "take1.mp4");
    assert_eq!(clip.to_string(), "take1.mp4");
}

#[test]
fn test_clip_identity_is_path() {
    assert_eq!(Clip::new("/a/x.mp4"), Clip::new("/a/x.mp4"));
    assert_ne!(Clip::new("/a/x.mp4"), Clip::new("/b/x.mp4"));
}

#[test]
fn test_play_order_puts_start_first() {
    let order = PlayOrder::new(
        Clip::new("/c/b.mp4"),
        vec![Clip::new("/c/c.mp4"), Clip::new("/c/a.mp4")],
    )
    .unwrap();

    assert_eq!(order.start().name(), "b.mp4");
    assert_eq!(order.names(), vec!["b.mp4", "c.mp4", "a.mp4"]);
    assert_eq!(order.len(), 3);
}

#[test]
fn test_play_order_rejects_duplicate_start() {
    let result = PlayOrder::new(Clip::new("/c/a.mp4"), vec![Clip::new("/c/a.mp4")]);
    assert!(matches!(result, Err(DomainError::BadArgs(_))));
}

#[test]
fn test_dimensions_parse_csv_output() {
    let dims = Dimensions::parse("1280x720\n").unwrap();
    assert_eq!(dims, Dimensions { width: 1280, height: 720 });
}

#[test]
fn test_dimensions_parse_uses_first_line() {
    let dims = Dimensions::parse("\n720x1280\n1920x1080\n").unwrap();
    assert_eq!(dims.width, 720);
    assert_eq!(dims.height, 1280);
}

#[test]
fn test_dimensions_parse_invalid() {
    assert!(Dimensions::parse("").is_err());
    assert!(Dimensions::parse("N/A").is_err());
    assert!(Dimensions::parse("1920").is_err());
    assert!(Dimensions::parse("0x1080").is_err());
    assert!(Dimensions::parse("widexhigh").is_err());
}

#[test]
fn test_filter_expression_scales_pads_and_resamples() {
    let profile = EncodingProfile {
        width: 1080,
        height: 1920,
        fps: 24,
        crf: 18,
        preset: "slow".to_string(),
        audio_bitrate: "128k".to_string(),
    };

    assert_eq!(
        profile.filter_expression(),
        "scale=w=1080:h=1920:force_original_aspect_ratio=decrease,\
         pad=1080:1920:(ow-iw)/2:(oh-ih)/2:color=black,fps=24"
    );
}

#[test]
fn test_intermediate_clip_naming() {
    let part = IntermediateClip::in_dir(Path::new("/tmp/stitchx_abc"), 7);
    assert_eq!(part.index, 7);
    assert_eq!(part.path, PathBuf::from("/tmp/stitchx_abc/part_0007.mp4"));
}

#[test]
fn test_profile_defaults() {
    let defaults = ProfileDefaults::default();
    assert_eq!(defaults.fallback, Dimensions { width: 1920, height: 1080 });
    assert_eq!(defaults.fps, 30);
    assert_eq!(defaults.crf, 20);
    assert_eq!(defaults.preset, "medium");
    assert_eq!(defaults.audio_bitrate, "192k");
}
