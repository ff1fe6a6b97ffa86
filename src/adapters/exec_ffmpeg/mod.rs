//! FFmpeg execution adapter
//!
//! This module provides the transcoder and the stream-copy joiner, both
//! implemented by invoking the `ffmpeg` binary.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::error;

use crate::adapters::run_tool;
use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;

/// FFmpeg-based execution adapter
pub struct FfmpegAdapter {
    binary: PathBuf,
}

impl FfmpegAdapter {
    /// Create new FFmpeg adapter using `binary` as the executable
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }
}

/// Arguments that re-encode `source` into `profile` at `destination`
pub fn normalize_args(source: &Path, destination: &Path, profile: &EncodingProfile) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["-y".into(), "-i".into(), source.into()];
    args.extend(
        [
            "-vf".to_string(),
            profile.filter_expression(),
            "-c:v".to_string(),
            "libx264".to_string(),
            "-preset".to_string(),
            profile.preset.clone(),
            "-crf".to_string(),
            profile.crf.to_string(),
            "-pix_fmt".to_string(),
            "yuv420p".to_string(),
            "-r".to_string(),
            profile.fps.to_string(),
            "-c:a".to_string(),
            "aac".to_string(),
            "-b:a".to_string(),
            profile.audio_bitrate.clone(),
            "-ar".to_string(),
            AUDIO_SAMPLE_RATE.to_string(),
            "-ac".to_string(),
            AUDIO_CHANNELS.to_string(),
        ]
        .into_iter()
        .map(OsString::from),
    );
    args.push(destination.into());
    args
}

/// Arguments that stream-copy the files listed in `manifest` into `output`
pub fn concat_args(manifest: &Path, output: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = ["-y", "-f", "concat", "-safe", "0", "-i"]
        .into_iter()
        .map(OsString::from)
        .collect();
    args.push(manifest.into());
    args.extend(["-c", "copy"].into_iter().map(OsString::from));
    args.push(output.into());
    args
}

#[async_trait]
impl TranscodePort for FfmpegAdapter {
    async fn transcode(
        &self,
        source: &Path,
        destination: &Path,
        profile: &EncodingProfile,
    ) -> Result<(), DomainError> {
        let args = normalize_args(source, destination, profile);
        let status = run_tool(self.binary.as_os_str(), &args).await?;

        if !status.success() {
            error!("Command failed with exit code {:?}", status.code());
            return Err(DomainError::Transcode {
                clip: source
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| source.to_string_lossy().into_owned()),
                status: status.code(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl JoinPort for FfmpegAdapter {
    async fn join(&self, manifest: &Path, output: &Path) -> Result<(), DomainError> {
        let args = concat_args(manifest, output);
        let status = run_tool(self.binary.as_os_str(), &args).await?;

        if !status.success() {
            error!("Command failed with exit code {:?}", status.code());
            return Err(DomainError::Concat {
                status: status.code(),
            });
        }
        Ok(())
    }
}
