//! FFprobe adapter for media file probing
//!
//! This module provides ffprobe-based dimension lookup for the start clip.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::adapters::shell_join;
use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;

/// FFprobe-based probe adapter
pub struct FfprobeAdapter {
    binary: PathBuf,
}

impl FfprobeAdapter {
    /// Create new FFprobe adapter using `binary` as the executable
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

/// Arguments that print `WIDTHxHEIGHT` for the first video stream
pub fn dimension_args(file_path: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = [
        "-v",
        "error",
        "-select_streams",
        "v:0",
        "-show_entries",
        "stream=width,height",
        "-of",
        "csv=p=0:s=x",
    ]
    .into_iter()
    .map(OsString::from)
    .collect();
    args.push(file_path.into());
    args
}

#[async_trait]
impl ProbePort for FfprobeAdapter {
    async fn probe_dimensions(&self, file_path: &Path) -> Result<Dimensions, DomainError> {
        let args = dimension_args(file_path);
        debug!("→ {}", shell_join(self.binary.as_os_str(), &args));

        let output = Command::new(&self.binary)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| DomainError::ToolUnavailable {
                tool: self.binary.to_string_lossy().into_owned(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(DomainError::Probe(format!(
                "ffprobe exited with {:?}: {}",
                output.status.code(),
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Dimensions::parse(&String::from_utf8_lossy(&output.stdout))
    }
}
