// Toolchain adapter - verifies ffmpeg and ffprobe can be launched

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

use crate::domain::errors::*;
use crate::ports::*;

/// Checks the external binaries once before any media work
pub struct FfmpegToolchain {
    tools: Vec<PathBuf>,
}

impl FfmpegToolchain {
    pub fn new(ffmpeg: impl Into<PathBuf>, ffprobe: impl Into<PathBuf>) -> Self {
        Self {
            tools: vec![ffmpeg.into(), ffprobe.into()],
        }
    }

    async fn check(tool: &Path) -> Result<(), DomainError> {
        let unavailable = |reason: String| DomainError::ToolUnavailable {
            tool: tool.to_string_lossy().into_owned(),
            reason,
        };

        let status = Command::new(tool)
            .arg("-version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| unavailable(e.to_string()))?;

        if !status.success() {
            return Err(unavailable(format!("-version exited with {:?}", status.code())));
        }
        debug!("{} is available", tool.display());
        Ok(())
    }
}

#[async_trait]
impl ToolchainPort for FfmpegToolchain {
    async fn verify_available(&self) -> Result<(), DomainError> {
        for tool in &self.tools {
            Self::check(tool).await?;
        }
        info!("External toolchain verified");
        Ok(())
    }
}
