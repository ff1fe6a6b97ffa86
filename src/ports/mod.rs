// Ports - Interface definitions (contracts)

use std::path::Path;

use async_trait::async_trait;

use crate::domain::errors::*;
use crate::domain::model::*;

/// Port for media dimension probing
#[async_trait]
pub trait ProbePort: Send + Sync {
    /// Width and height of the primary video stream
    async fn probe_dimensions(&self, file_path: &Path) -> Result<Dimensions, DomainError>;
}

/// Port for re-encoding one clip into the shared profile
#[async_trait]
pub trait TranscodePort: Send + Sync {
    /// Write a normalized copy of `source` at `destination`
    ///
    /// A tool that runs and fails must be reported as `DomainError::Transcode`.
    async fn transcode(
        &self,
        source: &Path,
        destination: &Path,
        profile: &EncodingProfile,
    ) -> Result<(), DomainError>;
}

/// Port for stream-copy joining of already compatible files
#[async_trait]
pub trait JoinPort: Send + Sync {
    /// Join the files listed in `manifest` into `output`, overwriting it
    ///
    /// A tool that runs and fails must be reported as `DomainError::Concat`.
    async fn join(&self, manifest: &Path, output: &Path) -> Result<(), DomainError>;
}

/// Port for checking that the external toolchain is reachable
#[async_trait]
pub trait ToolchainPort: Send + Sync {
    /// Fail with `DomainError::ToolUnavailable` if any required tool cannot run
    async fn verify_available(&self) -> Result<(), DomainError>;
}
