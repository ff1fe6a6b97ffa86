//! Clip normalization into the shared encoding profile

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};

use crate::domain::errors::StitchResult;
use crate::domain::model::{Clip, EncodingProfile, IntermediateClip};
use crate::ports::TranscodePort;

/// Normalizer that re-encodes source clips one at a time
pub struct ClipNormalizer {
    transcoder: Arc<dyn TranscodePort>,
    profile: EncodingProfile,
}

impl ClipNormalizer {
    pub fn new(transcoder: Arc<dyn TranscodePort>, profile: EncodingProfile) -> Self {
        Self {
            transcoder,
            profile,
        }
    }

    pub fn profile(&self) -> &EncodingProfile {
        &self.profile
    }

    /// Normalize `clip` into `work_dir` as the intermediate at `index`
    ///
    /// Any transcoder failure is returned as is; the caller must abort the run.
    pub async fn normalize(
        &self,
        index: usize,
        total: usize,
        clip: &Clip,
        work_dir: &Path,
    ) -> StitchResult<IntermediateClip> {
        let part = IntermediateClip::in_dir(work_dir, index);
        info!(
            "[{}/{}] {} → {}",
            index + 1,
            total,
            clip,
            IntermediateClip::file_name(index)
        );

        let started = Instant::now();
        if let Err(e) = self
            .transcoder
            .transcode(clip.path(), &part.path, &self.profile)
            .await
        {
            warn!("Normalization of {} failed: {}", clip, e);
            return Err(e);
        }

        info!(
            "Normalized {} in {:.1}s",
            clip,
            started.elapsed().as_secs_f64()
        );
        Ok(part)
    }

    /// Normalize every clip in order, stopping at the first failure
    pub async fn normalize_all(
        &self,
        clips: &[Clip],
        work_dir: &Path,
    ) -> StitchResult<Vec<IntermediateClip>> {
        let mut parts = Vec::with_capacity(clips.len());
        for (index, clip) in clips.iter().enumerate() {
            parts.push(self.normalize(index, clips.len(), clip, work_dir).await?);
        }
        Ok(parts)
    }
}
