//! Encoding profile resolution

use tracing::{info, warn};

use crate::domain::model::{Clip, Dimensions, EncodingProfile, ProfileDefaults, ProfileOverrides};
use crate::ports::ProbePort;

/// Resolver that fills every profile field from flags, probing or defaults
pub struct ProfileResolver<'a> {
    probe: &'a dyn ProbePort,
    defaults: &'a ProfileDefaults,
}

impl<'a> ProfileResolver<'a> {
    pub fn new(probe: &'a dyn ProbePort, defaults: &'a ProfileDefaults) -> Self {
        Self { probe, defaults }
    }

    /// Resolve the target profile
    ///
    /// The start clip is probed only when a dimension is missing. A failed
    /// probe falls back to the default size and never fails the run.
    pub async fn resolve(&self, overrides: &ProfileOverrides, start: &Clip) -> EncodingProfile {
        let size = self.resolve_size(overrides, start).await;

        let profile = EncodingProfile {
            width: size.width,
            height: size.height,
            fps: overrides.fps.unwrap_or(self.defaults.fps),
            crf: overrides.crf.unwrap_or(self.defaults.crf),
            preset: overrides
                .preset
                .clone()
                .unwrap_or_else(|| self.defaults.preset.clone()),
            audio_bitrate: overrides
                .audio_bitrate
                .clone()
                .unwrap_or_else(|| self.defaults.audio_bitrate.clone()),
        };

        info!("Target size: {} @ {}fps", size, profile.fps);
        profile
    }

    async fn resolve_size(&self, overrides: &ProfileOverrides, start: &Clip) -> Dimensions {
        if let (Some(width), Some(height)) = (overrides.width, overrides.height) {
            return Dimensions { width, height };
        }

        let probed = match self.probe.probe_dimensions(start.path()).await {
            Ok(dims) => dims,
            Err(e) => {
                warn!(
                    "Could not probe {} ({}), using {}",
                    start, e, self.defaults.fallback
                );
                self.defaults.fallback
            }
        };

        Dimensions {
            width: overrides.width.unwrap_or(probed.width),
            height: overrides.height.unwrap_or(probed.height),
        }
    }
}
