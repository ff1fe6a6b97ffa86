use std::sync::Arc;

use crate::adapters::{FfmpegAdapter, FfmpegToolchain, FfprobeAdapter};
use crate::app::stitch_interactor::StitchInteractor;
use crate::config::ToolsConfig;
use crate::ports::{JoinPort, ProbePort, ToolchainPort, TranscodePort};

pub trait AppContainer: Send + Sync {
    fn stitch_interactor(&self) -> Arc<StitchInteractor>;
}

/// Container wiring the ffmpeg/ffprobe adapters into the interactor
pub struct DefaultAppContainer {
    stitch_interactor: Arc<StitchInteractor>,
}

impl DefaultAppContainer {
    pub fn new(tools: &ToolsConfig) -> Self {
        let ffmpeg = Arc::new(FfmpegAdapter::new(tools.ffmpeg.clone()));
        let probe_port = Arc::new(FfprobeAdapter::new(tools.ffprobe.clone()));
        let toolchain_port = Arc::new(FfmpegToolchain::new(
            tools.ffmpeg.clone(),
            tools.ffprobe.clone(),
        ));

        let stitch_interactor = Arc::new(StitchInteractor::new(
            probe_port as Arc<dyn ProbePort>,
            Arc::clone(&ffmpeg) as Arc<dyn TranscodePort>,
            ffmpeg as Arc<dyn JoinPort>,
            toolchain_port as Arc<dyn ToolchainPort>,
        ));

        Self { stitch_interactor }
    }
}

impl AppContainer for DefaultAppContainer {
    fn stitch_interactor(&self) -> Arc<StitchInteractor> {
        Arc::clone(&self.stitch_interactor)
    }
}
