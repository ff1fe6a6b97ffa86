// Stitch interactor - Orchestrates the enumerate, plan, normalize, join pipeline

use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;
use tracing::{error, info, info_span, warn, Instrument};

use crate::catalog::ClipCatalog;
use crate::domain::errors::*;
use crate::domain::model::*;
use crate::engine::{ClipNormalizer, Concatenator};
use crate::planner::{OrderPlanner, ProfileResolver};
use crate::ports::*;

/// Prefix of the scoped directory holding intermediate clips
pub const WORK_DIR_PREFIX: &str = "stitchx_";

/// Interactor for the stitching use case
pub struct StitchInteractor {
    probe_port: Arc<dyn ProbePort>,
    transcode_port: Arc<dyn TranscodePort>,
    join_port: Arc<dyn JoinPort>,
    toolchain_port: Arc<dyn ToolchainPort>,
    /// Parent for the intermediate directory; the system temp dir when unset
    work_root: Option<PathBuf>,
}

impl StitchInteractor {
    /// Create new stitch interactor with injected ports
    pub fn new(
        probe_port: Arc<dyn ProbePort>,
        transcode_port: Arc<dyn TranscodePort>,
        join_port: Arc<dyn JoinPort>,
        toolchain_port: Arc<dyn ToolchainPort>,
    ) -> Self {
        Self {
            probe_port,
            transcode_port,
            join_port,
            toolchain_port,
            work_root: None,
        }
    }

    /// Place intermediate directories under `root` instead of the system temp dir
    pub fn with_work_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.work_root = Some(root.into());
        self
    }

    /// Run the whole pipeline for `request`
    ///
    /// Every failure is fatal and returned unchanged; nothing is retried.
    pub async fn execute(&self, request: StitchRequest) -> StitchResult<StitchReport> {
        let span = info_span!("stitch", folder = %request.folder.display());
        let result = self.run(request).instrument(span).await;
        if let Err(e) = &result {
            error!("Stitching failed: {}", e);
        }
        result
    }

    async fn run(&self, request: StitchRequest) -> StitchResult<StitchReport> {
        enter(PipelineStage::Enumerating);
        let catalog = ClipCatalog::scan(&request.folder, &request.extension)?;
        let start = catalog.resolve_start(&request.start)?;
        info!("Found {} clips. Starting with: {}", catalog.len(), start);

        self.toolchain_port.verify_available().await?;

        enter(PipelineStage::PlanningOrder);
        let order = OrderPlanner::plan_seeded(catalog.clips(), &start, request.seed)?;

        enter(PipelineStage::ResolvingProfile);
        let profile = ProfileResolver::new(self.probe_port.as_ref(), &request.defaults)
            .resolve(&request.overrides, order.start())
            .await;

        let concatenator = Concatenator::new(Arc::clone(&self.join_port));
        if request.fast {
            enter(PipelineStage::FastConcat);
            info!("FAST mode: attempting direct concat without re-encode, all clips must match");
            concatenator.concat(&order.paths(), &request.output).await?;
        } else {
            self.normalize_and_join(&order, &profile, &concatenator, &request.output)
                .await?;
        }

        enter(PipelineStage::Done);
        info!("Done → {}", request.output.display());
        Ok(StitchReport {
            output: request.output,
            order,
            profile,
            fast: request.fast,
        })
    }

    /// Normalize every clip into a scoped temp dir, then join the results
    ///
    /// The temp dir is dropped on every exit path, taking the intermediates
    /// with it.
    async fn normalize_and_join(
        &self,
        order: &PlayOrder,
        profile: &EncodingProfile,
        concatenator: &Concatenator,
        output: &std::path::Path,
    ) -> StitchResult<()> {
        let work_dir = self.create_work_dir()?;

        enter(PipelineStage::Normalizing);
        info!("Normalizing {} clips (this may take a while)", order.len());
        let normalizer = ClipNormalizer::new(Arc::clone(&self.transcode_port), profile.clone());
        let parts = normalizer
            .normalize_all(order.clips(), work_dir.path())
            .await?;

        enter(PipelineStage::Concatenating);
        let part_paths: Vec<PathBuf> = parts.into_iter().map(|part| part.path).collect();
        concatenator.concat(&part_paths, output).await?;

        // The output is complete at this point; leftovers are not a failure
        let location = work_dir.path().to_path_buf();
        if let Err(e) = work_dir.close() {
            warn!(
                "Could not remove intermediate directory {}: {}",
                location.display(),
                e
            );
        }
        Ok(())
    }

    fn create_work_dir(&self) -> StitchResult<TempDir> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(WORK_DIR_PREFIX);
        let dir = match &self.work_root {
            Some(root) => builder.tempdir_in(root),
            None => builder.tempdir(),
        }
        .map_err(|e| DomainError::io("creating intermediate directory", e))?;

        info!("Intermediate clips in {}", dir.path().display());
        Ok(dir)
    }
}

fn enter(stage: PipelineStage) {
    tracing::debug!(%stage, "Entering pipeline stage");
}
