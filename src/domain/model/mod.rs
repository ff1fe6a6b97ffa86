// Domain models - Core types and data structures

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::errors::DomainError;

#[cfg(test)]
mod tests;

/// Fallback target width when the starting clip cannot be probed
pub const DEFAULT_WIDTH: u32 = 1920;
/// Fallback target height when the starting clip cannot be probed
pub const DEFAULT_HEIGHT: u32 = 1080;
/// Default output frame rate
pub const DEFAULT_FPS: u32 = 30;
/// Default x264 constant rate factor
pub const DEFAULT_CRF: u8 = 20;
/// Default x264 preset
pub const DEFAULT_PRESET: &str = "medium";
/// Default AAC bitrate token
pub const DEFAULT_AUDIO_BITRATE: &str = "192k";
/// Audio sample rate every normalized clip is resampled to
pub const AUDIO_SAMPLE_RATE: u32 = 48_000;
/// Audio channel count every normalized clip is mixed to
pub const AUDIO_CHANNELS: u32 = 2;

/// One source media file eligible for inclusion
///
/// Identity is the resolved path; two clips compare equal when their paths do.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Clip {
    path: PathBuf,
}

impl Clip {
    /// Create a clip from an already resolved path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Absolute path of the source file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name used for display and start-clip matching
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }
}

impl fmt::Display for Clip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Final sequence in which clips appear in the output
///
/// The first clip is always the designated start; the rest is a permutation
/// of every other enumerated clip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOrder {
    clips: Vec<Clip>,
}

impl PlayOrder {
    /// Build a play order from a start clip and the already shuffled remainder
    pub fn new(start: Clip, rest: Vec<Clip>) -> Result<Self, DomainError> {
        if rest.contains(&start) {
            return Err(DomainError::BadArgs(format!(
                "start clip '{}' appears twice in play order",
                start
            )));
        }
        let mut clips = Vec::with_capacity(rest.len() + 1);
        clips.push(start);
        clips.extend(rest);
        Ok(Self { clips })
    }

    /// The designated starting clip
    pub fn start(&self) -> &Clip {
        &self.clips[0]
    }

    pub fn clips(&self) -> &[Clip] {
        &self.clips
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    /// A play order always holds at least the start clip
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Source paths in play order
    pub fn paths(&self) -> Vec<PathBuf> {
        self.clips.iter().map(|clip| clip.path().to_path_buf()).collect()
    }

    /// Display names in play order
    pub fn names(&self) -> Vec<String> {
        self.clips.iter().map(Clip::name).collect()
    }
}

/// Frame dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    /// Create dimensions, rejecting zero sizes
    pub fn new(width: u32, height: u32) -> Result<Self, DomainError> {
        if width == 0 || height == 0 {
            return Err(DomainError::BadArgs(format!(
                "Dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        Ok(Self { width, height })
    }

    /// Parse prober output of the form `WIDTHxHEIGHT`
    ///
    /// Only the first non-empty line is considered; anything else is unknown.
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let line = text
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .ok_or_else(|| DomainError::Probe("empty dimension output".to_string()))?;

        let (w, h) = line
            .split_once('x')
            .ok_or_else(|| DomainError::Probe(format!("unparsable dimensions: {}", line)))?;

        let width = w
            .trim()
            .parse::<u32>()
            .map_err(|_| DomainError::Probe(format!("invalid width: {}", w)))?;
        let height = h
            .trim()
            .parse::<u32>()
            .map_err(|_| DomainError::Probe(format!("invalid height: {}", h)))?;

        Self::new(width, height)
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Target parameters every normalized clip must match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingProfile {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    /// Constant rate factor, lower is higher fidelity
    pub crf: u8,
    pub preset: String,
    pub audio_bitrate: String,
}

impl EncodingProfile {
    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.width,
            height: self.height,
        }
    }

    /// Scale-to-fit, letterbox and frame-rate filter chain for this profile
    pub fn filter_expression(&self) -> String {
        format!(
            "scale=w={w}:h={h}:force_original_aspect_ratio=decrease,\
             pad={w}:{h}:(ow-iw)/2:(oh-ih)/2:color=black,fps={fps}",
            w = self.width,
            h = self.height,
            fps = self.fps
        )
    }
}

impl fmt::Display for EncodingProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} @ {}fps, crf {}, preset {}, audio {}",
            self.width, self.height, self.fps, self.crf, self.preset, self.audio_bitrate
        )
    }
}

/// Explicit profile values supplied by the user; unset fields are resolved later
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileOverrides {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub fps: Option<u32>,
    pub crf: Option<u8>,
    pub preset: Option<String>,
    pub audio_bitrate: Option<String>,
}

/// Defaults applied to profile fields the user left unset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDefaults {
    pub fallback: Dimensions,
    pub fps: u32,
    pub crf: u8,
    pub preset: String,
    pub audio_bitrate: String,
}

impl Default for ProfileDefaults {
    fn default() -> Self {
        Self {
            fallback: Dimensions::default(),
            fps: DEFAULT_FPS,
            crf: DEFAULT_CRF,
            preset: DEFAULT_PRESET.to_string(),
            audio_bitrate: DEFAULT_AUDIO_BITRATE.to_string(),
        }
    }
}

/// A normalized copy of one source clip awaiting the join
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntermediateClip {
    /// Position in the final join
    pub index: usize,
    pub path: PathBuf,
}

impl IntermediateClip {
    /// Intermediate file name for a sequence index
    pub fn file_name(index: usize) -> String {
        format!("part_{:04}.mp4", index)
    }

    pub fn in_dir(dir: &Path, index: usize) -> Self {
        Self {
            index,
            path: dir.join(Self::file_name(index)),
        }
    }
}

/// Everything needed for one stitching run
#[derive(Debug, Clone)]
pub struct StitchRequest {
    pub folder: PathBuf,
    /// File name of the opening clip inside `folder`
    pub start: String,
    pub output: PathBuf,
    /// Case-insensitive extension of eligible clips, without the dot
    pub extension: String,
    pub overrides: ProfileOverrides,
    pub defaults: ProfileDefaults,
    pub seed: Option<i64>,
    /// Skip normalization and join the sources directly
    pub fast: bool,
}

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct StitchReport {
    pub output: PathBuf,
    pub order: PlayOrder,
    pub profile: EncodingProfile,
    pub fast: bool,
}

impl StitchReport {
    pub fn clip_count(&self) -> usize {
        self.order.len()
    }
}

/// Pipeline stage, used for logging transitions and failure context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Enumerating,
    PlanningOrder,
    ResolvingProfile,
    FastConcat,
    Normalizing,
    Concatenating,
    Done,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineStage::Enumerating => "enumerating",
            PipelineStage::PlanningOrder => "planning-order",
            PipelineStage::ResolvingProfile => "resolving-profile",
            PipelineStage::FastConcat => "fast-concat",
            PipelineStage::Normalizing => "normalizing",
            PipelineStage::Concatenating => "concatenating",
            PipelineStage::Done => "done",
        };
        f.write_str(name)
    }
}
