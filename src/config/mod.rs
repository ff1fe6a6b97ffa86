//! Configuration loading and hierarchy management
//!
//! Precedence, lowest to highest: built-in defaults, TOML file, environment
//! variables, command-line flags (applied by the caller).

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use crate::domain::errors::{DomainError, StitchResult};
use crate::domain::model::*;

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "stitchx.toml";
/// Output file name used when none is given
pub const DEFAULT_OUTPUT: &str = "stitched_reel.mp4";
/// Clip extension used when none is configured
pub const DEFAULT_EXTENSION: &str = "mp4";

/// Environment variable overrides and the settings they map to
const ENV_FFMPEG: &str = "STITCHX_FFMPEG";
const ENV_FFPROBE: &str = "STITCHX_FFPROBE";
const ENV_LOG_LEVEL: &str = "STITCHX_LOG_LEVEL";
const ENV_OUTPUT: &str = "STITCHX_OUTPUT";

/// Complete tool configuration
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct StitchConfig {
    pub tools: ToolsConfig,
    pub defaults: DefaultsConfig,
    pub logging: LoggingConfig,
}

/// External binary locations
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ToolsConfig {
    pub ffmpeg: PathBuf,
    pub ffprobe: PathBuf,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            ffmpeg: PathBuf::from("ffmpeg"),
            ffprobe: PathBuf::from("ffprobe"),
        }
    }
}

/// Values used for anything the command line leaves unset
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DefaultsConfig {
    pub output: PathBuf,
    pub extension: String,
    pub fps: u32,
    pub crf: u8,
    pub preset: String,
    pub audio_bitrate: String,
    pub fallback_width: u32,
    pub fallback_height: u32,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            extension: DEFAULT_EXTENSION.to_string(),
            fps: DEFAULT_FPS,
            crf: DEFAULT_CRF,
            preset: DEFAULT_PRESET.to_string(),
            audio_bitrate: DEFAULT_AUDIO_BITRATE.to_string(),
            fallback_width: DEFAULT_WIDTH,
            fallback_height: DEFAULT_HEIGHT,
        }
    }
}

impl DefaultsConfig {
    /// Profile defaults for the resolver
    pub fn profile_defaults(&self) -> StitchResult<ProfileDefaults> {
        if self.fps == 0 {
            return Err(DomainError::Config("defaults.fps must be positive".to_string()));
        }
        if self.crf > 51 {
            return Err(DomainError::Config(format!(
                "defaults.crf must be 0-51, got {}",
                self.crf
            )));
        }
        let fallback = Dimensions::new(self.fallback_width, self.fallback_height)
            .map_err(|e| DomainError::Config(format!("defaults fallback size: {}", e)))?;

        Ok(ProfileDefaults {
            fallback,
            fps: self.fps,
            crf: self.crf,
            preset: self.preset.clone(),
            audio_bitrate: self.audio_bitrate.clone(),
        })
    }
}

/// Logging settings
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl StitchConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> StitchResult<Self> {
        toml::from_str(content)
            .map_err(|e| DomainError::Config(format!("Failed to parse TOML config: {}", e)))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> StitchResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DomainError::Config(format!("Cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Load defaults, then the config file, then environment overrides
    ///
    /// An explicit `path` must exist; the implicit `./stitchx.toml` is optional.
    pub fn load(path: Option<&Path>) -> StitchResult<Self> {
        let mut config = match path {
            Some(path) => {
                info!("Loading configuration from: {}", path.display());
                Self::from_file(path)?
            }
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                info!("Loading configuration from: {}", DEFAULT_CONFIG_FILE);
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => {
                debug!("No configuration file, using defaults");
                Self::default()
            }
        };

        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply environment overrides read through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut overrides = 0;
        if let Some(value) = lookup(ENV_FFMPEG) {
            self.tools.ffmpeg = PathBuf::from(value);
            overrides += 1;
        }
        if let Some(value) = lookup(ENV_FFPROBE) {
            self.tools.ffprobe = PathBuf::from(value);
            overrides += 1;
        }
        if let Some(value) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = value;
            overrides += 1;
        }
        if let Some(value) = lookup(ENV_OUTPUT) {
            self.defaults.output = PathBuf::from(value);
            overrides += 1;
        }

        if overrides > 0 {
            debug!("Applied {} environment variable overrides", overrides);
        }
    }
}
