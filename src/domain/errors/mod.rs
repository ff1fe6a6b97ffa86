// Domain errors - Error types for the stitching pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Exit status used when a failure carries no status of its own
pub const EXIT_FAILURE: i32 = 1;
/// Exit status for a missing clip folder
pub const EXIT_FOLDER_NOT_FOUND: i32 = 2;
/// Exit status for a folder without eligible clips
pub const EXIT_NO_CLIPS: i32 = 3;
/// Exit status for a starting clip that is not among the enumerated clips
pub const EXIT_START_NOT_FOUND: i32 = 4;
/// Exit status for bad arguments or configuration (EX_USAGE)
pub const EXIT_USAGE: i32 = 64;
/// Exit status for local I/O failures (EX_IOERR)
pub const EXIT_IO: i32 = 74;

/// Domain-specific error types
#[derive(Error, Debug)]
pub enum DomainError {
    /// Clip folder missing or not a directory
    #[error("Folder not found: {}", .0.display())]
    FolderNotFound(PathBuf),

    /// No eligible clips in the folder
    #[error("No .{extension} files found in {}", .folder.display())]
    NoClips { folder: PathBuf, extension: String },

    /// Starting clip is not one of the enumerated clips
    #[error("Start file '{start}' not found in {}", .folder.display())]
    StartNotFound { start: String, folder: PathBuf },

    /// A required external tool could not be run at all
    #[error("{tool} not found or not runnable ({reason}); install ffmpeg and ensure it is on PATH")]
    ToolUnavailable { tool: String, reason: String },

    /// Transcoder ran and exited with failure
    #[error("Normalizing '{clip}' failed with {}", describe_status(.status))]
    Transcode { clip: String, status: Option<i32> },

    /// Joiner ran and exited with failure
    #[error("Concatenation failed with {}", describe_status(.status))]
    Concat { status: Option<i32> },

    /// Dimension probe ran but gave no usable answer
    #[error("Probe failed: {0}")]
    Probe(String),

    /// Invalid arguments provided
    #[error("Bad arguments: {0}")]
    BadArgs(String),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),

    /// Local filesystem failure
    #[error("I/O error: {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

fn describe_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

impl DomainError {
    /// Wrap an I/O error with a short description of what was being attempted
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        DomainError::Io {
            context: context.into(),
            source,
        }
    }

    /// Process exit status for this error
    ///
    /// Tool failures propagate the tool's own non-zero status.
    pub fn exit_code(&self) -> i32 {
        match self {
            DomainError::FolderNotFound(_) => EXIT_FOLDER_NOT_FOUND,
            DomainError::NoClips { .. } => EXIT_NO_CLIPS,
            DomainError::StartNotFound { .. } => EXIT_START_NOT_FOUND,
            DomainError::ToolUnavailable { .. } | DomainError::Probe(_) => EXIT_FAILURE,
            DomainError::Transcode { status, .. } | DomainError::Concat { status } => status
                .filter(|code| *code != 0)
                .unwrap_or(EXIT_FAILURE),
            DomainError::BadArgs(_) | DomainError::Config(_) => EXIT_USAGE,
            DomainError::Io { .. } => EXIT_IO,
        }
    }
}

/// Result type alias for pipeline operations
pub type StitchResult<T> = std::result::Result<T, DomainError>;
