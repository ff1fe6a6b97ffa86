// Adapters - External system implementations

use std::ffi::{OsStr, OsString};
use std::process::{ExitStatus, Stdio};

use tokio::process::Command;
use tracing::debug;

use crate::domain::errors::DomainError;

pub mod exec_ffmpeg;
pub mod probe_ffprobe;
pub mod toolchain;

// Re-export adapters
pub use exec_ffmpeg::FfmpegAdapter;
pub use probe_ffprobe::FfprobeAdapter;
pub use toolchain::FfmpegToolchain;

/// Quote an argv for logging so it can be pasted into a POSIX shell
pub fn shell_join(program: &OsStr, args: &[OsString]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(OsString::as_os_str))
        .map(|arg| shell_quote(&arg.to_string_lossy()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn shell_quote(arg: &str) -> String {
    let safe = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=,@%+".contains(c));
    if safe {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

/// Run a tool to completion with inherited stdout/stderr
///
/// Failing to start the tool at all is `ToolUnavailable`; a tool that ran is
/// reported through its exit status for the caller to classify.
pub(crate) async fn run_tool(program: &OsStr, args: &[OsString]) -> Result<ExitStatus, DomainError> {
    debug!("→ {}", shell_join(program, args));

    Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .status()
        .await
        .map_err(|e| DomainError::ToolUnavailable {
            tool: program.to_string_lossy().into_owned(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_join_quotes_only_when_needed() {
        let args: Vec<OsString> = vec!["-i".into(), "/clips/my clip.mp4".into(), "it's".into()];
        assert_eq!(
            shell_join(OsStr::new("ffmpeg"), &args),
            r"ffmpeg -i '/clips/my clip.mp4' 'it'\''s'"
        );
    }

    #[test]
    fn test_shell_quote_empty() {
        assert_eq!(shell_quote(""), "''");
    }
}
