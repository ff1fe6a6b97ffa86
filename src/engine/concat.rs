//! Lossless concatenation through a manifest file

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::domain::errors::{DomainError, StitchResult};
use crate::ports::JoinPort;

/// Render a concat manifest, one `file '<path>'` line per entry
///
/// Windows separators become forward slashes; elsewhere a backslash is an
/// ordinary file name character and is kept. A single quote is closed,
/// escaped and reopened (`'\''`) so it stays part of the literal path.
pub fn render_manifest(paths: &[PathBuf]) -> String {
    let mut manifest = String::new();
    for path in paths {
        let posix = posix_path(path);
        manifest.push_str("file '");
        manifest.push_str(&posix.replace('\'', r"'\''"));
        manifest.push_str("'\n");
    }
    manifest
}

/// Concatenator that joins same-profile files in order without re-encoding
pub struct Concatenator {
    joiner: Arc<dyn JoinPort>,
}

impl Concatenator {
    pub fn new(joiner: Arc<dyn JoinPort>) -> Self {
        Self { joiner }
    }

    /// Join `paths` in order into `output`, overwriting any existing file
    ///
    /// The manifest lives in a named temporary file that is removed when this
    /// call returns, whether the join succeeded or not.
    pub async fn concat(&self, paths: &[PathBuf], output: &Path) -> StitchResult<()> {
        if paths.is_empty() {
            return Err(DomainError::BadArgs("nothing to concatenate".to_string()));
        }

        let manifest = write_manifest(paths)?;
        debug!("Concat manifest at {}", manifest.path().display());

        info!("Concatenating {} files into {}", paths.len(), output.display());
        let result = self.joiner.join(manifest.path(), output).await;
        let removed = manifest.close();

        result?;
        removed.map_err(|e| DomainError::io("removing concat manifest", e))
    }
}

fn posix_path(path: &Path) -> String {
    let text = path.to_string_lossy();
    if cfg!(windows) {
        text.replace('\\', "/")
    } else {
        text.into_owned()
    }
}

fn write_manifest(paths: &[PathBuf]) -> StitchResult<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix("stitchx_concat_")
        .suffix(".txt")
        .tempfile()
        .map_err(|e| DomainError::io("creating concat manifest", e))?;

    file.write_all(render_manifest(paths).as_bytes())
        .and_then(|_| file.flush())
        .map_err(|e| DomainError::io("writing concat manifest", e))?;

    Ok(file)
}
