//! Clip enumeration
//!
//! Lists eligible clips directly inside a folder and resolves the starting
//! clip against that listing.

use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::domain::errors::{DomainError, StitchResult};
use crate::domain::model::Clip;

/// Eligible clips of one folder, sorted by file name
#[derive(Debug, Clone)]
pub struct ClipCatalog {
    folder: PathBuf,
    clips: Vec<Clip>,
}

impl ClipCatalog {
    /// Enumerate every file directly inside `folder` whose extension matches
    /// `extension` case-insensitively
    pub fn scan(folder: &Path, extension: &str) -> StitchResult<Self> {
        if !folder.is_dir() {
            return Err(DomainError::FolderNotFound(folder.to_path_buf()));
        }
        let folder = folder
            .canonicalize()
            .map_err(|e| DomainError::io(format!("resolving {}", folder.display()), e))?;

        let wanted = extension.trim_start_matches('.');
        let mut clips = Vec::new();
        for entry in WalkDir::new(&folder).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| {
                DomainError::io(
                    format!("listing {}", folder.display()),
                    e.into_io_error()
                        .unwrap_or_else(|| std::io::Error::other("directory walk failed")),
                )
            })?;

            // Symlinks to regular files count as clips
            if !entry.path().is_file() {
                continue;
            }
            if has_extension(entry.path(), wanted) {
                clips.push(Clip::new(entry.into_path()));
            } else {
                debug!("Skipping non-clip file: {}", entry.path().display());
            }
        }

        if clips.is_empty() {
            return Err(DomainError::NoClips {
                folder,
                extension: wanted.to_string(),
            });
        }

        clips.sort_by(|a, b| a.name().cmp(&b.name()));
        info!("Found {} clips in {}", clips.len(), folder.display());

        Ok(Self { folder, clips })
    }

    /// Find the enumerated clip named `start`
    ///
    /// `start` is either a bare file name or a path that resolves to one of
    /// this folder's eligible clips.
    pub fn resolve_start(&self, start: &str) -> StitchResult<Clip> {
        let direct = self.folder.join(start).canonicalize().ok();

        self.clips
            .iter()
            .find(|clip| clip.name() == start || direct.as_deref() == Some(clip.path()))
            .cloned()
            .ok_or_else(|| DomainError::StartNotFound {
                start: start.to_string(),
                folder: self.folder.clone(),
            })
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Clips in deterministic file-name order
    pub fn clips(&self) -> &[Clip] {
        &self.clips
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(extension))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn folder_with(files: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in files {
            fs::write(dir.path().join(name), b"clip").unwrap();
        }
        dir
    }

    #[test]
    fn test_scan_filters_and_sorts() {
        let dir = folder_with(&["c.mp4", "a.MP4", "notes.txt", "b.mp4", "cover.png"]);
        fs::create_dir(dir.path().join("nested.mp4")).unwrap();

        let catalog = ClipCatalog::scan(dir.path(), "mp4").unwrap();
        let names: Vec<String> = catalog.clips().iter().map(Clip::name).collect();

        assert_eq!(names, vec!["a.MP4", "b.mp4", "c.mp4"]);
    }

    #[test]
    fn test_scan_does_not_recurse() {
        let dir = folder_with(&["top.mp4"]);
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("deep.mp4"), b"clip").unwrap();

        let catalog = ClipCatalog::scan(dir.path(), "mp4").unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.clips()[0].name(), "top.mp4");
    }

    #[test]
    fn test_scan_missing_folder() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("gone");

        let err = ClipCatalog::scan(&missing, "mp4").unwrap_err();
        assert!(matches!(err, DomainError::FolderNotFound(_)));
    }

    #[test]
    fn test_scan_file_instead_of_folder() {
        let dir = folder_with(&["a.mp4"]);

        let err = ClipCatalog::scan(&dir.path().join("a.mp4"), "mp4").unwrap_err();
        assert!(matches!(err, DomainError::FolderNotFound(_)));
    }

    #[test]
    fn test_scan_empty_folder() {
        let dir = folder_with(&["readme.md"]);

        let err = ClipCatalog::scan(dir.path(), "mp4").unwrap_err();
        assert!(matches!(err, DomainError::NoClips { .. }));
    }

    #[test]
    fn test_resolve_start_by_name() {
        let dir = folder_with(&["a.mp4", "b.mp4"]);
        let catalog = ClipCatalog::scan(dir.path(), "mp4").unwrap();

        let start = catalog.resolve_start("b.mp4").unwrap();
        assert_eq!(start.name(), "b.mp4");
        assert!(start.path().is_absolute());
    }

    #[test]
    fn test_resolve_start_rejects_non_clip() {
        let dir = folder_with(&["a.mp4", "intro.mov"]);
        let catalog = ClipCatalog::scan(dir.path(), "mp4").unwrap();

        let err = catalog.resolve_start("intro.mov").unwrap_err();
        assert!(matches!(err, DomainError::StartNotFound { .. }));
    }

    #[test]
    fn test_resolve_start_accepts_path_inside_folder() {
        let dir = folder_with(&["a.mp4", "b.mp4"]);
        let catalog = ClipCatalog::scan(dir.path(), "mp4").unwrap();

        let inside = catalog.folder().join("a.mp4");
        let start = catalog.resolve_start(&inside.to_string_lossy()).unwrap();
        assert_eq!(start.name(), "a.mp4");
    }

    #[test]
    fn test_resolve_start_ignores_files_elsewhere() {
        let dir = folder_with(&["a.mp4"]);
        let other = folder_with(&["a.mp4"]);
        let catalog = ClipCatalog::scan(dir.path(), "mp4").unwrap();

        let outside = other.path().join("a.mp4");
        let err = catalog
            .resolve_start(&outside.to_string_lossy())
            .unwrap_err();
        assert!(matches!(err, DomainError::StartNotFound { .. }));
    }
}
