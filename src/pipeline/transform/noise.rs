//! Noise filter: hot-update files and other manifests.

use std::path::{Path, PathBuf};

use super::Transform;
use crate::asset::FileEntry;
use crate::emit::absolute;

/// Path marker of incremental-rebuild (hot module replacement) files.
pub const HOT_UPDATE_MARKER: &str = "hot-update";

/// Drops hot-update files and any entry that would resolve to a tracked
/// manifest output, so a manifest never lists itself or a sibling manifest.
pub struct NoiseFilter<'a> {
    output_dir: &'a Path,
    manifests: &'a [PathBuf],
}

impl<'a> NoiseFilter<'a> {
    /// `manifests` are absolute manifest paths (emit registry keys).
    pub fn new(output_dir: &'a Path, manifests: &'a [PathBuf]) -> Self {
        Self {
            output_dir,
            manifests,
        }
    }

    fn is_noise(&self, file: &FileEntry) -> bool {
        if file.path.contains(HOT_UPDATE_MARKER) {
            return true;
        }
        if self.manifests.is_empty() {
            return false;
        }
        let resolved = absolute(&self.output_dir.join(&file.name));
        self.manifests.contains(&resolved)
    }
}

impl Transform for NoiseFilter<'_> {
    fn transform(self, mut files: Vec<FileEntry>) -> Vec<FileEntry> {
        files.retain(|file| !self.is_noise(file));
        files
    }
}
