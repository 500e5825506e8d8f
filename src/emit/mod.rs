//! Emission gating and the manifest file sink.

mod registry;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde_json::Value;

pub use registry::{EmitDecision, EmitRegistry};

/// What one assets-finalized notification produced.
#[derive(Debug, Clone, PartialEq)]
pub struct EmitOutcome {
    /// Manifest computed for this cycle (after before-emit hooks).
    pub manifest: Value,
    /// Serialized payload, present only when this cycle was authoritative.
    pub payload: Option<String>,
    /// Absolute path of the manifest file this cycle targets.
    pub output: PathBuf,
}

impl EmitOutcome {
    pub fn is_authoritative(&self) -> bool {
        self.payload.is_some()
    }
}

/// Absolute identity of a manifest output: `<output_dir>/<file_name>`.
///
/// Relative output directories resolve against the current directory. No
/// filesystem access happens here, the file usually does not exist yet.
pub fn manifest_path(output_dir: &Path, file_name: &str) -> PathBuf {
    absolute(&output_dir.join(file_name))
}

pub(crate) fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Write the serialized manifest straight to disk, creating parent dirs.
pub fn write_manifest(path: &Path, payload: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, payload)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_manifest_path_absolute() {
        let path = manifest_path(Path::new("dist"), "manifest.json");
        assert!(path.is_absolute());
        assert!(path.ends_with("dist/manifest.json"));
    }

    #[test]
    fn test_manifest_path_nested_file_name() {
        let path = manifest_path(Path::new("/srv/app/dist"), "meta/assets.json");
        assert_eq!(path, PathBuf::from("/srv/app/dist/meta/assets.json"));
    }

    #[test]
    fn test_write_manifest_creates_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("build/meta/manifest.json");

        write_manifest(&path, "{}").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }
}
