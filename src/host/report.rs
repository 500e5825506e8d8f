//! Recorded build reports.
//!
//! A report is a JSON snapshot of what an engine knew at the end of a cycle.
//! Replaying it drives a lifecycle through one complete cycle, which is how
//! the CLI computes manifests without a live engine.
//!
//! ```json
//! {
//!   "output_dir": "dist",
//!   "public_path": "/static/",
//!   "chunks": [{ "id": "0", "name": "main", "files": ["main.js"], "is_initial": true }],
//!   "assets": [{ "name": "main.js", "chunks": ["0"] }, { "name": "favicon.ico" }],
//!   "entrypoints": [{ "name": "main", "files": ["main.js"] }],
//!   "module_assets": [{ "module": "src/logo.png", "file": "img/1f2e3d.png" }]
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::{BuildLifecycle, Chunk, Compilation, EmittedAsset, EngineOptions, Entrypoint};
use crate::emit::EmitOutcome;

/// One loader-copied file and the module that requested it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleAssetRecord {
    pub module: String,
    pub file: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildReport {
    pub output_dir: PathBuf,
    pub public_path: Option<String>,
    pub chunks: Vec<Chunk>,
    pub assets: Vec<EmittedAsset>,
    pub entrypoints: Vec<Entrypoint>,
    pub module_assets: Vec<ModuleAssetRecord>,
}

impl BuildReport {
    pub fn from_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read a report. A relative `output_dir` resolves against the report's
    /// own directory.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read build report {}", path.display()))?;
        let mut report = Self::from_str(&content)
            .with_context(|| format!("invalid build report {}", path.display()))?;

        if report.output_dir.is_relative()
            && let Some(parent) = path.parent()
        {
            report.output_dir = parent.join(&report.output_dir);
        }
        Ok(report)
    }

    pub fn engine(&self) -> EngineOptions {
        EngineOptions {
            output_dir: self.output_dir.clone(),
            public_path: self.public_path.clone(),
        }
    }

    pub fn compilation(&self) -> Compilation {
        let mut compilation = Compilation::new(&self.engine());
        compilation.chunks = self.chunks.clone();
        compilation.assets = self.assets.clone();
        compilation.entrypoints = self.entrypoints.clone();
        compilation
    }

    /// Run one full cycle against `lifecycle`: start, module assets in
    /// recorded order, then finalize.
    pub fn replay(&self, lifecycle: &mut impl BuildLifecycle) -> Result<(EmitOutcome, Compilation)> {
        lifecycle.on_cycle_start(&self.engine());
        for record in &self.module_assets {
            lifecycle.on_module_asset(&record.module, &record.file);
        }
        let mut compilation = self.compilation();
        let outcome = lifecycle.on_assets_finalized(&mut compilation)?;
        Ok((outcome, compilation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::tests::Recorder;
    use tempfile::TempDir;

    const REPORT: &str = r#"{
        "output_dir": "dist",
        "chunks": [{ "id": "0", "name": "main", "files": ["main.js"], "is_initial": true }],
        "assets": [{ "name": "main.js", "chunks": ["0"] }],
        "module_assets": [
            { "module": "src/a.png", "file": "a.png" },
            { "module": "src/b.png", "file": "b.png" }
        ]
    }"#;

    #[test]
    fn test_replay_order() {
        let report = BuildReport::from_str(REPORT).unwrap();
        let mut recorder = Recorder::default();
        let (_, compilation) = report.replay(&mut recorder).unwrap();

        assert_eq!(
            recorder.calls,
            [
                "start dist",
                "module src/a.png a.png",
                "module src/b.png b.png",
                "finalize dist",
            ]
        );
        assert_eq!(compilation.chunks.len(), 1);
        assert!(compilation.public_path.is_none());
    }

    #[test]
    fn test_from_path_resolves_output_dir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.json");
        fs::write(&path, REPORT).unwrap();

        let report = BuildReport::from_path(&path).unwrap();
        assert_eq!(report.output_dir, dir.path().join("dist"));
        assert_eq!(report.module_assets.len(), 2);
    }

    #[test]
    fn test_invalid_report() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.json");
        fs::write(&path, "{ not json").unwrap();

        let err = BuildReport::from_path(&path).unwrap_err();
        assert!(err.to_string().starts_with("invalid build report"));
        assert!(BuildReport::from_path(&dir.path().join("missing.json")).is_err());
    }
}
