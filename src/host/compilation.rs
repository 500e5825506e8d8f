//! Build engine view of a single cycle.
//!
//! These types are what a host hands to the lifecycle protocol. They are
//! read-only except for the emitted-source collection, which the manifest
//! plugin writes its serialized output into.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Public path value meaning "resolve at runtime"; contributes no prefix.
const AUTO_PUBLIC_PATH: &str = "auto";

/// Engine-level options, known before any cycle starts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    /// Output directory of the build (where emitted files land).
    pub output_dir: PathBuf,
    /// Engine-wide public path (URL prefix of emitted files).
    pub public_path: Option<String>,
}

impl EngineOptions {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            public_path: None,
        }
    }

    pub fn with_public_path(mut self, public_path: impl Into<String>) -> Self {
        self.public_path = Some(public_path.into());
        self
    }
}

/// A compiled bundle of output files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Chunk {
    pub id: String,
    pub name: Option<String>,
    /// Files owned by this chunk, in emission order.
    pub files: Vec<String>,
    /// Files referenced by this chunk but not owned by it (e.g. loader output).
    pub auxiliary_files: Vec<String>,
    /// Loaded unconditionally at application start.
    pub is_initial: bool,
}

impl Chunk {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn initial(mut self) -> Self {
        self.is_initial = true;
        self
    }

    pub fn with_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files.extend(files.into_iter().map(Into::into));
        self
    }

    pub fn with_auxiliary_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.auxiliary_files.extend(files.into_iter().map(Into::into));
        self
    }
}

/// A file in the engine's asset listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmittedAsset {
    /// Output path relative to the output directory.
    pub name: String,
    /// Ids of the chunks this asset belongs to.
    pub chunks: Vec<String>,
    /// Original source file, set for files emitted by asset modules.
    pub source_filename: Option<String>,
}

impl EmittedAsset {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn in_chunk(mut self, chunk_id: impl Into<String>) -> Self {
        self.chunks.push(chunk_id.into());
        self
    }

    pub fn with_source_filename(mut self, source: impl Into<String>) -> Self {
        self.source_filename = Some(source.into());
        self
    }
}

/// A named entry point and the files that load it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Entrypoint {
    pub name: String,
    pub files: Vec<String>,
}

/// Everything the engine exposes once assets are finalized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Compilation {
    pub output_dir: PathBuf,
    pub public_path: Option<String>,
    pub chunks: Vec<Chunk>,
    pub assets: Vec<EmittedAsset>,
    pub entrypoints: Vec<Entrypoint>,
    /// Sources added during this cycle, keyed by output-relative name.
    #[serde(skip)]
    emitted: FxHashMap<String, String>,
}

impl Compilation {
    pub fn new(engine: &EngineOptions) -> Self {
        Self {
            output_dir: engine.output_dir.clone(),
            public_path: engine.public_path.clone(),
            ..Self::default()
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Engine public path as a plain prefix (`auto` and unset map to `""`).
    pub fn engine_public_path(&self) -> &str {
        match self.public_path.as_deref() {
            Some(AUTO_PUBLIC_PATH) | None => "",
            Some(path) => path,
        }
    }

    /// Insert (or replace) an emitted source.
    pub fn emit_asset(&mut self, name: impl Into<String>, source: String) {
        self.emitted.insert(name.into(), source);
    }

    pub fn emitted_source(&self, name: &str) -> Option<&str> {
        self.emitted.get(name).map(String::as_str)
    }

    /// Emitted sources sorted by name.
    pub fn emitted(&self) -> Vec<(&str, &str)> {
        let mut sources: Vec<_> = self
            .emitted
            .iter()
            .map(|(name, source)| (name.as_str(), source.as_str()))
            .collect();
        sources.sort_unstable_by(|a, b| a.0.cmp(b.0));
        sources
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_public_path_auto() {
        let engine = EngineOptions::new("dist").with_public_path("auto");
        assert_eq!(Compilation::new(&engine).engine_public_path(), "");
    }

    #[test]
    fn test_engine_public_path_value() {
        let engine = EngineOptions::new("dist").with_public_path("/static/");
        assert_eq!(Compilation::new(&engine).engine_public_path(), "/static/");
        assert_eq!(Compilation::new(&EngineOptions::new("dist")).engine_public_path(), "");
    }

    #[test]
    fn test_emit_asset_replaces() {
        let mut compilation = Compilation::new(&EngineOptions::new("dist"));
        compilation.emit_asset("manifest.json", "{}".into());
        compilation.emit_asset("manifest.json", "{\"a\": \"b\"}".into());
        assert_eq!(compilation.emitted_source("manifest.json"), Some("{\"a\": \"b\"}"));
        assert_eq!(compilation.emitted().len(), 1);
    }

    #[test]
    fn test_compilation_from_json() {
        let json = r#"{
            "output_dir": "dist",
            "chunks": [{ "id": "0", "name": "main", "files": ["main.js"], "is_initial": true }],
            "assets": [{ "name": "main.js", "chunks": ["0"] }, { "name": "favicon.ico" }]
        }"#;
        let compilation: Compilation = serde_json::from_str(json).unwrap();
        assert_eq!(compilation.chunks[0].name.as_deref(), Some("main"));
        assert!(compilation.chunks[0].is_initial);
        assert!(compilation.assets[1].chunks.is_empty());
        assert!(compilation.emitted().is_empty());
    }
}
