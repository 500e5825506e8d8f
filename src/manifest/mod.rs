//! Manifest construction and serialization.
//!
//! The default builder folds `name → path` into the seed object, so a later
//! entry with the same name overwrites an earlier one. A configured
//! generator replaces the fold entirely and its value is used verbatim.

use anyhow::Result;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::asset::FileEntry;
use crate::config::ManifestOptions;
use crate::host::Entrypoint;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("manifest seed must be an object to fold entries into, got {0}")]
    SeedNotObject(&'static str),
}

/// Build the manifest for one cycle.
pub fn build(
    options: &ManifestOptions,
    files: &[FileEntry],
    entrypoints: &[Entrypoint],
) -> Result<Value> {
    let seed = options
        .seed
        .clone()
        .unwrap_or_else(|| Value::Object(Map::new()));

    match &options.generate {
        Some(generate) => generate(&seed, files, entrypoints),
        None => Ok(fold(seed, files)?),
    }
}

/// Default fold: `manifest[file.name] = file.path`, last write wins.
pub fn fold(seed: Value, files: &[FileEntry]) -> Result<Value, ManifestError> {
    let mut manifest = match seed {
        Value::Object(map) => map,
        other => return Err(ManifestError::SeedNotObject(json_kind(&other))),
    };

    for file in files {
        manifest.insert(file.name.clone(), Value::String(file.path.clone()));
    }

    Ok(Value::Object(manifest))
}

/// Serialize with the configured function, or pretty JSON (2-space indent).
pub fn serialize(options: &ManifestOptions, manifest: &Value) -> Result<String> {
    match &options.serialize {
        Some(serialize) => serialize(manifest),
        None => Ok(serde_json::to_string_pretty(manifest)?),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
