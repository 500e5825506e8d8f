//! Classification of raw build output into file entries.
//!
//! Output order is significant: chunk files (engine chunk order, files in
//! listed order), then listed assets (engine asset order), then auxiliary
//! chunk files. Later stages sort stably and fold last-wins, so users can
//! rely on this order.

use std::path::Path;

use regex::Regex;
use rustc_hash::{FxHashMap, FxHashSet};

use super::{FileEntry, file_type};
use crate::host::{Chunk, EmittedAsset};

/// Output file → logical name for files copied in by input modules.
///
/// Filled incrementally from module-asset notifications and kept for the
/// lifetime of the plugin, so later cycles still see earlier discoveries.
#[derive(Debug, Default, Clone)]
pub struct ModuleAssets {
    names: FxHashMap<String, String>,
}

impl ModuleAssets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `module_request` emitted `file`.
    ///
    /// The first module to claim a file names it; returns `false` when the
    /// file was already known.
    pub fn record(&mut self, module_request: &str, file: &str) -> bool {
        if self.names.contains_key(file) {
            return false;
        }
        self.names
            .insert(file.to_string(), module_asset_name(module_request, file));
        true
    }

    pub fn get(&self, file: &str) -> Option<&str> {
        self.names.get(file).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Logical name of a module-copied file: the file's output directory joined
/// with the basename of the module that requested it.
///
/// `module_asset_name("src/images/logo.png", "img/a1b2c3.png")` → `img/logo.png`
pub fn module_asset_name(module_request: &str, file: &str) -> String {
    join_dirname(file, basename(module_request))
}

/// Knobs the classifier reads from the manifest options.
#[derive(Debug, Clone, Copy)]
pub struct ClassifyOptions<'a> {
    pub transform_extensions: &'a Regex,
    /// Key chunk files by bare chunk name (source maps keep their type).
    pub use_entry_keys: bool,
}

/// Classify chunks and assets into an ordered list of entries.
pub fn classify(
    chunks: &[Chunk],
    assets: &[EmittedAsset],
    module_assets: &ModuleAssets,
    options: ClassifyOptions<'_>,
) -> Vec<FileEntry> {
    let mut files = Vec::new();
    let mut chunk_files = FxHashSet::default();
    let mut auxiliary = Vec::new();
    let mut auxiliary_seen = FxHashSet::default();

    for chunk in chunks {
        for path in &chunk.auxiliary_files {
            if auxiliary_seen.insert(path.as_str()) {
                auxiliary.push(FileEntry::module_asset(path.as_str(), basename(path)));
            }
        }

        for path in &chunk.files {
            let name = chunk_file_name(chunk, path, options);
            files.push(FileEntry::chunk_file(
                path.as_str(),
                name,
                chunk.id.as_str(),
                chunk.is_initial,
            ));
            chunk_files.insert(path.as_str());
        }
    }

    for asset in assets {
        if chunk_files.contains(asset.name.as_str()) {
            continue;
        }
        if let Some(entry) = classify_asset(asset, module_assets) {
            auxiliary_seen.remove(asset.name.as_str());
            files.push(entry);
        }
    }

    // Auxiliary files that are also chunk files or listed assets keep that entry
    files.extend(auxiliary.into_iter().filter(|entry| {
        let path = entry.path.as_str();
        auxiliary_seen.contains(path) && !chunk_files.contains(path)
    }));

    files
}

/// Manifest key for one file of a chunk.
fn chunk_file_name(chunk: &Chunk, path: &str, options: ClassifyOptions<'_>) -> String {
    let Some(name) = chunk.name.as_deref() else {
        return path.to_string();
    };
    if options.use_entry_keys && !path.ends_with(".map") {
        return name.to_string();
    }
    format!("{name}.{}", file_type(path, options.transform_extensions))
}

/// Classify a listed asset that is not a chunk file.
///
/// Returns `None` for entry-chunk byproducts (assets that belong to a chunk
/// but were not listed among its files).
fn classify_asset(asset: &EmittedAsset, module_assets: &ModuleAssets) -> Option<FileEntry> {
    if let Some(name) = module_assets.get(&asset.name) {
        return Some(FileEntry::module_asset(asset.name.as_str(), name));
    }
    if let Some(source) = asset.source_filename.as_deref() {
        let name = join_dirname(&asset.name, basename(source));
        return Some(FileEntry::module_asset(asset.name.as_str(), name));
    }
    if asset.chunks.is_empty() {
        return Some(FileEntry::plain_asset(asset.name.as_str()));
    }
    None
}

fn basename(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}

/// `dirname(path)/file`, or just `file` when `path` has no directory.
fn join_dirname(path: &str, file: &str) -> String {
    match Path::new(path).parent().and_then(|dir| dir.to_str()) {
        Some(dir) if !dir.is_empty() => format!("{dir}/{file}"),
        _ => file.to_string(),
    }
}
