//! File-list transform pipeline.
//!
//! Turns classified entries into the final list the manifest is built from.
//! Stage order is fixed; each stage only sees the output of the previous one.
//!
//! ```text
//! noise → base path (+ key hash) → public path → separators → filter → map → sort
//! ```
//!
//! The noise filter runs on unprefixed names: a manifest is excluded by the
//! name the engine gave it, before any base path is applied.

pub mod transform;

use std::path::{Path, PathBuf};

use crate::asset::FileEntry;
use crate::config::ManifestOptions;

pub use transform::{
    BasePath, HOT_UPDATE_MARKER, NoiseFilter, PublicPath, Separators, Transform, UserFilter,
    UserMap, UserSort, to_slash,
};

/// Owned value threaded through a chain of transforms.
pub struct Pipeline<T> {
    inner: T,
}

impl Pipeline<Vec<FileEntry>> {
    pub fn new(files: Vec<FileEntry>) -> Self {
        Self { inner: files }
    }

    #[inline]
    pub fn pipe(self, stage: impl Transform) -> Self {
        Self {
            inner: stage.transform(self.inner),
        }
    }

    /// Apply the stage built from `value`, when present.
    #[inline]
    pub fn pipe_opt<V, S: Transform>(self, value: Option<V>, stage: impl FnOnce(V) -> S) -> Self {
        match value {
            Some(value) => self.pipe(stage(value)),
            None => self,
        }
    }

    pub fn into_inner(self) -> Vec<FileEntry> {
        self.inner
    }
}

/// Per-cycle inputs of the pipeline that do not come from the options.
#[derive(Debug, Clone, Copy)]
pub struct PipelineContext<'a> {
    pub output_dir: &'a Path,
    /// Engine public path, used when the options leave it unset.
    pub engine_public_path: &'a str,
    /// Absolute paths of every manifest known to the emit registry.
    pub manifests: &'a [PathBuf],
}

/// Run all stages in order.
pub fn run(files: Vec<FileEntry>, options: &ManifestOptions, ctx: PipelineContext<'_>) -> Vec<FileEntry> {
    let public_path = options
        .public_path
        .as_deref()
        .unwrap_or(ctx.engine_public_path);

    Pipeline::new(files)
        .pipe(NoiseFilter::new(ctx.output_dir, ctx.manifests))
        .pipe(BasePath::new(&options.base_path, options.remove_key_hash.as_ref()))
        .pipe(PublicPath::new(public_path))
        .pipe(Separators)
        .pipe_opt(options.filter.as_ref(), UserFilter)
        .pipe_opt(options.map.as_ref(), UserMap)
        .pipe_opt(options.sort.as_ref(), UserSort)
        .into_inner()
}

#[cfg(test)]
mod tests;
