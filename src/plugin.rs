//! The manifest plugin: one instance per configured manifest.
//!
//! Per cycle:
//!
//! ```text
//! cycle start ── registry +1
//! module asset ── remember logical name
//! assets finalized ── registry -1 → classify → pipeline → build
//!                     → before_emit → (authoritative?) serialize + emit
//!                     → after_emit
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use crate::asset::{ClassifyOptions, ModuleAssets, classify};
use crate::config::ManifestOptions;
use crate::emit::{EmitOutcome, EmitRegistry, manifest_path, write_manifest};
use crate::hooks::ManifestHooks;
use crate::host::{BuildLifecycle, Compilation, EngineOptions};
use crate::pipeline::{self, PipelineContext};
use crate::debug;

pub struct ManifestPlugin {
    options: ManifestOptions,
    registry: Arc<EmitRegistry>,
    module_assets: ModuleAssets,
    hooks: Arc<ManifestHooks>,
}

impl ManifestPlugin {
    /// Plugin sharing the process-wide emit registry.
    pub fn new(options: ManifestOptions) -> Self {
        Self {
            options,
            registry: EmitRegistry::global(),
            module_assets: ModuleAssets::new(),
            hooks: Arc::new(ManifestHooks::new()),
        }
    }

    /// Use `registry` instead of the process-wide one.
    pub fn with_registry(mut self, registry: Arc<EmitRegistry>) -> Self {
        self.registry = registry;
        self
    }

    pub fn options(&self) -> &ManifestOptions {
        &self.options
    }

    pub fn registry(&self) -> &Arc<EmitRegistry> {
        &self.registry
    }

    /// Hook lists, shareable with code that taps in after construction.
    pub fn hooks(&self) -> Arc<ManifestHooks> {
        Arc::clone(&self.hooks)
    }

    pub fn module_assets(&self) -> &ModuleAssets {
        &self.module_assets
    }

    fn output_for(&self, output_dir: &std::path::Path) -> PathBuf {
        manifest_path(output_dir, &self.options.file_name)
    }
}

impl BuildLifecycle for ManifestPlugin {
    fn on_cycle_start(&mut self, engine: &EngineOptions) {
        let output = self.output_for(&engine.output_dir);
        let pending = self.registry.begin_cycle(&output);
        debug!("emit"; "cycle start {} (pending {})", output.display(), pending);
    }

    fn on_module_asset(&mut self, module_request: &str, file: &str) {
        if self.module_assets.record(module_request, file) {
            debug!("emit"; "module asset {} <- {}", file, module_request);
        }
    }

    fn on_assets_finalized(&mut self, compilation: &mut Compilation) -> Result<EmitOutcome> {
        let output = self.output_for(compilation.output_dir());
        // Count down first: a failed cycle must not leave the counter raised.
        let decision = self.registry.finish_cycle(&output);

        let files = classify(
            &compilation.chunks,
            &compilation.assets,
            &self.module_assets,
            ClassifyOptions {
                transform_extensions: &self.options.transform_extensions,
                use_entry_keys: self.options.use_entry_keys,
            },
        );

        let manifests = self.registry.tracked_paths();
        let files = pipeline::run(
            files,
            &self.options,
            PipelineContext {
                output_dir: compilation.output_dir(),
                engine_public_path: compilation.engine_public_path(),
                manifests: &manifests,
            },
        );

        let manifest = crate::manifest::build(&self.options, &files, &compilation.entrypoints)?;
        let manifest = self.hooks.call_before_emit(manifest)?;

        let payload = if decision.is_authoritative() {
            let payload = crate::manifest::serialize(&self.options, &manifest)?;
            compilation.emit_asset(self.options.file_name.as_str(), payload.clone());
            if self.options.write_to_file_emit {
                write_manifest(&output, &payload)?;
            }
            debug!("emit"; "{} ({} entries)", self.options.file_name, files.len());
            Some(payload)
        } else {
            debug!("emit"; "skip {} ({} newer cycle pending)", self.options.file_name, decision.remaining);
            None
        };

        self.hooks.call_after_emit(&manifest);

        Ok(EmitOutcome {
            manifest,
            payload,
            output,
        })
    }
}

impl std::fmt::Debug for ManifestPlugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManifestPlugin")
            .field("options", &self.options)
            .field("module_assets", &self.module_assets.len())
            .field("hooks", &self.hooks)
            .finish()
    }
}
