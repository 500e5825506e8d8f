//! Callback-style host adapter.
//!
//! Older engines expose one callback per lifecycle point: `run` for a
//! one-shot build, `watch_run` for each rebuild, a per-module hook when a
//! loader copies a file, and `emit` once assets are final.

use anyhow::Result;

use super::{BuildLifecycle, Compilation, EngineOptions};
use crate::emit::EmitOutcome;

/// Module as seen by a legacy module-asset callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyModule {
    /// Request path of the module, after loader resolution.
    pub user_request: String,
}

impl LegacyModule {
    pub fn new(user_request: impl Into<String>) -> Self {
        Self {
            user_request: user_request.into(),
        }
    }
}

#[derive(Debug)]
pub struct LegacyHost<L> {
    engine: EngineOptions,
    lifecycle: L,
}

impl<L: BuildLifecycle> LegacyHost<L> {
    pub fn new(engine: EngineOptions, lifecycle: L) -> Self {
        Self { engine, lifecycle }
    }

    pub fn run(&mut self) {
        self.lifecycle.on_cycle_start(&self.engine);
    }

    pub fn watch_run(&mut self) {
        self.lifecycle.on_cycle_start(&self.engine);
    }

    pub fn module_asset(&mut self, module: &LegacyModule, file: &str) {
        self.lifecycle.on_module_asset(&module.user_request, file);
    }

    pub fn emit(&mut self, compilation: &mut Compilation) -> Result<EmitOutcome> {
        self.lifecycle.on_assets_finalized(compilation)
    }

    pub fn engine(&self) -> &EngineOptions {
        &self.engine
    }

    pub fn lifecycle(&self) -> &L {
        &self.lifecycle
    }

    pub fn into_inner(self) -> L {
        self.lifecycle
    }
}
