//! Event-style host adapter.
//!
//! Newer engines deliver a stream of events and run asset processing in
//! stages. Module-asset notifications arrive through the loader of the
//! current compilation, so they only count once a compilation has been
//! attached. The manifest is computed at the `Report` stage, after every
//! other stage has had a chance to add or rename assets.

use anyhow::Result;

use super::{BuildLifecycle, Compilation, EngineOptions};
use crate::debug;
use crate::emit::EmitOutcome;

/// Asset processing stages, in the order the engine runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ProcessAssetsStage {
    Additional,
    Optimize,
    Summarize,
    Report,
}

#[derive(Debug)]
pub enum HostEvent<'a> {
    BeforeRun,
    WatchRun,
    /// A new compilation was created for the current cycle.
    ThisCompilation,
    /// A loader wrote `file`; `module` is the request of the owning module,
    /// when there is one.
    LoaderEmitFile {
        module: Option<&'a str>,
        file: &'a str,
    },
    ProcessAssets {
        stage: ProcessAssetsStage,
        compilation: &'a mut Compilation,
    },
}

#[derive(Debug)]
pub struct ModernHost<L> {
    engine: EngineOptions,
    lifecycle: L,
    attached: bool,
}

impl<L: BuildLifecycle> ModernHost<L> {
    pub fn new(engine: EngineOptions, lifecycle: L) -> Self {
        Self {
            engine,
            lifecycle,
            attached: false,
        }
    }

    /// Translate one engine event. Returns the emit outcome for the
    /// `Report` stage, `None` for everything else.
    pub fn dispatch(&mut self, event: HostEvent<'_>) -> Result<Option<EmitOutcome>> {
        match event {
            HostEvent::BeforeRun | HostEvent::WatchRun => {
                self.lifecycle.on_cycle_start(&self.engine);
            }
            HostEvent::ThisCompilation => self.attached = true,
            HostEvent::LoaderEmitFile { module, file } => match module {
                Some(module) if self.attached => self.lifecycle.on_module_asset(module, file),
                _ => debug!("emit"; "ignored loader file {}", file),
            },
            HostEvent::ProcessAssets {
                stage: ProcessAssetsStage::Report,
                compilation,
            } => return self.lifecycle.on_assets_finalized(compilation).map(Some),
            HostEvent::ProcessAssets { .. } => {}
        }
        Ok(None)
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
