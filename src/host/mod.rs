//! Host-facing side of the plugin.
//!
//! The core only understands [`BuildLifecycle`]. Each bundler dialect gets an
//! adapter that translates its own callbacks or events into these three
//! notifications:
//!
//! - `legacy`: callback-style host (`run`, `watch_run`, `module_asset`, `emit`)
//! - `modern`: event-style host with staged asset processing
//! - `report`: offline host replaying a recorded build report

mod compilation;
pub mod legacy;
pub mod modern;
pub mod report;

use anyhow::Result;

use crate::emit::EmitOutcome;

pub use compilation::{Chunk, Compilation, EmittedAsset, EngineOptions, Entrypoint};
pub use legacy::{LegacyHost, LegacyModule};
pub use modern::{HostEvent, ModernHost, ProcessAssetsStage};
pub use report::{BuildReport, ModuleAssetRecord};

/// Notifications a build engine delivers to the manifest plugin.
pub trait BuildLifecycle {
    /// A build cycle (initial or watch-triggered) is starting.
    fn on_cycle_start(&mut self, engine: &EngineOptions);

    /// An input module copied `file` into the output.
    fn on_module_asset(&mut self, module_request: &str, file: &str);

    /// All assets of the cycle are known; compute and maybe emit the manifest.
    fn on_assets_finalized(&mut self, compilation: &mut Compilation) -> Result<EmitOutcome>;
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Lifecycle that records every notification as a line of text.
    #[derive(Debug, Default)]
    pub struct Recorder {
        pub calls: Vec<String>,
    }

    impl BuildLifecycle for Recorder {
        fn on_cycle_start(&mut self, engine: &EngineOptions) {
            self.calls.push(format!("start {}", engine.output_dir.display()));
        }

        fn on_module_asset(&mut self, module_request: &str, file: &str) {
            self.calls.push(format!("module {module_request} {file}"));
        }

        fn on_assets_finalized(&mut self, compilation: &mut Compilation) -> Result<EmitOutcome> {
            self.calls
                .push(format!("finalize {}", compilation.output_dir().display()));
            Ok(EmitOutcome {
                manifest: serde_json::Value::Null,
                payload: None,
                output: compilation.output_dir().to_path_buf(),
            })
        }
    }
}
