//! assetmap - asset manifests for bundler builds.
//!
//! Maps logical asset names (`main.js`, `img/logo.png`) to the files a build
//! engine actually emitted (`main.3f9a1c.js`, `img/1f2e3d.png`).
//!
//! # Architecture
//!
//! ```text
//! host adapter ─► BuildLifecycle ─► ManifestPlugin
//!                                     ├── asset     classify chunks + assets
//!                                     ├── pipeline  noise → prefixes → user stages
//!                                     ├── manifest  fold/generate + serialize
//!                                     ├── hooks     before_emit / after_emit
//!                                     └── emit      registry gate + file sink
//! ```
//!
//! # Example
//!
//! ```ignore
//! let options = ManifestOptions::default().with_public_path("/static/");
//! let mut host = LegacyHost::new(EngineOptions::new("dist"), ManifestPlugin::new(options));
//! host.run();
//! let outcome = host.emit(&mut compilation)?;
//! ```

pub mod asset;
pub mod cli;
pub mod config;
pub mod core;
pub mod emit;
pub mod hooks;
pub mod host;
pub mod logger;
pub mod manifest;
pub mod pipeline;
pub mod plugin;

pub use asset::FileEntry;
pub use config::{AssetmapConfig, ConfigError, ManifestOptions};
pub use emit::{EmitOutcome, EmitRegistry};
pub use hooks::ManifestHooks;
pub use host::{
    BuildLifecycle, BuildReport, Chunk, Compilation, EmittedAsset, EngineOptions, Entrypoint,
    HostEvent, LegacyHost, LegacyModule, ModernHost, ProcessAssetsStage,
};
pub use manifest::ManifestError;
pub use plugin::ManifestPlugin;
