//! Emit hooks.
//!
//! - `before_emit`: waterfall. Each tap receives the manifest returned by the
//!   previous one and returns the value passed on.
//! - `after_emit`: broadcast. Every listener sees the final manifest, on every
//!   cycle, authoritative or not.
//!
//! Calls run on a snapshot of the list, so a hook may tap new hooks; those
//! run from the next call on.

use std::sync::Arc;

use anyhow::Result;
use parking_lot::RwLock;
use serde_json::Value;

type BeforeEmitFn = Arc<dyn Fn(Value) -> Result<Value> + Send + Sync>;
type AfterEmitFn = Arc<dyn Fn(&Value) + Send + Sync>;

/// Listener lists shared between a plugin and whoever taps into it.
#[derive(Default)]
pub struct ManifestHooks {
    before_emit: RwLock<Vec<BeforeEmitFn>>,
    after_emit: RwLock<Vec<AfterEmitFn>>,
}

impl ManifestHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tap_before_emit(&self, f: impl Fn(Value) -> Result<Value> + Send + Sync + 'static) {
        self.before_emit.write().push(Arc::new(f));
    }

    pub fn tap_after_emit(&self, f: impl Fn(&Value) + Send + Sync + 'static) {
        self.after_emit.write().push(Arc::new(f));
    }

    /// Thread `manifest` through every `before_emit` tap in registration order.
    /// The first error aborts the chain.
    pub fn call_before_emit(&self, manifest: Value) -> Result<Value> {
        let taps = self.before_emit.read().clone();
        taps.iter().try_fold(manifest, |manifest, tap| tap(manifest))
    }

    pub fn call_after_emit(&self, manifest: &Value) {
        let listeners = self.after_emit.read().clone();
        for listener in &listeners {
            listener(manifest);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.before_emit.read().is_empty() && self.after_emit.read().is_empty()
    }
}

impl std::fmt::Debug for ManifestHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManifestHooks")
            .field("before_emit", &self.before_emit.read().len())
            .field("after_emit", &self.after_emit.read().len())
            .finish()
    }
}
