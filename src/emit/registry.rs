//! Process-wide pending-cycle counters, keyed by manifest output path.
//!
//! A counter is bumped when a build cycle starts and dropped when that cycle
//! reaches its emit phase. Only the emit that brings the counter to exactly
//! zero is authoritative; earlier emits belong to cycles that a newer,
//! still-running cycle will supersede.
//!
//! Keys stay registered after their count returns to zero. The set of keys
//! doubles as the list of manifest files the pipeline must never list as
//! assets.

use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock};

use dashmap::DashMap;

/// Shared registry used by plugins that are not given their own.
static GLOBAL_REGISTRY: LazyLock<Arc<EmitRegistry>> =
    LazyLock::new(|| Arc::new(EmitRegistry::new()));

/// Result of finishing one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitDecision {
    /// Cycles still pending for this output after this one.
    pub remaining: i64,
}

impl EmitDecision {
    /// Whether this cycle is the last outstanding one.
    ///
    /// Negative counts (emit without a matching start) never qualify.
    #[inline]
    pub const fn is_authoritative(&self) -> bool {
        self.remaining == 0
    }
}

/// Output path → pending cycle count.
#[derive(Debug, Default)]
pub struct EmitRegistry {
    counts: DashMap<PathBuf, i64>,
}

impl EmitRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry.
    pub fn global() -> Arc<Self> {
        Arc::clone(&GLOBAL_REGISTRY)
    }

    /// Register a started cycle. Returns the new pending count.
    pub fn begin_cycle(&self, output: &Path) -> i64 {
        let mut count = self.counts.entry(output.to_path_buf()).or_insert(0);
        *count += 1;
        *count
    }

    /// Register an emit for `output` and decide whether it should land.
    pub fn finish_cycle(&self, output: &Path) -> EmitDecision {
        let mut count = self.counts.entry(output.to_path_buf()).or_insert(0);
        *count -= 1;
        EmitDecision { remaining: *count }
    }

    /// Current pending count, `None` when the path was never registered.
    pub fn pending(&self, output: &Path) -> Option<i64> {
        self.counts.get(output).map(|count| *count)
    }

    /// Whether `output` is a manifest path known to this registry.
    pub fn is_tracked(&self, output: &Path) -> bool {
        self.counts.contains_key(output)
    }

    /// All registered manifest paths, sorted.
    pub fn tracked_paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<_> = self.counts.iter().map(|e| e.key().clone()).collect();
        paths.sort_unstable();
        paths
    }

    /// Forget every counter (end of a build session).
    pub fn reset(&self) {
        self.counts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_cycle_is_authoritative() {
        let registry = EmitRegistry::new();
        let path = Path::new("/dist/manifest.json");

        assert_eq!(registry.begin_cycle(path), 1);
        assert!(registry.finish_cycle(path).is_authoritative());
        assert_eq!(registry.pending(path), Some(0));
    }

    #[test]
    fn test_last_cycle_wins() {
        let registry = EmitRegistry::new();
        let path = Path::new("/dist/manifest.json");

        registry.begin_cycle(path);
        registry.begin_cycle(path);

        let first = registry.finish_cycle(path);
        assert!(!first.is_authoritative());
        assert_eq!(first.remaining, 1);

        let second = registry.finish_cycle(path);
        assert!(second.is_authoritative());
        assert_eq!(registry.pending(path), Some(0));
    }

    #[test]
    fn test_emit_without_start_goes_negative() {
        let registry = EmitRegistry::new();
        let path = Path::new("/dist/manifest.json");

        let decision = registry.finish_cycle(path);
        assert_eq!(decision.remaining, -1);
        assert!(!decision.is_authoritative());

        // A later start brings it back to zero, still not an emit
        assert_eq!(registry.begin_cycle(path), 0);
        assert!(!registry.finish_cycle(path).is_authoritative());
    }

    #[test]
    fn test_paths_are_independent() {
        let registry = EmitRegistry::new();
        let a = Path::new("/dist/manifest.json");
        let b = Path::new("/dist/assets-manifest.json");

        registry.begin_cycle(a);
        registry.begin_cycle(a);
        registry.begin_cycle(b);

        assert!(registry.finish_cycle(b).is_authoritative());
        assert!(!registry.finish_cycle(a).is_authoritative());
        assert_eq!(registry.tracked_paths(), vec![b.to_path_buf(), a.to_path_buf()]);
    }

    #[test]
    fn test_reset() {
        let registry = EmitRegistry::new();
        let path = Path::new("/dist/manifest.json");
        registry.begin_cycle(path);
        assert!(registry.is_tracked(path));

        registry.reset();
        assert!(!registry.is_tracked(path));
        assert_eq!(registry.pending(path), None);
    }

    #[test]
    fn test_global_is_shared() {
        assert!(Arc::ptr_eq(&EmitRegistry::global(), &EmitRegistry::global()));
    }
}
