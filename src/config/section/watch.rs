//! `[watch]` section configuration.
//!
//! ```toml
//! [watch]
//! debounce_ms = 300
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchSection {
    /// Quiet period after the last change before a cycle starts.
    pub debounce_ms: u64,
}

impl Default for WatchSection {
    fn default() -> Self {
        Self { debounce_ms: 300 }
    }
}

impl WatchSection {
    const DEBOUNCE_MS: FieldPath = FieldPath::new("watch.debounce_ms");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.debounce_ms == 0 {
            diag.warn(
                Self::DEBOUNCE_MS,
                "0 disables debouncing; every write to the report starts a cycle",
            );
        }
    }
}
