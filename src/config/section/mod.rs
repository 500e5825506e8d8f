//! Configuration section definitions.
//!
//! Each module corresponds to a section in `assetmap.toml`:
//!
//! | Module     | TOML Section   | Purpose                               |
//! |------------|----------------|---------------------------------------|
//! | `manifest` | `[manifest]`   | Manifest naming, prefixes, seed       |
//! | `watch`    | `[watch]`      | Watch-mode debounce                   |

mod manifest;
mod watch;

pub use manifest::{DEFAULT_FILE_NAME, DEFAULT_KEY_HASH, KeyHashRule, ManifestSection};
pub use watch::WatchSection;
