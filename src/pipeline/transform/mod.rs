//! File-list transforms.
//!
//! Each transform consumes the list and returns the next one, enabling
//! composition via `Pipeline`.
//!
//! # Modules
//!
//! - `noise`: Drops hot-update files and tracked manifests
//! - `prefix`: Base path (+ key-hash removal) on names, public path on paths
//! - `separator`: Normalizes separators to `/`
//! - `user`: User filter, map and sort

mod noise;
mod prefix;
mod separator;
mod user;

use crate::asset::FileEntry;

pub use noise::{HOT_UPDATE_MARKER, NoiseFilter};
pub use prefix::{BasePath, PublicPath};
pub use separator::{Separators, to_slash};
pub use user::{UserFilter, UserMap, UserSort};

/// One pure stage of the pipeline.
pub trait Transform {
    fn transform(self, files: Vec<FileEntry>) -> Vec<FileEntry>;
}
