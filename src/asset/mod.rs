//! Classification of build output into manifest file entries.

mod classify;
mod entry;
mod file_type;

pub use classify::{ClassifyOptions, ModuleAssets, classify, module_asset_name};
pub use entry::FileEntry;
pub use file_type::{DEFAULT_TRANSFORM_EXTENSIONS, DEFAULT_TRANSFORM_RE, file_type};
