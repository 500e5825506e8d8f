//! Common utilities shared across CLI commands.

use anyhow::Result;

use super::ManifestArgs;
use crate::config::{AssetmapConfig, ManifestOptions};

/// Compile manifest options from the config with command-line overrides
/// applied. Overrides go through the same validation as the config file.
pub fn manifest_options(
    config: &AssetmapConfig,
    args: &ManifestArgs,
    write_to_file: bool,
) -> Result<ManifestOptions> {
    let mut section = config.manifest.clone();

    if let Some(file_name) = &args.file_name {
        section.file_name = file_name.clone();
    }
    if let Some(public_path) = &args.public_path {
        section.public_path = Some(public_path.clone());
    }
    if let Some(base_path) = &args.base_path {
        section.base_path = base_path.clone();
    }
    section.write_to_file_emit |= write_to_file;

    Ok(ManifestOptions::from_section(&section)?)
}
