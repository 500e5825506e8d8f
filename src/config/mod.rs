//! Configuration management for `assetmap.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [manifest], [watch]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── options.rs     # ManifestOptions (compiled runtime options)
//! └── mod.rs         # AssetmapConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section        | Purpose                                             |
//! |----------------|-----------------------------------------------------|
//! | `[manifest]`   | File name, public/base path, seed, key rules        |
//! | `[watch]`      | Debounce for `assetmap watch`                       |

mod options;
pub mod section;
pub mod types;
mod util;

pub use options::{FilterFn, GenerateFn, ManifestOptions, MapFn, SerializeFn, SortFn};
pub use section::{KeyHashRule, ManifestSection, WatchSection};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};
pub use util::{find_config_file, find_config_from};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{debug, log};

/// Root configuration structure representing `assetmap.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetmapConfig {
    /// Absolute path of the loaded file, `None` when running on defaults.
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    #[serde(default)]
    pub manifest: ManifestSection,

    #[serde(default)]
    pub watch: WatchSection,
}

impl AssetmapConfig {
    /// Locate `config_name` (searching upward from cwd) and load it.
    ///
    /// A missing file is not an error: every option has a default.
    pub fn load(config_name: &Path) -> Result<Self> {
        let config = match find_config_file(config_name) {
            Some(path) => Self::from_path(&path)?,
            None => {
                debug!("config"; "{} not found, using defaults", config_name.display());
                Self::default()
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Validate every section, printing warnings and failing on errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        self.manifest.validate(&mut diag);
        self.watch.validate(&mut diag);
        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    /// Compiled options for the manifest plugin.
    pub fn manifest_options(&self) -> Result<ManifestOptions, ConfigError> {
        ManifestOptions::from_section(&self.manifest)
    }
}
