//! `[manifest]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [manifest]
//! file_name = "asset-manifest.json"
//! public_path = "/static/"
//! base_path = "app/"
//! transform_extensions = "(?i)^(gz|br|map)$"
//! write_to_file_emit = true
//! remove_key_hash = true
//!
//! [manifest.seed]
//! version = "1"
//! ```

use std::path::{Component, Path};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::asset::DEFAULT_TRANSFORM_EXTENSIONS;
use crate::config::{ConfigDiagnostics, FieldPath};

/// Default manifest file name, relative to the output directory.
pub const DEFAULT_FILE_NAME: &str = "manifest.json";

/// Default key-hash pattern: 16-32 hex digits plus an optional trailing dot.
pub const DEFAULT_KEY_HASH: &str = r"(?i)([a-f0-9]{16,32}\.?)";

/// `remove_key_hash`: `false` (default), `true` for the default pattern, or a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyHashRule {
    Toggle(bool),
    Pattern(String),
}

impl Default for KeyHashRule {
    fn default() -> Self {
        Self::Toggle(false)
    }
}

impl KeyHashRule {
    /// Effective pattern, `None` when disabled.
    pub fn pattern(&self) -> Option<&str> {
        match self {
            Self::Toggle(true) => Some(DEFAULT_KEY_HASH),
            Self::Toggle(false) => None,
            Self::Pattern(pattern) => Some(pattern),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestSection {
    /// Manifest path relative to the build output directory.
    pub file_name: String,

    /// Prefix for every entry path. Unset falls back to the engine's.
    pub public_path: Option<String>,

    /// Prefix for every manifest key.
    pub base_path: String,

    /// Extensions that keep the previous segment in a file type.
    pub transform_extensions: String,

    /// Also write the manifest to disk directly, outside the engine's emit.
    pub write_to_file_emit: bool,

    /// Initial manifest value; must be a table for the default fold.
    pub seed: Option<Value>,

    /// Key chunk files by bare chunk name.
    pub use_entry_keys: bool,

    /// Hash pattern stripped from manifest keys. Off unless set.
    pub remove_key_hash: KeyHashRule,
}

impl Default for ManifestSection {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_FILE_NAME.into(),
            public_path: None,
            base_path: String::new(),
            transform_extensions: DEFAULT_TRANSFORM_EXTENSIONS.into(),
            write_to_file_emit: false,
            seed: None,
            use_entry_keys: false,
            remove_key_hash: KeyHashRule::default(),
        }
    }
}

/// Field paths of `[manifest]`.
pub struct ManifestSectionFields {
    pub file_name: FieldPath,
    pub transform_extensions: FieldPath,
    pub seed: FieldPath,
    pub remove_key_hash: FieldPath,
}

impl ManifestSection {
    pub const FIELDS: ManifestSectionFields = ManifestSectionFields {
        file_name: FieldPath::new("manifest.file_name"),
        transform_extensions: FieldPath::new("manifest.transform_extensions"),
        seed: FieldPath::new("manifest.seed"),
        remove_key_hash: FieldPath::new("manifest.remove_key_hash"),
    };

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        Self::validate_file_name(&self.file_name, diag);

        if let Err(err) = regex::Regex::new(&self.transform_extensions) {
            diag.error(
                Self::FIELDS.transform_extensions,
                format!("invalid pattern: {err}"),
            );
        }

        if let Some(pattern) = self.remove_key_hash.pattern()
            && let Err(err) = regex::Regex::new(pattern)
        {
            diag.error(Self::FIELDS.remove_key_hash, format!("invalid pattern: {err}"));
        }

        if let Some(seed) = &self.seed
            && !seed.is_object()
        {
            diag.error_with_hint(
                Self::FIELDS.seed,
                "seed must be a table",
                "use `[manifest.seed]` with key/value pairs",
            );
        }
    }

    /// The manifest must land inside the output directory.
    fn validate_file_name(file_name: &str, diag: &mut ConfigDiagnostics) {
        let field = Self::FIELDS.file_name;
        if file_name.trim().is_empty() {
            diag.error_with_hint(field, "must not be empty", format!("default is `{DEFAULT_FILE_NAME}`"));
            return;
        }

        for comp in Path::new(file_name).components() {
            let reason = match comp {
                Component::ParentDir => Some("parent directory '..' not allowed"),
                Component::Prefix(_) | Component::RootDir => Some("absolute paths not allowed"),
                _ => None,
            };
            if let Some(reason) = reason {
                diag.error(field, format!("path '{file_name}': {reason}"));
                return;
            }
        }
    }
}
