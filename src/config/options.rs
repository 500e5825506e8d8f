//! Runtime manifest options.
//!
//! `ManifestSection` is what a TOML file can express. `ManifestOptions` is
//! the compiled form the plugin runs with: patterns are compiled and the
//! function slots (filter, map, sort, generate, serialize) can be filled in
//! from code.

use std::cmp::Ordering;
use std::fmt;
use std::sync::{Arc, LazyLock};

use anyhow::Result;
use regex::Regex;
use serde_json::Value;

use super::section::{DEFAULT_FILE_NAME, DEFAULT_KEY_HASH, ManifestSection};
use super::{ConfigDiagnostics, ConfigError};
use crate::asset::{DEFAULT_TRANSFORM_RE, FileEntry};
use crate::host::Entrypoint;

static DEFAULT_KEY_HASH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DEFAULT_KEY_HASH).expect("default key-hash pattern is valid"));

/// Keep an entry when it returns `true`.
pub type FilterFn = Arc<dyn Fn(&FileEntry) -> bool + Send + Sync>;
/// Replace an entry.
pub type MapFn = Arc<dyn Fn(FileEntry) -> FileEntry + Send + Sync>;
/// Comparator for the final (stable) sort.
pub type SortFn = Arc<dyn Fn(&FileEntry, &FileEntry) -> Ordering + Send + Sync>;
/// Build the whole manifest from `(seed, files, entrypoints)`.
pub type GenerateFn =
    Arc<dyn Fn(&Value, &[FileEntry], &[Entrypoint]) -> Result<Value> + Send + Sync>;
/// Turn the manifest into the file payload.
pub type SerializeFn = Arc<dyn Fn(&Value) -> Result<String> + Send + Sync>;

#[derive(Clone)]
pub struct ManifestOptions {
    pub file_name: String,
    pub public_path: Option<String>,
    pub base_path: String,
    pub transform_extensions: Regex,
    pub write_to_file_emit: bool,
    pub seed: Option<Value>,
    pub use_entry_keys: bool,
    pub remove_key_hash: Option<Regex>,
    pub filter: Option<FilterFn>,
    pub map: Option<MapFn>,
    pub sort: Option<SortFn>,
    pub generate: Option<GenerateFn>,
    pub serialize: Option<SerializeFn>,
}

impl Default for ManifestOptions {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_FILE_NAME.into(),
            public_path: None,
            base_path: String::new(),
            transform_extensions: DEFAULT_TRANSFORM_RE.clone(),
            write_to_file_emit: false,
            seed: None,
            use_entry_keys: false,
            remove_key_hash: None,
            filter: None,
            map: None,
            sort: None,
            generate: None,
            serialize: None,
        }
    }
}

impl ManifestOptions {
    /// Compile a validated `[manifest]` section.
    pub fn from_section(section: &ManifestSection) -> Result<Self, ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        section.validate(&mut diag);
        diag.into_result()?;

        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|err| ConfigError::Validation(err.to_string()))
        };

        Ok(Self {
            file_name: section.file_name.clone(),
            public_path: section.public_path.clone(),
            base_path: section.base_path.clone(),
            transform_extensions: compile(&section.transform_extensions)?,
            write_to_file_emit: section.write_to_file_emit,
            seed: section.seed.clone(),
            use_entry_keys: section.use_entry_keys,
            remove_key_hash: section.remove_key_hash.pattern().map(compile).transpose()?,
            ..Self::default()
        })
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn with_public_path(mut self, public_path: impl Into<String>) -> Self {
        self.public_path = Some(public_path.into());
        self
    }

    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    pub fn with_transform_extensions(mut self, pattern: Regex) -> Self {
        self.transform_extensions = pattern;
        self
    }

    pub fn with_write_to_file_emit(mut self, enable: bool) -> Self {
        self.write_to_file_emit = enable;
        self
    }

    pub fn with_seed(mut self, seed: Value) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_entry_keys(mut self, enable: bool) -> Self {
        self.use_entry_keys = enable;
        self
    }

    pub fn with_remove_key_hash(mut self, pattern: Option<Regex>) -> Self {
        self.remove_key_hash = pattern;
        self
    }

    /// Strip hashes matching the default pattern from manifest keys.
    pub fn with_default_key_hash(self) -> Self {
        self.with_remove_key_hash(Some(DEFAULT_KEY_HASH_RE.clone()))
    }

    pub fn with_filter(mut self, f: impl Fn(&FileEntry) -> bool + Send + Sync + 'static) -> Self {
        self.filter = Some(Arc::new(f));
        self
    }

    pub fn with_map(mut self, f: impl Fn(FileEntry) -> FileEntry + Send + Sync + 'static) -> Self {
        self.map = Some(Arc::new(f));
        self
    }

    pub fn with_sort(
        mut self,
        f: impl Fn(&FileEntry, &FileEntry) -> Ordering + Send + Sync + 'static,
    ) -> Self {
        self.sort = Some(Arc::new(f));
        self
    }

    pub fn with_generate(
        mut self,
        f: impl Fn(&Value, &[FileEntry], &[Entrypoint]) -> Result<Value> + Send + Sync + 'static,
    ) -> Self {
        self.generate = Some(Arc::new(f));
        self
    }

    pub fn with_serialize(
        mut self,
        f: impl Fn(&Value) -> Result<String> + Send + Sync + 'static,
    ) -> Self {
        self.serialize = Some(Arc::new(f));
        self
    }
}

impl fmt::Debug for ManifestOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManifestOptions")
            .field("file_name", &self.file_name)
            .field("public_path", &self.public_path)
            .field("base_path", &self.base_path)
            .field("transform_extensions", &self.transform_extensions.as_str())
            .field("write_to_file_emit", &self.write_to_file_emit)
            .field("seed", &self.seed)
            .field("use_entry_keys", &self.use_entry_keys)
            .field(
                "remove_key_hash",
                &self.remove_key_hash.as_ref().map(Regex::as_str),
            )
            .field("filter", &self.filter.is_some())
            .field("map", &self.map.is_some())
            .field("sort", &self.sort.is_some())
            .field("generate", &self.generate.is_some())
            .field("serialize", &self.serialize.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::section::KeyHashRule;

    #[test]
    fn test_from_default_section() {
        let options = ManifestOptions::from_section(&ManifestSection::default()).unwrap();
        assert_eq!(options.file_name, "manifest.json");
        assert!(options.transform_extensions.is_match("MAP"));
        assert!(options.remove_key_hash.is_none());
        assert!(options.generate.is_none());
    }

    #[test]
    fn test_from_section_enables_key_hash() {
        let section = ManifestSection {
            remove_key_hash: KeyHashRule::Toggle(true),
            ..ManifestSection::default()
        };
        let options = ManifestOptions::from_section(&section).unwrap();
        assert_eq!(options.remove_key_hash.unwrap().as_str(), DEFAULT_KEY_HASH);
    }

    #[test]
    fn test_default_key_hash_builder() {
        assert!(ManifestOptions::default().remove_key_hash.is_none());
        let options = ManifestOptions::default().with_default_key_hash();
        assert!(options.remove_key_hash.unwrap().is_match("0123456789abcdef"));
    }

    #[test]
    fn test_from_invalid_section() {
        let section = ManifestSection {
            file_name: "../escape.json".into(),
            ..ManifestSection::default()
        };
        let err = ManifestOptions::from_section(&section).unwrap_err();
        assert!(matches!(err, ConfigError::Diagnostics(_)));
    }

    #[test]
    fn test_debug_hides_closures() {
        let options = ManifestOptions::default().with_filter(|f| f.is_chunk);
        let debug = format!("{options:?}");
        assert!(debug.contains("filter: true"));
        assert!(debug.contains("map: false"));
    }
}
