//! File entry: one row of the manifest pipeline.

use serde::{Deserialize, Serialize};

/// A classified output file.
///
/// The origin flags are stored independently rather than as an enum: user
/// `map` callbacks are free to recompute combinations of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileEntry {
    /// Emitted location (public path is prefixed here).
    pub path: String,
    /// Manifest key (base path is prefixed here).
    pub name: String,
    pub is_initial: bool,
    pub is_chunk: bool,
    pub is_asset: bool,
    pub is_module_asset: bool,
    /// Id of the owning chunk, for chunk-sourced entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk: Option<String>,
}

impl FileEntry {
    /// Entry for a file owned by a compiled chunk.
    pub fn chunk_file(
        path: impl Into<String>,
        name: impl Into<String>,
        chunk: impl Into<String>,
        is_initial: bool,
    ) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            is_initial,
            is_chunk: true,
            chunk: Some(chunk.into()),
            ..Self::default()
        }
    }

    /// Entry for a directly emitted asset (name is the path itself).
    pub fn plain_asset(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            name: path.clone(),
            path,
            is_asset: true,
            ..Self::default()
        }
    }

    /// Entry for a file copied into the output by an input module.
    pub fn module_asset(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            is_module_asset: true,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_single_origin() {
        let chunk = FileEntry::chunk_file("main.abc.js", "main.js", "0", true);
        assert!(chunk.is_chunk && chunk.is_initial);
        assert!(!chunk.is_asset && !chunk.is_module_asset);

        let asset = FileEntry::plain_asset("favicon.ico");
        assert_eq!(asset.name, "favicon.ico");
        assert!(asset.is_asset && !asset.is_chunk && !asset.is_module_asset);

        let module = FileEntry::module_asset("img/a1b2.png", "img/logo.png");
        assert!(module.is_module_asset && !module.is_asset);
    }

    #[test]
    fn test_serialize_camel_case() {
        let json = serde_json::to_value(FileEntry::plain_asset("robots.txt")).unwrap();
        assert_eq!(json["isAsset"], true);
        assert_eq!(json["isModuleAsset"], false);
        assert!(json.get("chunk").is_none());
    }
}
