//! Separator normalization.

use super::Transform;
use crate::asset::FileEntry;

/// Rewrites platform separators to `/` in both `name` and `path`.
///
/// Backslashes are rewritten on every platform so a manifest produced from
/// Windows-style input is portable regardless of where it is built.
pub struct Separators;

impl Transform for Separators {
    fn transform(self, mut files: Vec<FileEntry>) -> Vec<FileEntry> {
        for file in &mut files {
            to_slash_in_place(&mut file.name);
            to_slash_in_place(&mut file.path);
        }
        files
    }
}

/// Forward-slash form of `path`.
pub fn to_slash(path: &str) -> String {
    let mut owned = path.to_string();
    to_slash_in_place(&mut owned);
    owned
}

fn to_slash_in_place(path: &mut String) {
    if path.contains(is_separator) {
        *path = path.replace(is_separator, "/");
    }
}

fn is_separator(c: char) -> bool {
    c == '\\' || c == std::path::MAIN_SEPARATOR
}
