//! User-supplied filter, map and sort stages.

use super::Transform;
use crate::asset::FileEntry;
use crate::config::{FilterFn, MapFn, SortFn};

pub struct UserFilter<'a>(pub &'a FilterFn);

impl Transform for UserFilter<'_> {
    fn transform(self, mut files: Vec<FileEntry>) -> Vec<FileEntry> {
        files.retain(|file| (self.0)(file));
        files
    }
}

pub struct UserMap<'a>(pub &'a MapFn);

impl Transform for UserMap<'_> {
    fn transform(self, files: Vec<FileEntry>) -> Vec<FileEntry> {
        files.into_iter().map(|file| (self.0)(file)).collect()
    }
}

/// Stable sort: entries the comparator treats as equal keep their order.
pub struct UserSort<'a>(pub &'a SortFn);

impl Transform for UserSort<'_> {
    fn transform(self, mut files: Vec<FileEntry>) -> Vec<FileEntry> {
        files.sort_by(|a, b| (self.0)(a, b));
        files
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn names(files: &[FileEntry]) -> Vec<&str> {
        files.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_filter_on_flags() {
        let filter: FilterFn = Arc::new(|f| !f.is_asset);
        let files = vec![
            FileEntry::chunk_file("main.js", "main.js", "0", true),
            FileEntry::plain_asset("favicon.ico"),
        ];
        assert_eq!(names(&UserFilter(&filter).transform(files)), ["main.js"]);
    }

    #[test]
    fn test_map_reshapes_entry() {
        let map: MapFn = Arc::new(|mut f| {
            f.name = f.name.to_uppercase();
            f.is_asset = false;
            f
        });
        let files = UserMap(&map).transform(vec![FileEntry::plain_asset("a.js")]);
        assert_eq!(files[0].name, "A.JS");
        assert!(!files[0].is_asset);
    }

    #[test]
    fn test_sort_is_stable() {
        let by_initial: SortFn = Arc::new(|a, b| b.is_initial.cmp(&a.is_initial));
        let files = vec![
            FileEntry::plain_asset("x"),
            FileEntry::chunk_file("a", "a", "0", true),
            FileEntry::plain_asset("y"),
            FileEntry::chunk_file("b", "b", "1", true),
        ];
        assert_eq!(names(&UserSort(&by_initial).transform(files)), ["a", "b", "x", "y"]);
    }
}
