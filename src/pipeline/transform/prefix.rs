//! Base-path and public-path prefixes.

use regex::Regex;

use super::Transform;
use crate::asset::FileEntry;

/// Prefixes every `name` with the base path, then strips content hashes
/// from the key when a key-hash pattern is configured.
pub struct BasePath<'a> {
    base_path: &'a str,
    key_hash: Option<&'a Regex>,
}

impl<'a> BasePath<'a> {
    pub fn new(base_path: &'a str, key_hash: Option<&'a Regex>) -> Self {
        Self {
            base_path,
            key_hash,
        }
    }
}

impl Transform for BasePath<'_> {
    fn transform(self, mut files: Vec<FileEntry>) -> Vec<FileEntry> {
        for file in &mut files {
            if !self.base_path.is_empty() {
                file.name.insert_str(0, self.base_path);
            }
            if let Some(re) = self.key_hash {
                file.name = re.replace_all(&file.name, "").into_owned();
            }
        }
        files
    }
}

/// Prefixes every `path` with the public path.
pub struct PublicPath<'a> {
    public_path: &'a str,
}

impl<'a> PublicPath<'a> {
    pub fn new(public_path: &'a str) -> Self {
        Self { public_path }
    }
}

impl Transform for PublicPath<'_> {
    fn transform(self, mut files: Vec<FileEntry>) -> Vec<FileEntry> {
        if self.public_path.is_empty() {
            return files;
        }
        for file in &mut files {
            file.path.insert_str(0, self.public_path);
        }
        files
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::section::DEFAULT_KEY_HASH;

    #[test]
    fn test_base_path_prefixes_name_only() {
        let files = BasePath::new("app/", None).transform(vec![FileEntry::plain_asset("a.js")]);
        assert_eq!(files[0].name, "app/a.js");
        assert_eq!(files[0].path, "a.js");
    }

    #[test]
    fn test_key_hash_removed() {
        let re = Regex::new(DEFAULT_KEY_HASH).unwrap();
        let files = vec![
            FileEntry::module_asset("img/logo.0123456789ABCDEF.png", "img/logo.0123456789ABCDEF.png"),
            FileEntry::plain_asset("main.js"),
        ];
        let files = BasePath::new("", Some(&re)).transform(files);

        assert_eq!(files[0].name, "img/logo.png");
        assert_eq!(files[0].path, "img/logo.0123456789ABCDEF.png");
        assert_eq!(files[1].name, "main.js");
    }

    #[test]
    fn test_short_hash_kept() {
        let re = Regex::new(DEFAULT_KEY_HASH).unwrap();
        let files = BasePath::new("", Some(&re)).transform(vec![FileEntry::plain_asset("main.3f9a1c.js")]);
        assert_eq!(files[0].name, "main.3f9a1c.js");
    }

    #[test]
    fn test_public_path_prefixes_path_only() {
        let files = PublicPath::new("https://cdn.example.com/")
            .transform(vec![FileEntry::plain_asset("a.js")]);
        assert_eq!(files[0].path, "https://cdn.example.com/a.js");
        assert_eq!(files[0].name, "a.js");
    }
}
