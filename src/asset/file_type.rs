//! File type derivation for chunk file keys.

use std::sync::LazyLock;

use regex::Regex;

/// Default pass-through extensions: compressed and source-map variants.
pub const DEFAULT_TRANSFORM_EXTENSIONS: &str = r"(?i)^(gz|map)$";

pub static DEFAULT_TRANSFORM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(DEFAULT_TRANSFORM_EXTENSIONS).expect("default extension pattern is valid")
});

/// Derive the type of an emitted file from its name.
///
/// The query string is dropped and the last dot segment is the type. When
/// that segment is a pass-through extension the previous segment is kept
/// too, so `app.js.map` is `js.map` rather than `map`.
pub fn file_type(file_name: &str, transform_extensions: &Regex) -> String {
    let stripped = file_name
        .split_once('?')
        .map_or(file_name, |(head, _)| head);

    let mut segments = stripped.rsplit('.');
    let extension = segments.next().unwrap_or_default();

    if transform_extensions.is_match(extension)
        && let Some(previous) = segments.next()
    {
        return format!("{previous}.{extension}");
    }

    extension.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_type(name: &str) -> String {
        file_type(name, &DEFAULT_TRANSFORM_RE)
    }

    #[test]
    fn test_plain_extension() {
        assert_eq!(default_type("style.css"), "css");
        assert_eq!(default_type("main.3f9a1c.js"), "js");
    }

    #[test]
    fn test_pass_through_extension() {
        assert_eq!(default_type("bundle.js.map"), "js.map");
        assert_eq!(default_type("main.css.gz"), "css.gz");
        assert_eq!(default_type("vendor.js.MAP"), "js.MAP");
    }

    #[test]
    fn test_query_string_dropped() {
        assert_eq!(default_type("data.json?v=2"), "json");
        assert_eq!(default_type("app.js.map?x=1.2"), "js.map");
    }

    #[test]
    fn test_no_dot() {
        assert_eq!(default_type("LICENSE"), "LICENSE");
        assert_eq!(default_type("map"), "map");
    }

    #[test]
    fn test_custom_pattern() {
        let re = Regex::new(r"^(br|gz|map)$").unwrap();
        assert_eq!(file_type("app.js.br", &re), "js.br");
        assert_eq!(file_type("app.js.MAP", &re), "MAP");
    }
}
