use std::path::{Path, PathBuf};

use super::*;
use crate::asset::FileEntry;
use crate::config::ManifestOptions;

const NO_MANIFESTS: &[PathBuf] = &[];

fn ctx<'a>(manifests: &'a [PathBuf]) -> PipelineContext<'a> {
    PipelineContext {
        output_dir: Path::new("/dist"),
        engine_public_path: "",
        manifests,
    }
}

fn names(files: &[FileEntry]) -> Vec<&str> {
    files.iter().map(|f| f.name.as_str()).collect()
}

fn paths(files: &[FileEntry]) -> Vec<&str> {
    files.iter().map(|f| f.path.as_str()).collect()
}

#[test]
fn test_defaults_pass_through() {
    let files = vec![
        FileEntry::chunk_file("main.js", "main.js", "0", true),
        FileEntry::plain_asset("favicon.ico"),
    ];
    let out = run(files.clone(), &ManifestOptions::default(), ctx(NO_MANIFESTS));
    assert_eq!(out, files);
}

#[test]
fn test_engine_public_path_fallback() {
    let files = vec![FileEntry::plain_asset("a.js")];
    let context = PipelineContext {
        engine_public_path: "/assets/",
        ..ctx(NO_MANIFESTS)
    };

    let out = run(files.clone(), &ManifestOptions::default(), context);
    assert_eq!(paths(&out), ["/assets/a.js"]);

    let options = ManifestOptions::default().with_public_path("");
    let out = run(files, &options, context);
    assert_eq!(paths(&out), ["a.js"]);
}

#[test]
fn test_self_exclusion_before_base_path() {
    let manifests = vec![PathBuf::from("/dist/manifest.json")];
    let files = vec![
        FileEntry::plain_asset("manifest.json"),
        FileEntry::plain_asset("app.css"),
    ];
    let options = ManifestOptions::default().with_base_path("static/");

    let out = run(files, &options, ctx(&manifests));
    assert_eq!(names(&out), ["static/app.css"]);
}

#[test]
fn test_filter_sees_normalized_prefixed_entries() {
    let files = vec![
        FileEntry::module_asset(r"img\logo.png", r"img\logo.png"),
        FileEntry::plain_asset("robots.txt"),
    ];
    let options = ManifestOptions::default()
        .with_public_path("/cdn/")
        .with_filter(|f| f.path.starts_with("/cdn/img/"));

    let out = run(files, &options, ctx(NO_MANIFESTS));
    assert_eq!(paths(&out), ["/cdn/img/logo.png"]);
    assert_eq!(names(&out), ["img/logo.png"]);
}

#[test]
fn test_map_then_sort() {
    let files = vec![
        FileEntry::plain_asset("b.js"),
        FileEntry::plain_asset("a.js"),
        FileEntry::plain_asset("c.js"),
    ];
    let options = ManifestOptions::default()
        .with_map(|mut f| {
            f.name = format!("x/{}", f.name);
            f
        })
        .with_sort(|a, b| a.name.cmp(&b.name));

    let out = run(files, &options, ctx(NO_MANIFESTS));
    assert_eq!(names(&out), ["x/a.js", "x/b.js", "x/c.js"]);
}

#[test]
fn test_deterministic() {
    let files = vec![
        FileEntry::chunk_file("main.0123456789abcdef.js", "main.js", "0", true),
        FileEntry::plain_asset(r"img\a.png"),
        FileEntry::plain_asset("1.hot-update.js"),
    ];
    let options = ManifestOptions::default()
        .with_base_path("app/")
        .with_public_path("/p/");

    let first = run(files.clone(), &options, ctx(NO_MANIFESTS));
    let second = run(files, &options, ctx(NO_MANIFESTS));
    assert_eq!(first, second);
    assert_eq!(names(&first), ["app/main.js", "app/img/a.png"]);
}
