//! `assetmap build`: one cycle over a recorded build report.

use std::path::Path;

use anyhow::{Result, bail};

use super::{ManifestArgs, common};
use crate::config::AssetmapConfig;
use crate::host::BuildReport;
use crate::log;
use crate::plugin::ManifestPlugin;

/// Replay `report_path` and print the manifest, or write it into the
/// report's output directory when `write` is set.
pub fn build_manifest(
    config: &AssetmapConfig,
    report_path: &Path,
    write: bool,
    args: &ManifestArgs,
) -> Result<()> {
    let report = BuildReport::from_path(report_path)?;
    let options = common::manifest_options(config, args, write)?;
    let mut plugin = ManifestPlugin::new(options);

    let (outcome, _) = report.replay(&mut plugin)?;
    let Some(payload) = outcome.payload else {
        bail!("manifest for {} was superseded by another cycle", outcome.output.display());
    };

    if write {
        log!("emit"; "wrote {}", outcome.output.display());
    } else {
        println!("{payload}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_build_writes_into_output_dir() {
        let dir = TempDir::new().unwrap();
        let report = dir.path().join("report.json");
        fs::write(
            &report,
            r#"{
                "output_dir": "dist",
                "public_path": "/static/",
                "chunks": [{ "id": "0", "name": "main", "files": ["main.js"], "is_initial": true }],
                "assets": [{ "name": "main.js", "chunks": ["0"] }, { "name": "favicon.ico" }]
            }"#,
        )
        .unwrap();

        build_manifest(&AssetmapConfig::default(), &report, true, &ManifestArgs::default()).unwrap();

        let written = fs::read_to_string(dir.path().join("dist/manifest.json")).unwrap();
        let manifest: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(
            manifest,
            serde_json::json!({
                "main.js": "/static/main.js",
                "favicon.ico": "/static/favicon.ico"
            })
        );
    }

    #[test]
    fn test_build_missing_report() {
        let dir = TempDir::new().unwrap();
        let err = build_manifest(
            &AssetmapConfig::default(),
            &dir.path().join("nope.json"),
            false,
            &ManifestArgs::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("failed to read build report"));
    }
}
