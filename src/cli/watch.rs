//! `assetmap watch`: re-run a cycle every time the build report settles.
//!
//! ```text
//! notify (report dir) → Debouncer (quiet window) → replay → status line
//! ```
//!
//! The report's directory is watched rather than the file itself, so
//! engines that replace the report through a rename are still seen.

mod debouncer;

use std::path::Path;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Duration;

use anyhow::{Context, Result};
use notify::{RecursiveMode, Watcher};

use super::{ManifestArgs, common};
use crate::config::AssetmapConfig;
use crate::core::{is_shutdown, register_watch};
use crate::host::BuildReport;
use crate::log;
use crate::logger::{status_error, status_success, status_unchanged};
use crate::plugin::ManifestPlugin;
use debouncer::{ChangeKind, Debouncer};

pub fn watch_manifest(config: &AssetmapConfig, report_path: &Path, args: &ManifestArgs) -> Result<()> {
    let options = common::manifest_options(config, args, true)?;
    let mut session = Session::new(ManifestPlugin::new(options));

    let report_path = std::path::absolute(report_path)
        .with_context(|| format!("invalid report path {}", report_path.display()))?;
    let watch_dir = report_path
        .parent()
        .context("build report has no parent directory")?;

    let (notify_tx, notify_rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        let _ = notify_tx.send(res);
    })?;
    watcher.watch(watch_dir, RecursiveMode::NonRecursive)?;
    register_watch();

    log!("watch"; "watching {}", report_path.display());
    session.cycle(&report_path);

    let mut debouncer = Debouncer::new(&report_path, Duration::from_millis(config.watch.debounce_ms));
    while !is_shutdown() {
        match notify_rx.recv_timeout(debouncer.sleep_duration()) {
            Ok(Ok(event)) => debouncer.add_event(&event),
            Ok(Err(err)) => log!("watch"; "notify error: {}", err),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        match debouncer.take_if_ready() {
            Some(ChangeKind::Removed) => {
                status_error("build report removed", "waiting for it to come back");
            }
            Some(_) => session.cycle(&report_path),
            None => {}
        }
    }

    log!("watch"; "stopped");
    Ok(())
}

/// Plugin plus the last payload it produced, for change detection.
struct Session {
    plugin: ManifestPlugin,
    last_payload: Option<String>,
}

impl Session {
    fn new(plugin: ManifestPlugin) -> Self {
        Self {
            plugin,
            last_payload: None,
        }
    }

    /// One cycle. Failures are reported on the status line and do not stop
    /// the watch loop.
    fn cycle(&mut self, report_path: &Path) {
        let result = BuildReport::from_path(report_path).and_then(|report| report.replay(&mut self.plugin));

        match result {
            Ok((outcome, _)) => match outcome.payload {
                Some(payload) if self.last_payload.as_ref() == Some(&payload) => {
                    status_unchanged(&format!("{} unchanged", self.plugin.options().file_name));
                }
                Some(payload) => {
                    status_success(&format!("wrote {}", outcome.output.display()));
                    self.last_payload = Some(payload);
                }
                None => status_unchanged("superseded by a newer cycle"),
            },
            Err(err) => status_error("cycle failed", &format!("{err:#}")),
        }
    }
}
