//! Terminal output.
//!
//! - `log!`: one line with a colored `[module]` prefix
//! - `debug!`: same, only with `--verbose`
//! - watch status: a single block that each new cycle overwrites
//!
//! ```ignore
//! log!("emit"; "wrote {}", path.display());
//! debug!("emit"; "skip {} (1 newer cycle pending)", name);
//! ```

use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use owo_colors::OwoColorize;
use parking_lot::Mutex;
use std::io::{Write, stdout};
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// `log!` gated on `--verbose`.
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

pub fn log(module: &str, message: &str) {
    let prefix = prefix(module);
    let mut out = stdout().lock();
    execute!(out, Clear(ClearType::UntilNewLine)).ok();
    writeln!(out, "{prefix} {message}").ok();
    out.flush().ok();
}

fn prefix(module: &str) -> String {
    let tag = format!("[{module}]");
    if module.eq_ignore_ascii_case("emit") {
        tag.bright_blue().bold().to_string()
    } else if module.eq_ignore_ascii_case("watch") {
        tag.bright_green().bold().to_string()
    } else if module.eq_ignore_ascii_case("error") {
        tag.bright_red().bold().to_string()
    } else {
        tag.bright_yellow().bold().to_string()
    }
}

// ============================================================================
// Watch status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Success,
    Unchanged,
    Error,
}

/// Overwriting status block for watch mode.
pub struct WatchStatus {
    /// Height of the block currently on screen
    shown: usize,
}

static WATCH_STATUS: Mutex<WatchStatus> = parking_lot::const_mutex(WatchStatus::new());

impl WatchStatus {
    pub const fn new() -> Self {
        Self { shown: 0 }
    }

    pub fn success(&mut self, message: &str) {
        self.show(Outcome::Success, message);
    }

    pub fn unchanged(&mut self, message: &str) {
        self.show(Outcome::Unchanged, message);
    }

    /// `summary`, followed by `detail` on the next lines when non-empty.
    pub fn error(&mut self, summary: &str, detail: &str) {
        if detail.is_empty() {
            self.show(Outcome::Error, summary);
        } else {
            self.show(Outcome::Error, &format!("{summary}\n{detail}"));
        }
    }

    fn show(&mut self, outcome: Outcome, message: &str) {
        let mut out = stdout().lock();
        if self.shown > 0 {
            let up = u16::try_from(self.shown).unwrap_or(u16::MAX);
            execute!(out, cursor::MoveUp(up), Clear(ClearType::FromCursorDown)).ok();
        }

        let time = format!("[{}]", clock()).dimmed().to_string();
        let line = match outcome {
            Outcome::Success => format!("{time} {} {message}", "✓".green()),
            Outcome::Error => format!("{time} {} {message}", "✗".red()),
            Outcome::Unchanged => format!("{time} {}", message.dimmed()),
        };
        writeln!(out, "{line}").ok();
        out.flush().ok();

        self.shown = line_count(message);
    }
}

impl Default for WatchStatus {
    fn default() -> Self {
        Self::new()
    }
}

/// Wall-clock time of day (UTC) as `HH:MM:SS`.
fn clock() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
        % 86_400;
    format!("{:02}:{:02}:{:02}", secs / 3600, secs / 60 % 60, secs % 60)
}

fn line_count(message: &str) -> usize {
    message.lines().count().max(1)
}

pub fn status_success(message: &str) {
    WATCH_STATUS.lock().success(message);
}

pub fn status_unchanged(message: &str) {
    WATCH_STATUS.lock().unchanged(message);
}

pub fn status_error(summary: &str, detail: &str) {
    WATCH_STATUS.lock().error(summary, detail);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_count() {
        assert_eq!(line_count(""), 1);
        assert_eq!(line_count("wrote dist/manifest.json"), 1);
        assert_eq!(line_count("cycle failed\nseed must be an object\n  at [manifest]"), 3);
    }

    #[test]
    fn test_clock_format() {
        let time = clock();
        assert_eq!(time.len(), 8);
        assert_eq!(time.matches(':').count(), 2);
    }

    #[test]
    fn test_status_tracks_height() {
        let mut status = WatchStatus::new();
        status.error("cycle failed", "line one\nline two");
        assert_eq!(status.shown, 3);
        status.success("wrote manifest.json");
        assert_eq!(status.shown, 1);
    }

    #[test]
    fn test_verbose_toggle() {
        set_verbose(true);
        assert!(is_verbose());
        set_verbose(false);
        assert!(!is_verbose());
    }
}
