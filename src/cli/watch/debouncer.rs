use std::ffi::OsString;
use std::path::Path;
use std::time::{Duration, Instant};

/// What happened to the watched report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ChangeKind {
    Created,
    Modified,
    Removed,
}

impl ChangeKind {
    pub(super) fn label(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Modified => "modified",
            Self::Removed => "removed",
        }
    }
}

/// Idle wait when nothing is pending. Bounded so the loop still notices
/// a shutdown request.
const IDLE_WAIT: Duration = Duration::from_millis(500);

/// Pure debouncer for a single file inside a watched directory.
/// No business logic, no global state access.
pub(super) struct Debouncer {
    target: OsString,
    pub(super) window: Duration,
    pub(super) change: Option<ChangeKind>,
    pub(super) last_event: Option<Instant>,
}

impl Debouncer {
    pub(super) fn new(target: &Path, window: Duration) -> Self {
        Self {
            target: target.file_name().map(OsString::from).unwrap_or_default(),
            window,
            change: None,
            last_event: None,
        }
    }

    /// Add a notify event, applying dedup rules:
    /// - Removed + Created/Modified → the new event (file was restored)
    /// - Modified + Removed → Removed
    /// - Created + Removed → nothing pending
    /// - otherwise the first event wins
    pub(super) fn add_event(&mut self, event: &notify::Event) {
        use notify::EventKind;

        let kind = match event.kind {
            EventKind::Create(_) => ChangeKind::Created,
            EventKind::Remove(_) => ChangeKind::Removed,
            EventKind::Modify(modify) => {
                // mtime/atime/chmod noise
                if matches!(modify, notify::event::ModifyKind::Metadata(_)) {
                    return;
                }
                ChangeKind::Modified
            }
            _ => return,
        };

        if !event
            .paths
            .iter()
            .any(|path| path.file_name() == Some(self.target.as_os_str()))
        {
            return;
        }

        crate::debug!("watch"; "event {}: {:?}", kind.label(), event.paths);

        self.change = match (self.change, kind) {
            (None, kind) => Some(kind),
            (Some(ChangeKind::Removed), ChangeKind::Created | ChangeKind::Modified) => Some(kind),
            (Some(ChangeKind::Modified), ChangeKind::Removed) => Some(ChangeKind::Removed),
            (Some(ChangeKind::Created), ChangeKind::Removed) => None,
            (existing, _) => existing,
        };
        self.last_event = Some(Instant::now());
    }

    /// Take the pending change once the quiet window has passed.
    pub(super) fn take_if_ready(&mut self) -> Option<ChangeKind> {
        if !self.is_ready() {
            return None;
        }
        self.last_event = None;
        self.change.take()
    }

    pub(super) fn is_ready(&self) -> bool {
        let Some(last_event) = self.last_event else {
            return false;
        };
        last_event.elapsed() >= self.window && self.change.is_some()
    }

    /// Sleep duration until the next possible ready time.
    pub(super) fn sleep_duration(&self) -> Duration {
        let Some(last_event) = self.last_event else {
            return IDLE_WAIT;
        };
        self.window
            .saturating_sub(last_event.elapsed())
            .clamp(Duration::from_millis(1), IDLE_WAIT)
    }
}
