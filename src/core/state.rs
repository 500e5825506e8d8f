//! Process state for the CLI.
//!
//! Two flags:
//! - `WATCHING`: a watch loop is running and will stop on its own
//! - `SHUTDOWN`: Ctrl+C was received

use std::sync::atomic::{AtomicBool, Ordering};

/// A watch loop is polling `is_shutdown()`
static WATCHING: AtomicBool = AtomicBool::new(false);

/// Shutdown has been requested (Ctrl+C received)
static SHUTDOWN: AtomicBool = AtomicBool::new(false);

/// Setup the global Ctrl+C handler. Call once at program start
///
/// - Before `register_watch()`: exit immediately, nothing to wind down
/// - After `register_watch()`: set the flag and let the loop finish its cycle
pub fn setup_shutdown_handler() -> anyhow::Result<()> {
    ctrlc::set_handler(|| {
        SHUTDOWN.store(true, Ordering::SeqCst);

        if is_watching() {
            crate::log!("watch"; "shutting down...");
        } else {
            std::process::exit(0);
        }
    })
    .map_err(|e| anyhow::anyhow!("failed to set Ctrl+C handler: {}", e))
}

/// Mark the watch loop as running
pub fn register_watch() {
    WATCHING.store(true, Ordering::SeqCst);
}

pub fn is_watching() -> bool {
    WATCHING.load(Ordering::SeqCst)
}

/// Check if shutdown has been requested
pub fn is_shutdown() -> bool {
    SHUTDOWN.load(Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_watch() {
        register_watch();
        assert!(is_watching());
        assert!(!is_shutdown());
    }
}
