//! Core process state shared by CLI commands.

mod state;

pub use state::{is_shutdown, is_watching, register_watch, setup_shutdown_handler};
