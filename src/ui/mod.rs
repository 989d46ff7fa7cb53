//! User interface module - terminal output formatting.
//!
//! All diagnostics go to stderr, the rendered configuration goes to
//! stdout so it can be piped into the orchestrator untouched.

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_branches, display_error, display_status, display_success, display_warning,
};
