//! User interface module - terminal styling and report formatting.
//!
//! - `formatter` - Pure formatting functions
//! - This module - Process-wide output settings

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{display_error, render_comparison, render_fields, render_sorted};

/// Enable or disable ANSI styling on both stdout and stderr.
pub fn set_color(enabled: bool) {
    console::set_colors_enabled(enabled);
    console::set_colors_enabled_stderr(enabled);
}
