//! User interface module - terminal output.
//!
//! Separates concerns:
//! - `formatter` - Status, warning and report formatting (stderr)
//! - This module - Command results written to stdout

use crate::domain::Version;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_boundary_warning, display_build_report, display_commit_analysis, display_error,
    display_fetch_report, display_status, display_success,
};

/// Print a computed version on stdout, alone on its line, for capture by CI.
pub fn print_version(version: &Version) {
    println!("{}", version);
}
