//! Pure formatting functions for UI output.
//!
//! Everything here writes to stderr so that stdout carries only command
//! results (the `bump` subcommand prints just the new version).

use crate::boundary::BoundaryWarning;
use crate::domain::BumpKind;
use crate::fetch::{FetchOutcome, FetchReport};
use crate::template::BuildReport;
use console::style;

const MAX_LISTED_COMMITS: usize = 10;
const MAX_SUBJECT_WIDTH: usize = 60;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().for_stderr(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green().for_stderr(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow().for_stderr(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow().for_stderr(), warning);
}

/// Shorten a commit subject to the listing width, respecting char boundaries.
pub fn truncate_subject(subject: &str) -> String {
    if subject.chars().count() > MAX_SUBJECT_WIDTH {
        let short: String = subject.chars().take(MAX_SUBJECT_WIDTH).collect();
        format!("{}…", short)
    } else {
        subject.to_string()
    }
}

/// Numbered listing of up to ten subjects plus a remainder line.
pub fn format_commit_list(subjects: &[String]) -> Vec<String> {
    let mut lines: Vec<String> = subjects
        .iter()
        .take(MAX_LISTED_COMMITS)
        .enumerate()
        .map(|(i, subject)| format!("  {}. {}", i + 1, truncate_subject(subject)))
        .collect();

    if subjects.len() > MAX_LISTED_COMMITS {
        lines.push(format!(
            "  ... and {} more commits",
            subjects.len() - MAX_LISTED_COMMITS
        ));
    }

    lines
}

/// Display the commits considered for a bump and the resulting kind.
pub fn display_commit_analysis(subjects: &[String], tag: &str, kind: BumpKind) {
    eprintln!(
        "\n{}",
        style(format!("{} commit(s) since '{}'", subjects.len(), tag))
            .bold()
            .for_stderr()
    );
    for line in format_commit_list(subjects) {
        eprintln!("{}", line);
    }
    display_status(&format!("Bump type: {}", kind));
}

/// Display generated and removed installer scripts.
pub fn display_build_report(report: &BuildReport) {
    for path in &report.built {
        display_success(&format!("Built {}", path.display()));
    }
    for path in &report.removed {
        display_status(&format!("Removed unused file: {}", path.display()));
    }
}

/// Display the state of each pinned dependency.
pub fn display_fetch_report(report: &FetchReport) {
    for (dir, outcome) in &report.repos {
        match outcome {
            FetchOutcome::AlreadyPresent => display_success(&format!("{} already exists", dir)),
            FetchOutcome::Cloned => display_success(&format!("Successfully cloned {}", dir)),
        }
    }
}
