use std::fmt;

/// Non-fatal conditions met while preparing a release.
/// These are reported to the user but never abort the run.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// No commits between the release tag and HEAD
    NoNewCommits { tag: String },
    /// Commits exist but none carries a recognized conventional prefix
    NoConventionalCommits { commit_count: usize },
    /// More than one `version = "..."` line was rewritten in a manifest
    MultipleVersionLines { path: String, count: usize },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoNewCommits { tag } => {
                write!(f, "No new commits since tag '{}', defaulting to a patch bump", tag)
            }
            BoundaryWarning::NoConventionalCommits { commit_count } => {
                write!(
                    f,
                    "None of {} commit(s) use a conventional prefix, defaulting to a patch bump",
                    commit_count
                )
            }
            BoundaryWarning::MultipleVersionLines { path, count } => {
                write!(f, "Updated {} version lines in '{}'", count, path)
            }
        }
    }
}
