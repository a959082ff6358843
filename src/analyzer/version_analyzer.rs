use crate::boundary::BoundaryWarning;
use crate::conventional;
use crate::domain::{BumpKind, Version};
use crate::error::Result;
use crate::git::CommitSource;

/// Compute the next release version from the current version and commit subjects.
///
/// Parses `current`, classifies `messages`, and bumps accordingly. A parse
/// failure is returned before any classification happens; a component that
/// cannot be incremented fails with `VersionOverflow`.
///
/// # Example
/// ```
/// # use release_kit::analyzer::next_version;
/// let next = next_version("1.2.3", &["feat: add export", "fix: typo"]).unwrap();
/// assert_eq!(next.to_string(), "1.3.0");
/// ```
pub fn next_version<S: AsRef<str>>(current: &str, messages: &[S]) -> Result<Version> {
    let version = Version::parse(current)?;
    version.bump(conventional::classify(messages))
}

/// Result of a bump computed against commit history
#[derive(Debug, Clone, PartialEq)]
pub struct BumpOutcome {
    pub previous: Version,
    pub next: Version,
    pub kind: BumpKind,
    /// Tag the history was read from
    pub tag: String,
    /// Commit subjects since the tag, newest first
    pub subjects: Vec<String>,
    pub warnings: Vec<BoundaryWarning>,
}

/// Analyzes commit history to determine the next release version
pub struct VersionAnalyzer {
    tag_prefix: String,
}

impl VersionAnalyzer {
    /// Create an analyzer that derives release tags as `<tag_prefix><version>`
    pub fn new(tag_prefix: impl Into<String>) -> Self {
        VersionAnalyzer {
            tag_prefix: tag_prefix.into(),
        }
    }

    /// Release tag for the given version
    pub fn release_tag(&self, current: &Version) -> String {
        format!("{}{}", self.tag_prefix, current)
    }

    /// Read history since the release tag of `previous` and bump.
    ///
    /// # Arguments
    /// * `source` - Commit history to read
    /// * `previous` - Version currently released
    /// * `since` - Revision to diff against instead of the derived release tag
    /// * `kind` - Explicit bump kind; skips classification when set
    pub fn bump_from_history<S: CommitSource>(
        &self,
        source: &S,
        previous: Version,
        since: Option<&str>,
        kind: Option<BumpKind>,
    ) -> Result<BumpOutcome> {
        let tag = since
            .map(str::to_string)
            .unwrap_or_else(|| self.release_tag(&previous));

        let subjects = source.subjects_since(&tag)?;
        let mut warnings = Vec::new();

        let kind = match kind {
            Some(kind) => {
                tracing::debug!(%kind, "bump kind given explicitly");
                kind
            }
            None => {
                if subjects.is_empty() {
                    warnings.push(BoundaryWarning::NoNewCommits { tag: tag.clone() });
                } else if !conventional::has_conventional_commits(&subjects) {
                    warnings.push(BoundaryWarning::NoConventionalCommits {
                        commit_count: subjects.len(),
                    });
                }
                conventional::classify(&subjects)
            }
        };

        for warning in &warnings {
            tracing::warn!("{}", warning);
        }

        let next = previous.bump(kind)?;
        tracing::info!(%previous, %next, %kind, "computed next version");

        Ok(BumpOutcome {
            previous,
            next,
            kind,
            tag,
            subjects,
            warnings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReleaseError;
    use crate::git::MockHistory;

    #[test]
    fn test_next_version_minor() {
        let next = next_version("1.2.3", &["feat: add thing", "fix: bug"]).unwrap();
        assert_eq!(next, Version::new(1, 3, 0));
    }

    #[test]
    fn test_next_version_major() {
        let next = next_version("1.2.3", &["BREAKING CHANGE: new api"]).unwrap();
        assert_eq!(next, Version::new(2, 0, 0));
    }

    #[test]
    fn test_next_version_empty_history_patches() {
        let next = next_version::<&str>("0.9.9", &[]).unwrap();
        assert_eq!(next, Version::new(0, 9, 10));
    }

    #[test]
    fn test_next_version_drops_prerelease() {
        let next = next_version("2.5.9-rc.1", &["fix: bug"]).unwrap();
        assert_eq!(next.to_string(), "2.5.10");
    }

    #[test]
    fn test_next_version_invalid_current() {
        let err = next_version("abc", &["feat: x"]).unwrap_err();
        assert!(matches!(err, ReleaseError::InvalidVersionFormat(_)));
    }

    #[test]
    fn test_bump_from_history_uses_prefixed_tag() {
        let history = MockHistory::new().with_tag("v1.2.3", ["feat: add export"]);
        let analyzer = VersionAnalyzer::new("v");

        let outcome = analyzer
            .bump_from_history(&history, Version::new(1, 2, 3), None, None)
            .unwrap();

        assert_eq!(outcome.tag, "v1.2.3");
        assert_eq!(outcome.kind, BumpKind::Minor);
        assert_eq!(outcome.next, Version::new(1, 3, 0));
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn test_bump_from_history_explicit_since() {
        let history = MockHistory::new().with_tag("release-7", ["breaking: rename"]);
        let analyzer = VersionAnalyzer::new("v");

        let outcome = analyzer
            .bump_from_history(&history, Version::new(1, 2, 3), Some("release-7"), None)
            .unwrap();

        assert_eq!(outcome.tag, "release-7");
        assert_eq!(outcome.next, Version::new(2, 0, 0));
    }

    #[test]
    fn test_bump_from_history_kind_override() {
        let history = MockHistory::new().with_tag("v1.2.3", ["breaking: rename"]);
        let analyzer = VersionAnalyzer::new("v");

        let outcome = analyzer
            .bump_from_history(&history, Version::new(1, 2, 3), None, Some(BumpKind::Patch))
            .unwrap();

        assert_eq!(outcome.next, Version::new(1, 2, 4));
    }

    #[test]
    fn test_bump_from_history_warns_on_empty_range() {
        let history = MockHistory::new().with_tag("v1.0.0", Vec::<String>::new());
        let analyzer = VersionAnalyzer::new("v");

        let outcome = analyzer
            .bump_from_history(&history, Version::new(1, 0, 0), None, None)
            .unwrap();

        assert_eq!(outcome.next, Version::new(1, 0, 1));
        assert_eq!(
            outcome.warnings,
            vec![BoundaryWarning::NoNewCommits {
                tag: "v1.0.0".to_string()
            }]
        );
    }

    #[test]
    fn test_bump_from_history_warns_on_unconventional_commits() {
        let history = MockHistory::new().with_tag("v1.0.0", ["wip", "more wip"]);
        let analyzer = VersionAnalyzer::new("v");

        let outcome = analyzer
            .bump_from_history(&history, Version::new(1, 0, 0), None, None)
            .unwrap();

        assert_eq!(
            outcome.warnings,
            vec![BoundaryWarning::NoConventionalCommits { commit_count: 2 }]
        );
    }

    #[test]
    fn test_next_version_component_overflow() {
        let err = next_version("1.2.18446744073709551615", &["fix: x"]).unwrap_err();
        assert!(matches!(err, ReleaseError::VersionOverflow { .. }));

        // a minor bump resets the saturated patch component
        let next = next_version("1.2.18446744073709551615", &["feat: x"]).unwrap();
        assert_eq!(next, Version::new(1, 3, 0));
    }

    #[test]
    fn test_bump_from_history_overflow_is_reported() {
        let history = MockHistory::new().with_tag("v18446744073709551615.0.0", ["breaking: x"]);
        let analyzer = VersionAnalyzer::new("v");

        let err = analyzer
            .bump_from_history(&history, Version::new(u64::MAX, 0, 0), None, None)
            .unwrap_err();
        assert!(matches!(err, ReleaseError::VersionOverflow { .. }));
    }

    #[test]
    fn test_release_tag_renders_metadata() {
        let analyzer = VersionAnalyzer::new("v");
        let version = Version::parse("2.0.0-rc.1").unwrap();
        assert_eq!(analyzer.release_tag(&version), "v2.0.0-rc.1");
    }

    #[test]
    fn test_bump_from_history_missing_tag() {
        let history = MockHistory::new();
        let analyzer = VersionAnalyzer::new("v");

        let err = analyzer
            .bump_from_history(&history, Version::new(1, 0, 0), None, None)
            .unwrap_err();
        assert!(matches!(err, ReleaseError::TagNotFound(ref t) if t == "v1.0.0"));
    }
}
