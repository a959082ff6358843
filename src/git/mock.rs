use crate::error::{ReleaseError, Result};
use crate::git::CommitSource;
use std::collections::HashMap;

/// In-memory commit history for testing without a repository
#[derive(Debug, Clone, Default)]
pub struct MockHistory {
    since_tag: HashMap<String, Vec<String>>,
}

impl MockHistory {
    /// Create a history with no tags
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tag and the subjects committed after it (newest first)
    pub fn with_tag<I, S>(mut self, tag: impl Into<String>, subjects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.since_tag
            .insert(tag.into(), subjects.into_iter().map(Into::into).collect());
        self
    }
}

impl CommitSource for MockHistory {
    fn subjects_since(&self, tag: &str) -> Result<Vec<String>> {
        self.since_tag
            .get(tag)
            .cloned()
            .ok_or_else(|| ReleaseError::TagNotFound(tag.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_history_known_tag() {
        let history = MockHistory::new().with_tag("v1.0.0", ["fix: a", "feat: b"]);
        assert_eq!(
            history.subjects_since("v1.0.0").unwrap(),
            vec!["fix: a".to_string(), "feat: b".to_string()]
        );
    }

    #[test]
    fn test_mock_history_unknown_tag() {
        let history = MockHistory::new();
        assert!(matches!(
            history.subjects_since("v1.0.0"),
            Err(ReleaseError::TagNotFound(_))
        ));
    }

    #[test]
    fn test_mock_history_empty_range() {
        let history = MockHistory::new().with_tag("v1.0.0", Vec::<String>::new());
        assert!(history.subjects_since("v1.0.0").unwrap().is_empty());
    }
}
