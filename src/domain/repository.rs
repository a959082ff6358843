use crate::error::{ReleaseError, Result};
use std::collections::BTreeMap;
use std::fmt;

/// A hosted repository identified as `owner/repo`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryId {
    pub owner: String,
    pub repo: String,
}

impl RepositoryId {
    /// Parse an `owner/repo` identifier (e.g. the value of `GITHUB_REPOSITORY`)
    pub fn parse(input: &str) -> Result<Self> {
        match input.split('/').collect::<Vec<_>>().as_slice() {
            [owner, repo] if !owner.is_empty() && !repo.is_empty() => Ok(RepositoryId {
                owner: owner.to_string(),
                repo: repo.to_string(),
            }),
            _ => Err(ReleaseError::InvalidRepository(input.to_string())),
        }
    }

    /// Placeholder values made available to installer templates
    pub fn replacements(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("GITHUB_OWNER".to_string(), self.owner.clone()),
            ("GITHUB_REPO".to_string(), self.repo.clone()),
            ("GITHUB_REPOSITORY".to_string(), self.to_string()),
        ])
    }
}

impl fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
