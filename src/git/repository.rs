use crate::error::{ReleaseError, Result};
use git2::{ErrorCode, Repository as Git2Repo, Sort};
use std::path::Path;

/// Commit history read from a git repository on disk
pub struct Git2History {
    repo: Git2Repo,
}

impl Git2History {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2History { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2History { repo }
    }
}

impl super::CommitSource for Git2History {
    fn subjects_since(&self, tag: &str) -> Result<Vec<String>> {
        // any revision git accepts: tag, branch, SHA or `HEAD~3`
        let boundary = match self.repo.revparse_single(tag) {
            Ok(object) => object.peel_to_commit()?.id(),
            Err(e) if matches!(e.code(), ErrorCode::NotFound | ErrorCode::InvalidSpec) => {
                return Err(ReleaseError::TagNotFound(tag.to_string()))
            }
            Err(e) => return Err(e.into()),
        };

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push_head()?;
        revwalk.hide(boundary)?;

        let mut subjects = Vec::new();
        for oid in revwalk {
            let commit = self.repo.find_commit(oid?)?;
            subjects.push(commit.summary().unwrap_or_default().to_string());
        }

        tracing::debug!(tag, commits = subjects.len(), "read commit history");
        Ok(subjects)
    }
}
