//! Commit history abstraction layer
//!
//! The version bumper only needs one thing from git: the subject lines of the
//! commits made since the last release tag. [`CommitSource`] captures that
//! contract so the bump computation can run against a real repository or an
//! in-memory history.
//!
//! - [repository::Git2History]: reads history with the `git2` crate
//! - [mock::MockHistory]: fixed history for tests
//!
//! ```rust
//! # use release_kit::git::{CommitSource, MockHistory};
//! let history = MockHistory::new().with_tag("v1.0.0", ["feat: add export"]);
//! let subjects = history.subjects_since("v1.0.0").unwrap();
//! assert_eq!(subjects, vec!["feat: add export".to_string()]);
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockHistory;
pub use repository::Git2History;

use crate::error::Result;

/// Source of commit subjects for version classification
pub trait CommitSource {
    /// Subject lines of commits reachable from HEAD but not from `tag`
    ///
    /// Ordered newest first, the way `git log <tag>..HEAD` lists them. `tag`
    /// may be any revision the source understands.
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - One subject per commit, possibly empty
    /// * `Err(TagNotFound)` - If `tag` does not resolve
    /// * `Err` - On any other history read failure
    fn subjects_since(&self, tag: &str) -> Result<Vec<String>>;
}
