//! Pinned dependency checkouts
//!
//! Each [`PinnedRepo`] is cloned shallowly at its pinned tag into the
//! dependencies directory. Existing checkouts are left alone, so running the
//! fetch twice is cheap. Cloning goes through a [`CommandRunner`] so tests
//! never touch the network.

pub mod runner;

pub use runner::{CommandRunner, SystemRunner};

use crate::config::{DependenciesConfig, PinnedRepo};
use crate::error::{ReleaseError, Result};
use std::fs;
use std::path::Path;

/// What happened to a single pinned repository
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    AlreadyPresent,
    Cloned,
}

/// Arguments for a shallow clone of `repo` at its pinned version
pub fn clone_args(repo: &PinnedRepo, target: &Path) -> Vec<String> {
    vec![
        "clone".to_string(),
        "--depth".to_string(),
        "1".to_string(),
        "-b".to_string(),
        repo.version.clone(),
        repo.url.clone(),
        target.display().to_string(),
    ]
}

/// Make sure `repo` is checked out under `deps_dir`, cloning it if absent.
pub fn ensure_repo<R: CommandRunner>(
    repo: &PinnedRepo,
    deps_dir: &Path,
    runner: &R,
) -> Result<FetchOutcome> {
    let target = deps_dir.join(&repo.dir);

    if target.exists() {
        tracing::info!(dir = %repo.dir, "already exists");
        return Ok(FetchOutcome::AlreadyPresent);
    }

    tracing::info!(url = %repo.url, version = %repo.version, path = %target.display(), "cloning");
    runner.run("git", &clone_args(repo, &target))?;

    Ok(FetchOutcome::Cloned)
}

/// Outcome of [`fetch_all`], in configuration order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchReport {
    pub repos: Vec<(String, FetchOutcome)>,
}

impl FetchReport {
    pub fn cloned(&self) -> usize {
        self.repos
            .iter()
            .filter(|(_, outcome)| *outcome == FetchOutcome::Cloned)
            .count()
    }
}

/// Ensure every configured repository is present under `<root>/<deps.dir>`.
///
/// Stops at the first failed clone. Afterwards every target directory must
/// exist, otherwise `MissingDependency` names the ones that do not.
pub fn fetch_all<R: CommandRunner>(
    root: &Path,
    deps: &DependenciesConfig,
    runner: &R,
) -> Result<FetchReport> {
    let deps_dir = root.join(&deps.dir);
    fs::create_dir_all(&deps_dir)?;

    let mut report = FetchReport::default();
    for repo in &deps.repos {
        let outcome = ensure_repo(repo, &deps_dir, runner)?;
        report.repos.push((repo.dir.clone(), outcome));
    }

    let missing: Vec<String> = deps
        .repos
        .iter()
        .filter(|repo| !deps_dir.join(&repo.dir).exists())
        .map(|repo| repo.dir.clone())
        .collect();

    if !missing.is_empty() {
        return Err(ReleaseError::MissingDependency(missing));
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::PathBuf;

    /// Records invocations and creates the clone target like `git clone` would
    #[derive(Default)]
    struct FakeGit {
        calls: RefCell<Vec<Vec<String>>>,
        create_target: bool,
        fail: bool,
    }

    impl FakeGit {
        fn cloning() -> Self {
            FakeGit {
                create_target: true,
                ..Default::default()
            }
        }
    }

    impl CommandRunner for FakeGit {
        fn run(&self, program: &str, args: &[String]) -> Result<String> {
            assert_eq!(program, "git");
            self.calls.borrow_mut().push(args.to_vec());
            if self.fail {
                return Err(ReleaseError::command(
                    runner::render_command(program, args),
                    "fatal: Remote branch v9 not found",
                ));
            }
            if self.create_target {
                let target = PathBuf::from(args.last().unwrap());
                fs::create_dir_all(target).unwrap();
            }
            Ok(String::new())
        }
    }

    fn repo(dir: &str) -> PinnedRepo {
        PinnedRepo::new(format!("https://example.com/{}.git", dir), dir, "v1.0.0")
    }

    #[test]
    fn test_clone_args() {
        let args = clone_args(&repo("lib"), Path::new("deps/lib"));
        assert_eq!(
            args,
            vec![
                "clone",
                "--depth",
                "1",
                "-b",
                "v1.0.0",
                "https://example.com/lib.git",
                "deps/lib"
            ]
        );
    }

    #[test]
    fn test_existing_checkout_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("lib")).unwrap();
        let git = FakeGit::cloning();

        let outcome = ensure_repo(&repo("lib"), dir.path(), &git).unwrap();

        assert_eq!(outcome, FetchOutcome::AlreadyPresent);
        assert!(git.calls.borrow().is_empty());
    }

    #[test]
    fn test_absent_checkout_is_cloned() {
        let dir = tempfile::tempdir().unwrap();
        let git = FakeGit::cloning();

        let outcome = ensure_repo(&repo("lib"), dir.path(), &git).unwrap();

        assert_eq!(outcome, FetchOutcome::Cloned);
        assert_eq!(git.calls.borrow().len(), 1);
        assert!(dir.path().join("lib").is_dir());
    }

    #[test]
    fn test_clone_failure_is_surfaced() {
        let dir = tempfile::tempdir().unwrap();
        let git = FakeGit {
            fail: true,
            ..Default::default()
        };

        let err = ensure_repo(&repo("lib"), dir.path(), &git).unwrap_err();
        assert!(matches!(err, ReleaseError::ExternalCommandFailure { .. }));
    }

    #[test]
    fn test_fetch_all_mixed() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir_all(root.path().join("deps/a")).unwrap();
        let deps = DependenciesConfig {
            dir: PathBuf::from("deps"),
            repos: vec![repo("a"), repo("b")],
        };
        let git = FakeGit::cloning();

        let report = fetch_all(root.path(), &deps, &git).unwrap();

        assert_eq!(
            report.repos,
            vec![
                ("a".to_string(), FetchOutcome::AlreadyPresent),
                ("b".to_string(), FetchOutcome::Cloned)
            ]
        );
        assert_eq!(report.cloned(), 1);
    }

    #[test]
    fn test_fetch_all_stops_at_first_failure() {
        let root = tempfile::tempdir().unwrap();
        let deps = DependenciesConfig {
            dir: PathBuf::from("deps"),
            repos: vec![repo("a"), repo("b")],
        };
        let git = FakeGit {
            fail: true,
            ..Default::default()
        };

        assert!(fetch_all(root.path(), &deps, &git).is_err());
        assert_eq!(git.calls.borrow().len(), 1);
    }

    #[test]
    fn test_fetch_all_verifies_targets() {
        let root = tempfile::tempdir().unwrap();
        let deps = DependenciesConfig {
            dir: PathBuf::from("deps"),
            repos: vec![repo("a")],
        };
        // reports success but leaves nothing on disk
        let git = FakeGit::default();

        let err = fetch_all(root.path(), &deps, &git).unwrap_err();
        assert!(matches!(err, ReleaseError::MissingDependency(ref m) if m == &["a".to_string()]));
    }
}
