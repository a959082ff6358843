//! Command workflow orchestration
//!
//! Each subcommand of the binary maps to one `run_*` function here. The
//! binary reads the command line and environment once and hands plain values
//! to these functions, which keeps them callable without clap or process
//! state.

use std::path::{Path, PathBuf};

use crate::analyzer::{BumpOutcome, VersionAnalyzer};
use crate::config::Config;
use crate::domain::{BumpKind, RepositoryId, Version};
use crate::error::{ReleaseError, Result};
use crate::fetch::{self, CommandRunner, FetchReport};
use crate::git::Git2History;
use crate::manifest::{self, PatchOutcome};
use crate::template::{self, BuildReport};

/// Environment variable holding the `owner/repo` identifier
pub const REPOSITORY_ENV: &str = "GITHUB_REPOSITORY";

/// Arguments for the bump workflow
#[derive(Debug, Clone, PartialEq)]
pub struct BumpWorkflowArgs {
    /// Version currently released, e.g. `1.2.3`
    pub current_version: String,

    /// Tag to read history from instead of `<tag_prefix><current_version>`
    pub since: Option<String>,

    /// Repository to read history from
    pub repo_path: PathBuf,

    /// Explicit bump kind (`major`, `minor` or `patch`)
    pub kind: Option<String>,
}

/// Compute the next version from the repository history.
pub fn run_bump(args: &BumpWorkflowArgs, config: &Config) -> Result<BumpOutcome> {
    // validate user input before opening the repository
    let kind = args
        .kind
        .as_deref()
        .map(str::parse::<BumpKind>)
        .transpose()?;
    let current = Version::parse(&args.current_version)?;

    let history = Git2History::open(&args.repo_path)?;
    VersionAnalyzer::new(config.tag_prefix.clone()).bump_from_history(
        &history,
        current,
        args.since.as_deref(),
        kind,
    )
}

/// Write a new version into a manifest file.
pub fn run_set_version(file: &Path, version: &str) -> Result<PatchOutcome> {
    manifest::patch_version(file, version)
}

/// Generate installer scripts for the repository named by `repository`.
///
/// `repository` is the raw value of [`REPOSITORY_ENV`], `None` when unset.
pub fn run_build_scripts(
    root: &Path,
    config: &Config,
    repository: Option<&str>,
) -> Result<BuildReport> {
    let raw = repository
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ReleaseError::MissingEnvironment(REPOSITORY_ENV.to_string()))?;
    let repository = RepositoryId::parse(raw)?;

    template::build_all(root, &config.scripts, &repository)
}

/// Clone every pinned dependency that is not present yet.
pub fn run_clone_deps<R: CommandRunner>(
    root: &Path,
    config: &Config,
    runner: &R,
) -> Result<FetchReport> {
    fetch::fetch_all(root, &config.dependencies, runner)
}
