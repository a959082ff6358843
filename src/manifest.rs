//! Rewriting the `version = "..."` line of a manifest file.

use crate::atomic::write_atomic;
use crate::boundary::BoundaryWarning;
use crate::error::{ReleaseError, Result};
use regex::{NoExpand, Regex};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static VERSION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?m)^version\s*=\s*".*""#).expect("valid manifest regex"));

/// Result of patching a manifest
#[derive(Debug, Clone, PartialEq)]
pub struct PatchOutcome {
    pub path: PathBuf,
    pub version: String,
    /// Number of version lines rewritten
    pub replaced: usize,
    pub warnings: Vec<BoundaryWarning>,
}

/// Check that `version` follows `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`.
pub fn validate_semver(version: &str) -> Result<semver::Version> {
    semver::Version::parse(version).map_err(|_| ReleaseError::InvalidSemver(version.to_string()))
}

/// Rewrite version lines in manifest text.
///
/// Returns the new text and how many lines were rewritten; the caller decides
/// what zero replacements means.
pub fn replace_version_lines(content: &str, new_version: &str) -> (String, usize) {
    let count = VERSION_LINE.find_iter(content).count();
    if count == 0 {
        return (content.to_string(), 0);
    }

    let replacement = format!(r#"version = "{}""#, new_version);
    let patched = VERSION_LINE.replace_all(content, NoExpand(&replacement));
    (patched.into_owned(), count)
}

/// Set the version recorded in a manifest file.
///
/// The new version is validated first, then the whole file is read, patched
/// in memory and written back atomically. Nothing is written when validation
/// fails or no version line exists.
///
/// # Errors
/// * `InvalidSemver` - `new_version` is not a semantic version
/// * `ManifestNotFound` - `path` is not a file
/// * `MissingManifestLine` - no line matches `version = "..."`
pub fn patch_version(path: &Path, new_version: &str) -> Result<PatchOutcome> {
    validate_semver(new_version)?;

    if !path.is_file() {
        return Err(ReleaseError::ManifestNotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    let (patched, replaced) = replace_version_lines(&content, new_version);

    if replaced == 0 {
        return Err(ReleaseError::MissingManifestLine(path.to_path_buf()));
    }

    let mut warnings = Vec::new();
    if replaced > 1 {
        let warning = BoundaryWarning::MultipleVersionLines {
            path: path.display().to_string(),
            count: replaced,
        };
        tracing::warn!("{}", warning);
        warnings.push(warning);
    }

    if patched != content {
        write_atomic(path, &patched)?;
    }
    tracing::info!(path = %path.display(), version = new_version, "updated manifest version");

    Ok(PatchOutcome {
        path: path.to_path_buf(),
        version: new_version.to_string(),
        replaced,
        warnings,
    })
}
