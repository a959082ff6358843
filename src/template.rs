//! Installer script generation from `{{NAME}}` templates.

use crate::atomic::write_atomic;
use crate::config::ScriptsConfig;
use crate::domain::RepositoryId;
use crate::error::{ReleaseError, Result};
use regex::{Captures, Regex};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([^{}]+)\}\}").expect("valid placeholder regex"));

/// Placeholder name to replacement text
pub type Replacements = BTreeMap<String, String>;

const TEMPLATE_EXTENSION: &str = "template";

/// Substitute `{{NAME}}` placeholders in a single pass.
///
/// Names missing from `replacements` are left verbatim, and replacement text
/// is never scanned for further placeholders.
pub fn expand(template: &str, replacements: &Replacements) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| match replacements.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Expand one template file into `output_path`.
///
/// Creates the output directory when needed. Outputs ending in `.sh` are made
/// executable on Unix.
pub fn build_script(
    template_path: &Path,
    output_path: &Path,
    replacements: &Replacements,
) -> Result<()> {
    if !template_path.is_file() {
        return Err(ReleaseError::TemplateNotFound(template_path.to_path_buf()));
    }

    let template = fs::read_to_string(template_path)?;
    let content = expand(&template, replacements);

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }
    write_atomic(output_path, &content)?;

    if output_path.extension().is_some_and(|ext| ext == "sh") {
        make_executable(output_path)?;
    }

    tracing::debug!(
        template = %template_path.display(),
        output = %output_path.display(),
        "built script"
    );
    Ok(())
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))?;
    Ok(())
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}

/// Files produced and removed by [`build_all`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildReport {
    pub built: Vec<PathBuf>,
    pub removed: Vec<PathBuf>,
}

/// Build every configured installer script for `repository`.
///
/// Templates are read from `<root>/<scripts.dir>/<scripts.templates_dir>`
/// and outputs written to `<root>/<scripts.dir>`. When `prune_stale` is set,
/// other regular files in the scripts directory are removed afterwards,
/// except `.template` files.
pub fn build_all(
    root: &Path,
    scripts: &ScriptsConfig,
    repository: &RepositoryId,
) -> Result<BuildReport> {
    let scripts_dir = root.join(&scripts.dir);
    let templates_dir = scripts_dir.join(&scripts.templates_dir);
    let replacements = repository.replacements();

    let mut report = BuildReport::default();
    for spec in &scripts.templates {
        let template_path = templates_dir.join(spec.template_name());
        let output_path = scripts_dir.join(&spec.output);

        build_script(&template_path, &output_path, &replacements)?;
        tracing::info!(output = %spec.output, "built installer script");
        report.built.push(output_path);
    }

    if scripts.prune_stale {
        let keep: HashSet<&str> = scripts.templates.iter().map(|s| s.output.as_str()).collect();
        report.removed = prune_stale(&scripts_dir, &keep)?;
    }

    Ok(report)
}

/// Remove regular files directly in `dir` that are neither kept outputs nor templates.
fn prune_stale(dir: &Path, keep: &HashSet<&str>) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        let path = entry.path();
        let is_template = path
            .extension()
            .is_some_and(|ext| ext == TEMPLATE_EXTENSION);
        let is_output = entry
            .file_name()
            .to_str()
            .is_some_and(|name| keep.contains(name));

        if !is_template && !is_output {
            tracing::info!(file = %path.display(), "removing unused file");
            fs::remove_file(&path)?;
            removed.push(path);
        }
    }

    removed.sort();
    Ok(removed)
}
