use crate::error::{ReleaseError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the project root and the user config directory
pub const CONFIG_FILE_NAME: &str = "release-kit.toml";

/// Represents the complete configuration for release-kit.
///
/// Contains the release tag prefix, the installer script set and the pinned
/// dependency repositories.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_tag_prefix")]
    pub tag_prefix: String,

    #[serde(default)]
    pub scripts: ScriptsConfig,

    #[serde(default)]
    pub dependencies: DependenciesConfig,
}

fn default_tag_prefix() -> String {
    "v".to_string()
}

/// One installer script generated from a template.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TemplateSpec {
    /// Output file name; the template is `<output>.template` unless `template` is set
    pub output: String,

    #[serde(default)]
    pub template: Option<String>,
}

impl TemplateSpec {
    pub fn new(output: impl Into<String>) -> Self {
        TemplateSpec {
            output: output.into(),
            template: None,
        }
    }

    /// Template file name inside the templates directory
    pub fn template_name(&self) -> String {
        self.template
            .clone()
            .unwrap_or_else(|| format!("{}.template", self.output))
    }
}

fn default_scripts() -> Vec<TemplateSpec> {
    ["install.sh", "install.ps1", "install-nightly.sh", "install-nightly.ps1"]
        .into_iter()
        .map(TemplateSpec::new)
        .collect()
}

/// Configuration for installer script generation.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ScriptsConfig {
    /// Output directory, relative to the project root
    #[serde(default = "default_scripts_dir")]
    pub dir: PathBuf,

    /// Template directory, relative to the scripts directory
    #[serde(default = "default_templates_dir")]
    pub templates_dir: PathBuf,

    /// Remove files in the scripts directory that are not generated outputs
    #[serde(default = "default_true")]
    pub prune_stale: bool,

    #[serde(default = "default_scripts")]
    pub templates: Vec<TemplateSpec>,
}

fn default_scripts_dir() -> PathBuf {
    PathBuf::from("scripts")
}

fn default_templates_dir() -> PathBuf {
    PathBuf::from("templates")
}

fn default_true() -> bool {
    true
}

impl Default for ScriptsConfig {
    fn default() -> Self {
        ScriptsConfig {
            dir: default_scripts_dir(),
            templates_dir: default_templates_dir(),
            prune_stale: true,
            templates: default_scripts(),
        }
    }
}

/// An external repository cloned at a fixed tag or branch.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PinnedRepo {
    pub url: String,
    pub dir: String,
    pub version: String,
}

impl PinnedRepo {
    pub fn new(url: impl Into<String>, dir: impl Into<String>, version: impl Into<String>) -> Self {
        PinnedRepo {
            url: url.into(),
            dir: dir.into(),
            version: version.into(),
        }
    }
}

fn default_repos() -> Vec<PinnedRepo> {
    vec![
        PinnedRepo::new(
            "https://github.com/tree-sitter/tree-sitter.git",
            "tree-sitter",
            "v0.20.8",
        ),
        PinnedRepo::new(
            "https://github.com/tree-sitter/tree-sitter-typescript.git",
            "tree-sitter-typescript",
            "v0.20.1",
        ),
    ]
}

/// Configuration for pinned dependency checkouts.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DependenciesConfig {
    /// Checkout directory, relative to the project root
    #[serde(default = "default_deps_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_repos")]
    pub repos: Vec<PinnedRepo>,
}

fn default_deps_dir() -> PathBuf {
    PathBuf::from("deps")
}

impl Default for DependenciesConfig {
    fn default() -> Self {
        DependenciesConfig {
            dir: default_deps_dir(),
            repos: default_repos(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tag_prefix: default_tag_prefix(),
            scripts: ScriptsConfig::default(),
            dependencies: DependenciesConfig::default(),
        }
    }
}

/// Parse configuration from TOML text.
pub fn parse_config(content: &str) -> Result<Config> {
    toml::from_str(content).map_err(|e| ReleaseError::config(e.to_string()))
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `release-kit.toml` in the project root
/// 3. `.release-kit.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
/// * `root` - Project root to search for `release-kit.toml`
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>, root: &Path) -> Result<Config> {
    let path = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => find_config(root),
    };

    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading configuration");
            let content = fs::read_to_string(&path).map_err(|e| {
                ReleaseError::config(format!("cannot read {}: {}", path.display(), e))
            })?;
            parse_config(&content)
        }
        None => {
            tracing::debug!("no configuration file found, using defaults");
            Ok(Config::default())
        }
    }
}

fn find_config(root: &Path) -> Option<PathBuf> {
    let local = root.join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(format!(".{}", CONFIG_FILE_NAME)))
        .filter(|path| path.exists())
}
