use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for release-kit operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Invalid version format: {0}")]
    InvalidVersionFormat(String),

    #[error("Cannot apply a {kind} bump to {version}: component out of range")]
    VersionOverflow { version: String, kind: String },

    #[error("Invalid bump type: {0}")]
    InvalidBumpKind(String),

    #[error(
        "Version '{0}' does not follow semantic versioning (MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD])"
    )]
    InvalidSemver(String),

    #[error("No version line found to update in {}", .0.display())]
    MissingManifestLine(PathBuf),

    #[error("Manifest file does not exist: {}", .0.display())]
    ManifestNotFound(PathBuf),

    #[error("{0} environment variable not set")]
    MissingEnvironment(String),

    #[error("Invalid repository identifier '{0}' - expected owner/repo")]
    InvalidRepository(String),

    #[error("Template not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    #[error("Tag not found: {0}")]
    TagNotFound(String),

    #[error("Command `{command}` failed: {stderr}")]
    ExternalCommandFailure { command: String, stderr: String },

    #[error("Dependencies missing after fetch: {}", .0.join(", "))]
    MissingDependency(Vec<String>),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-kit
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create a version format error for the given input
    pub fn version_format(input: impl Into<String>) -> Self {
        ReleaseError::InvalidVersionFormat(input.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }

    /// Create an external command failure from the command line and its stderr
    pub fn command(command: impl Into<String>, stderr: impl Into<String>) -> Self {
        ReleaseError::ExternalCommandFailure {
            command: command.into(),
            stderr: stderr.into(),
        }
    }
}
