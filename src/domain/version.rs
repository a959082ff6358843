use crate::error::{ReleaseError, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static LEADING_TRIPLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.(\d+)\.(\d+)").expect("valid version regex"));

static METADATA_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:-([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?(?:\+([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?$")
        .expect("valid metadata regex")
});

/// Semantic version representation
///
/// Only the numeric triple takes part in bumping. Prerelease and build
/// metadata are carried along for rendering and dropped by [`Version::bump`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre: Option<String>,
    pub build: Option<String>,
}

impl Version {
    /// Create a new version without metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre: None,
            build: None,
        }
    }

    /// Parse a version string that begins with `MAJOR.MINOR.PATCH`.
    ///
    /// Text after the triple is ignored for the numbers. A well-formed
    /// `-PRERELEASE` / `+BUILD` suffix is kept as metadata; anything else
    /// trailing is discarded.
    ///
    /// # Example
    /// ```
    /// # use release_kit::domain::Version;
    /// let v = Version::parse("2.5.9-rc.1").unwrap();
    /// assert_eq!((v.major, v.minor, v.patch), (2, 5, 9));
    /// assert_eq!(v.pre.as_deref(), Some("rc.1"));
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let captures = LEADING_TRIPLE
            .captures(input)
            .ok_or_else(|| ReleaseError::version_format(input))?;

        let component = |index: usize| -> Result<u64> {
            captures[index]
                .parse::<u64>()
                .map_err(|_| ReleaseError::version_format(input))
        };

        let mut version = Version::new(component(1)?, component(2)?, component(3)?);

        let rest = &input[captures[0].len()..];
        if let Some(metadata) = METADATA_SUFFIX.captures(rest) {
            version.pre = metadata.get(1).map(|m| m.as_str().to_string());
            version.build = metadata.get(2).map(|m| m.as_str().to_string());
        }

        Ok(version)
    }

    /// The numeric triple without metadata
    pub fn triple(&self) -> (u64, u64, u64) {
        (self.major, self.minor, self.patch)
    }

    /// Bump version according to bump type
    ///
    /// Fails with `VersionOverflow` when the bumped component is already
    /// `u64::MAX`.
    pub fn bump(&self, kind: BumpKind) -> Result<Self> {
        let bumped = match kind {
            BumpKind::Major => self.major.checked_add(1).map(|major| Version::new(major, 0, 0)),
            BumpKind::Minor => self
                .minor
                .checked_add(1)
                .map(|minor| Version::new(self.major, minor, 0)),
            BumpKind::Patch => self
                .patch
                .checked_add(1)
                .map(|patch| Version::new(self.major, self.minor, patch)),
        };

        bumped.ok_or_else(|| ReleaseError::VersionOverflow {
            version: self.to_string(),
            kind: kind.to_string(),
        })
    }
}

impl FromStr for Version {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.pre {
            write!(f, "-{}", pre)?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

/// Which version component a release increments
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BumpKind {
    Patch,
    Minor,
    Major,
}

impl FromStr for BumpKind {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "major" => Ok(BumpKind::Major),
            "minor" => Ok(BumpKind::Minor),
            "patch" => Ok(BumpKind::Patch),
            _ => Err(ReleaseError::InvalidBumpKind(s.to_string())),
        }
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BumpKind::Major => write!(f, "major"),
            BumpKind::Minor => write!(f, "minor"),
            BumpKind::Patch => write!(f, "patch"),
        }
    }
}
