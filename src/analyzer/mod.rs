//! Analysis engine for determining the next release version from commits

pub mod version_analyzer;

pub use version_analyzer::{next_version, BumpOutcome, VersionAnalyzer};
