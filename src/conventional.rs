//! Conventional-commit classification of a batch of commit subjects.
//!
//! The rules are literal string checks, not a full conventional-commit
//! parser: breaking markers are substring matches, `feat:` and `fix:` are
//! case-sensitive prefix matches.

use crate::domain::BumpKind;

const BREAKING_MARKER: &str = "BREAKING CHANGE";
const BREAKING_PREFIX: &str = "breaking:";
const FEATURE_PREFIX: &str = "feat:";
const FIX_PREFIX: &str = "fix:";

/// Whether a single message announces a breaking change.
///
/// `BREAKING CHANGE` must match exactly; `breaking:` matches in any casing.
pub fn is_breaking(message: &str) -> bool {
    message.contains(BREAKING_MARKER) || message.to_lowercase().contains(BREAKING_PREFIX)
}

/// Classify commit messages into the bump they call for.
///
/// First match wins: any breaking message gives `Major`, then any `feat:`
/// gives `Minor`, then any `fix:` gives `Patch`. Anything else, including an
/// empty batch, falls back to `Patch`.
pub fn classify<S: AsRef<str>>(messages: &[S]) -> BumpKind {
    let messages = || messages.iter().map(AsRef::as_ref);

    if messages().any(is_breaking) {
        BumpKind::Major
    } else if messages().any(|m| m.starts_with(FEATURE_PREFIX)) {
        BumpKind::Minor
    } else {
        // `fix:` and unrecognized subjects both land here
        BumpKind::Patch
    }
}

/// Whether any message uses a recognized conventional prefix or marker.
pub fn has_conventional_commits<S: AsRef<str>>(messages: &[S]) -> bool {
    messages.iter().map(AsRef::as_ref).any(|m| {
        is_breaking(m) || m.starts_with(FEATURE_PREFIX) || m.starts_with(FIX_PREFIX)
    })
}
