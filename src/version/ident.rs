//! Version-segment detection in documentation URL paths
//!
//! Published books live under a leading version segment:
//! - `/v1.2.3/guide/intro.html`
//! - `/latest/guide/intro.html`
//!
//! A version identifier is an opaque string token: either the literal
//! `latest` or `v` followed by a dot-separated numeric sequence. No ordering
//! or structure is read out of it beyond this pattern.

use regex::{NoExpand, Regex};

/// Fallback identifier for paths that carry no version segment
pub const FALLBACK_VERSION: &str = "latest";

/// Matcher for the leading version segment of a URL path
#[derive(Clone)]
pub struct VersionSegment {
    /// Regex for the leading segment: `/v1.2.3/` or `/latest/`
    segment_re: Regex,
}

impl VersionSegment {
    pub fn new() -> Self {
        Self {
            // Match: /vN[.N]*/ or /latest/ at the start of the path
            segment_re: Regex::new(r"^/(v\d+(?:\.\d+)*|latest)/").unwrap(),
        }
    }

    /// Derive the currently viewed version from a URL path.
    ///
    /// Returns the captured segment, or [`FALLBACK_VERSION`] when the path
    /// does not start with a version segment. Total: every input maps to a
    /// version identifier.
    pub fn derive_current_version<'a>(&self, path: &'a str) -> &'a str {
        self.segment_re
            .captures(path)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .unwrap_or(FALLBACK_VERSION)
    }

    /// Rewrite the leading version segment of `path` with `new_version`.
    ///
    /// Paths without a version segment are returned unchanged, so navigating
    /// to the result reloads the same page.
    pub fn replace_version_segment(&self, path: &str, new_version: &str) -> String {
        self.segment_re
            .replace(path, NoExpand(&format!("/{}/", new_version)))
            .into_owned()
    }
}

impl Default for VersionSegment {
    fn default() -> Self {
        Self::new()
    }
}
