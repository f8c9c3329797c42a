//! The list of published documentation versions
//!
//! Decoded verbatim from the host's `versions.json`: a JSON array of version
//! identifier strings. Order is preserved as published; the widget enforces
//! no uniqueness or ordering invariant of its own.

use serde::Deserialize;

/// Ordered list of published version identifiers
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct VersionManifest {
    pub versions: Vec<String>,
}

impl VersionManifest {
    pub fn new(versions: Vec<String>) -> Self {
        Self { versions }
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_decodes_from_json_array_of_strings() {
        let manifest: VersionManifest =
            serde_json::from_str(r#"["latest", "v2.0", "v1.0"]"#).unwrap();

        assert_eq!(
            manifest.versions,
            vec!["latest".to_string(), "v2.0".to_string(), "v1.0".to_string()]
        );
    }

    #[test]
    fn manifest_preserves_published_order_verbatim() {
        // The source order is trusted, not normalized
        let manifest: VersionManifest =
            serde_json::from_str(r#"["v1.0", "v10.0", "v2.0"]"#).unwrap();

        assert_eq!(manifest.versions, vec!["v1.0", "v10.0", "v2.0"]);
    }

    #[test]
    fn empty_array_decodes_to_empty_manifest() {
        let manifest: VersionManifest = serde_json::from_str("[]").unwrap();
        assert!(manifest.is_empty());
    }

    #[test]
    fn non_array_shapes_fail_to_decode() {
        assert!(serde_json::from_str::<VersionManifest>(r#"{"versions": []}"#).is_err());
        assert!(serde_json::from_str::<VersionManifest>(r#""v1.0""#).is_err());
    }
}
