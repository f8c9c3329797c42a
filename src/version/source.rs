//! Source trait for fetching the version manifest

#[cfg(test)]
use mockall::automock;

use crate::version::error::ManifestError;
use crate::version::manifest::VersionManifest;

/// Trait for fetching the list of published versions from the documentation host
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait VersionSource: Send + Sync {
    /// Fetches the version manifest
    ///
    /// Single attempt, no retry: the widget either gets a manifest or stays
    /// off the page.
    ///
    /// # Returns
    /// * `Ok(VersionManifest)` - Published versions in manifest order
    /// * `Err(ManifestError)` - If the fetch or the decode fails
    async fn fetch_versions(&self) -> Result<VersionManifest, ManifestError>;
}
