//! HTTP manifest source
//!
//! Fetches `versions.json` from the documentation host. Single attempt, no
//! retry, no request timeout beyond the client default.

use tracing::warn;

use crate::config::VERSIONS_ENDPOINT;
use crate::version::error::ManifestError;
use crate::version::manifest::VersionManifest;
use crate::version::source::VersionSource;

/// Manifest source backed by an HTTP GET against the documentation host
pub struct HttpVersionSource {
    client: reqwest::Client,
    base_url: String,
    endpoint: String,
}

impl HttpVersionSource {
    /// Creates a new HttpVersionSource fetching the well-known `/versions.json`
    pub fn new(base_url: &str) -> Self {
        Self::with_endpoint(base_url, VERSIONS_ENDPOINT)
    }

    /// Creates a new HttpVersionSource with a custom manifest endpoint
    pub fn with_endpoint(base_url: &str, endpoint: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("mdbook-version-select")
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
            endpoint: endpoint.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl VersionSource for HttpVersionSource {
    async fn fetch_versions(&self) -> Result<VersionManifest, ManifestError> {
        let url = format!("{}{}", self.base_url, self.endpoint);

        let response = self.client.get(&url).send().await?;

        let status = response.status();

        if !status.is_success() {
            warn!("version manifest returned status {}: {}", status, url);
            return Err(ManifestError::UnexpectedStatus(status));
        }

        let body = response.text().await?;

        // Expected shape: a JSON array of version identifier strings. Any
        // other shape collapses into the same non-fatal error as a bad fetch.
        let manifest: VersionManifest = serde_json::from_str(&body).map_err(|e| {
            warn!("Failed to parse version manifest: {}", e);
            ManifestError::InvalidResponse(e.to_string())
        })?;

        Ok(manifest)
    }
}
