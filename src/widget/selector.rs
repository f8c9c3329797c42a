//! Version selector initialization
//!
//! Runs once per page load, after the host's ready signal: fetch the
//! manifest, build the dropdown with the currently viewed version selected,
//! wire the navigation handler, and append the control to the menu bar.
//!
//! Every failure along the way is non-fatal. The surrounding documentation
//! page stays usable whether or not the selector appears, so a failed fetch,
//! an empty manifest, or a missing menu bar all end in the same quiet no-op
//! with a debug-level diagnostic.

use std::sync::Arc;

use tracing::debug;

use crate::config::WidgetConfig;
use crate::version::ident::VersionSegment;
use crate::version::source::VersionSource;
use crate::version::sources::http::HttpVersionSource;
use crate::widget::host::{ChangeHandler, HostPage};
use crate::widget::select::SelectControl;

/// Terminal outcome of a single initialization attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// Control built and appended to the menu bar
    Installed,
    /// Manifest fetched but listed no versions
    EmptyVersionList,
    /// Menu-bar container absent; control discarded
    MenuBarMissing,
    /// Manifest fetch or decode failed
    ManifestUnavailable,
}

/// The version-selector widget
pub struct VersionSelector<S> {
    source: S,
    host: Arc<dyn HostPage>,
    config: WidgetConfig,
    segment: VersionSegment,
}

impl<S: VersionSource> VersionSelector<S> {
    pub fn new(source: S, host: Arc<dyn HostPage>) -> Self {
        Self::with_config(source, host, WidgetConfig::default())
    }

    pub fn with_config(source: S, host: Arc<dyn HostPage>, config: WidgetConfig) -> Self {
        Self {
            source,
            host,
            config,
            segment: VersionSegment::new(),
        }
    }

    /// Run the widget: wait for the host's ready signal, then initialize.
    ///
    /// Invoked once per page load. There is no re-initialization path:
    /// switching versions is a full navigation, and the fresh page runs its
    /// own selector.
    pub async fn run(&self) -> InitOutcome {
        self.host.ready().await;
        self.initialize().await
    }

    /// Single initialization attempt. Never retries and never surfaces an
    /// error to the page; the outcome says why the control did or did not
    /// appear.
    pub async fn initialize(&self) -> InitOutcome {
        let manifest = match self.source.fetch_versions().await {
            Ok(manifest) => manifest,
            Err(e) => {
                debug!("Version selector not available: {}", e);
                return InitOutcome::ManifestUnavailable;
            }
        };

        if manifest.is_empty() {
            debug!("Version selector not available: manifest lists no versions");
            return InitOutcome::EmptyVersionList;
        }

        let path = self.host.current_path();
        let current_version = self.segment.derive_current_version(&path);

        let control = SelectControl::build(&self.config, &manifest, current_version);

        // Choosing a version rewrites the leading path segment and triggers a
        // full page load at the rewritten path.
        let host = Arc::clone(&self.host);
        let segment = self.segment.clone();
        let on_change: ChangeHandler = Arc::new(move |new_version| {
            let new_path = segment.replace_version_segment(&host.current_path(), new_version);
            host.navigate(&new_path);
        });

        if self
            .host
            .install_control(&self.config.menu_bar_selector, control, on_change)
        {
            InitOutcome::Installed
        } else {
            debug!("Version selector not available: menu bar container missing");
            InitOutcome::MenuBarMissing
        }
    }
}

impl VersionSelector<HttpVersionSource> {
    /// HTTP-backed selector fetching the manifest from `base_url` at the
    /// endpoint named by `config`.
    pub fn over_http(base_url: &str, host: Arc<dyn HostPage>, config: WidgetConfig) -> Self {
        let source = HttpVersionSource::with_endpoint(base_url, &config.endpoint);
        Self::with_config(source, host, config)
    }
}
