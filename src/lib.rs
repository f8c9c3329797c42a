//! Version selector widget for mdBook documentation sites
//!
//! Published documentation lives under version-prefixed paths (`/v1.2.3/...`,
//! `/latest/...`) next to a `/versions.json` manifest listing every published
//! version. On page load the widget derives the current version from the URL
//! path, fetches the manifest, and appends a dropdown to the book's menu bar
//! that navigates to the same page under the chosen version.
//!
//! The browser ambient environment (current location, document readiness, the
//! menu-bar container) is injected through the [`widget::host::HostPage`]
//! trait, keeping version derivation and option construction pure and
//! testable without a real page.
//!
//! # Modules
//!
//! - [`config`]: widget constants and configuration defaults
//! - [`version`]: version-segment parsing and manifest fetching
//! - [`widget`]: the selection control and the initialization sequence

pub mod config;
pub mod version;
pub mod widget;
