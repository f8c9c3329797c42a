//! Version layer: identifying the viewed version and fetching the published list
//!
//! # Modules
//!
//! - [`ident`]: version-segment detection and substitution in URL paths
//! - [`manifest`]: the list of published versions decoded from `versions.json`
//! - [`source`]: trait for fetching the manifest from the documentation host
//! - [`sources`]: concrete manifest sources (HTTP)
//! - [`error`]: error types for manifest fetching

pub mod error;
pub mod ident;
pub mod manifest;
pub mod source;
pub mod sources;
