//! Widget layer: the selection control and its page lifecycle
//!
//! # Modules
//!
//! - [`select`]: pure construction of the selection control from a manifest
//! - [`host`]: capability trait the embedding page implements
//! - [`selector`]: the version selector initialization sequence

pub mod host;
pub mod select;
pub mod selector;
