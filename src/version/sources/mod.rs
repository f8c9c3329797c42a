//! Concrete manifest sources

pub mod http;
