//! Catalog store
//!
//! The catalog is loaded once at startup, validated, and then only read.
//! A built-in sample catalog is compiled into the binary; an alternate
//! YAML document with the same shape can be loaded from disk.

mod store;

pub use store::Catalog;

/// The embedded sample catalog document
pub const BUILTIN_CATALOG: &str = include_str!("builtin.yml");
