//! Domain types for toolhub
//!
//! This module contains the catalog records:
//! - Tool: one entry in the directory
//! - Category: a grouping of tools shown as a tile on the home screen
//! - Pricing: the fixed pricing tiers a tool can declare

pub mod category;
pub mod pricing;
pub mod tool;

pub use category::Category;
pub use pricing::Pricing;
pub use tool::{LinkKind, Tool};
