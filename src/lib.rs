//! Toolhub - a terminal directory of AI tools
//!
//! Loads a catalog of tools and categories, answers search / filter / sort
//! queries over it, and accepts new tool submissions. The interactive
//! browser in `tui` and the command-line surface both sit on top of the
//! same query engine.

pub mod browser;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod id;
pub mod query;
pub mod submission;
pub mod tui;

pub use error::{HubError, Result};
