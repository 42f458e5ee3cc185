//! CLI module for toolhub - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for listing, searching
//! and submitting tools, and the interactive browser as the default.

pub mod commands;

pub use commands::Cli;
