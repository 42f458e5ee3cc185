//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - categories / tags / featured: list catalog contents
//! - search: run the query engine
//! - show / open: inspect one tool or open its links
//! - submit: send a tool through the submission workflow

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Toolhub - browse and search a directory of AI tools
#[derive(Parser, Debug)]
#[command(name = "toolhub")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Catalog file to load instead of the configured or built-in one
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Subcommand to execute; the interactive browser when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List categories with their tool counts
    Categories,

    /// List every tag in the catalog
    Tags,

    /// List featured tools
    Featured,

    /// Search and filter the catalog
    Search {
        /// Text matched against name, description and tags
        query: Option<String>,

        /// Restrict to one category id
        #[arg(short = 'C', long)]
        category: Option<String>,

        /// Pricing tier (free, freemium, paid); repeatable
        #[arg(short, long)]
        pricing: Vec<String>,

        /// Tag; a tool matches if it has any of the given tags
        #[arg(short, long = "tag")]
        tag: Vec<String>,

        /// Sort order (relevance, rating, popularity, newest, name)
        #[arg(short, long, default_value = "relevance")]
        sort: String,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show everything about one tool
    Show {
        /// Tool id
        id: String,

        /// Print the tool as JSON
        #[arg(long)]
        json: bool,
    },

    /// Open a tool's link in the browser
    Open {
        /// Tool id
        id: String,

        /// Which link to open (website, github, docs)
        #[arg(short, long, default_value = "website")]
        target: String,
    },

    /// Submit a new tool
    Submit(SubmitArgs),
}

/// Fields of a tool submission
#[derive(Args, Debug, Clone, Default)]
pub struct SubmitArgs {
    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub description: String,

    /// Category id
    #[arg(long, default_value = "")]
    pub category: String,

    #[arg(long, default_value = "")]
    pub website: String,

    /// Pricing tier (free, freemium, paid)
    #[arg(long, default_value = "")]
    pub pricing: String,

    /// Tag; repeatable
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    #[arg(long)]
    pub submitter_name: Option<String>,

    #[arg(long)]
    pub submitter_email: Option<String>,
}
