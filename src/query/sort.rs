//! Sort keys and comparators for query results

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::domain::Tool;

/// Ordering applied to a result list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Featured first, then by rating
    #[default]
    Relevance,
    /// Highest rating first
    Rating,
    /// Largest user count first
    Popularity,
    /// Most recent creation year first
    Newest,
    /// Alphabetical by name
    Name,
}

impl SortKey {
    /// Every key, in the order the sort selector lists them
    pub const ALL: [SortKey; 5] = [
        SortKey::Relevance,
        SortKey::Rating,
        SortKey::Popularity,
        SortKey::Newest,
        SortKey::Name,
    ];

    /// Parse from string representation
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "relevance" => Some(Self::Relevance),
            "rating" => Some(Self::Rating),
            "popularity" => Some(Self::Popularity),
            "newest" => Some(Self::Newest),
            "name" => Some(Self::Name),
            _ => None,
        }
    }

    /// Parse, treating anything unrecognized as the default ordering
    pub fn parse_or_default(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::Rating => "rating",
            Self::Popularity => "popularity",
            Self::Newest => "newest",
            Self::Name => "name",
        }
    }

    /// Label shown in the sort selector
    pub fn label(&self) -> &'static str {
        match self {
            Self::Relevance => "Relevance",
            Self::Rating => "Rating",
            Self::Popularity => "Popularity",
            Self::Newest => "Newest",
            Self::Name => "Name A-Z",
        }
    }

    /// Cycle to the next key
    pub fn next(self) -> Self {
        match self {
            Self::Relevance => Self::Rating,
            Self::Rating => Self::Popularity,
            Self::Popularity => Self::Newest,
            Self::Newest => Self::Name,
            Self::Name => Self::Relevance,
        }
    }

    /// Compare two tools under this key
    pub fn compare(&self, a: &Tool, b: &Tool) -> Ordering {
        match self {
            Self::Rating => by_rating_desc(a, b),
            Self::Popularity => b.user_count().cmp(&a.user_count()),
            Self::Newest => b.year().cmp(a.year()),
            Self::Name => by_name(a, b),
            Self::Relevance => b.featured.cmp(&a.featured).then_with(|| by_rating_desc(a, b)),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn by_rating_desc(a: &Tool, b: &Tool) -> Ordering {
    b.rating.total_cmp(&a.rating)
}

fn by_name(a: &Tool, b: &Tool) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.name.cmp(&b.name))
}

/// Sort in place; stable, so equal keys keep catalog order
pub fn sort_tools(tools: &mut [&Tool], key: SortKey) {
    tools.sort_by(|a, b| key.compare(a, b));
}
