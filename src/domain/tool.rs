//! Tool record and related types
//!
//! A Tool is one entry in the directory. Records are loaded once from the
//! catalog document and never mutated afterwards.

use super::pricing::Pricing;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Year shown in the detail view when a tool has no creation year
pub const DEFAULT_YEAR: &str = "2024";

/// A single AI tool in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    //=== Identity ===
    pub id: String,
    pub name: String,

    /// One-line summary shown on cards and matched by search
    pub description: String,

    /// Id of the owning category
    pub category: String,

    #[serde(default)]
    pub tags: Vec<String>,

    pub website: String,
    pub pricing: Pricing,
    pub rating: f64,

    /// Display string for the user count, e.g. "100M+"
    pub users: String,

    //=== Optional detail ===
    #[serde(default)]
    pub featured: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub use_cases: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,

    /// Creation year as a string, e.g. "2023"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// External links a tool may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Website,
    Github,
    Docs,
}

impl LinkKind {
    /// Parse from string representation
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "website" | "site" | "web" => Some(Self::Website),
            "github" | "gh" | "source" => Some(Self::Github),
            "docs" | "documentation" => Some(Self::Docs),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Website => "Visit Website",
            Self::Github => "GitHub",
            Self::Docs => "Documentation",
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Website => "website",
            Self::Github => "github",
            Self::Docs => "docs",
        };
        f.write_str(name)
    }
}

impl Tool {
    /// Create a tool with the required fields; optional detail starts empty
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        pricing: Pricing,
        rating: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            category: category.into(),
            tags: Vec::new(),
            website: String::new(),
            pricing,
            rating,
            users: String::new(),
            featured: false,
            full_description: None,
            features: Vec::new(),
            use_cases: Vec::new(),
            github: None,
            documentation: None,
            created_at: None,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_users(mut self, users: impl Into<String>) -> Self {
        self.users = users.into();
        self
    }

    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = website.into();
        self
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.created_at = Some(year.into());
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    /// Case-insensitive substring match against name, description or any tag.
    ///
    /// `needle` must already be lowercased.
    pub fn matches_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
    }

    /// True if the tool carries at least one of `tags` (exact match)
    pub fn has_any_tag<'a, I>(&self, tags: I) -> bool
    where
        I: IntoIterator<Item = &'a String>,
    {
        tags.into_iter().any(|wanted| self.tags.contains(wanted))
    }

    /// Numeric value embedded in the user-count string.
    ///
    /// All ASCII digits are concatenated, so "1.5M+" reads as 15 and
    /// "500K+" as 500. A string without digits counts as zero.
    pub fn user_count(&self) -> u64 {
        self.users
            .chars()
            .filter_map(|c| c.to_digit(10))
            .fold(0u64, |acc, d| acc.saturating_mul(10).saturating_add(d as u64))
    }

    /// Creation year, or the empty string when unknown
    pub fn year(&self) -> &str {
        self.created_at.as_deref().unwrap_or("")
    }

    /// Year shown to users; unknown years read as `DEFAULT_YEAR`
    pub fn display_year(&self) -> &str {
        match self.year() {
            "" => DEFAULT_YEAR,
            year => year,
        }
    }

    /// Long description when present, otherwise the short one
    pub fn long_description(&self) -> &str {
        self.full_description.as_deref().unwrap_or(&self.description)
    }

    /// URL for the given link kind, if the tool has one
    pub fn link(&self, kind: LinkKind) -> Option<&str> {
        match kind {
            LinkKind::Website => Some(self.website.as_str()).filter(|url| !url.is_empty()),
            LinkKind::Github => self.github.as_deref(),
            LinkKind::Docs => self.documentation.as_deref(),
        }
    }

    /// Every link the tool carries, website first
    pub fn links(&self) -> Vec<(LinkKind, &str)> {
        [LinkKind::Website, LinkKind::Github, LinkKind::Docs]
            .into_iter()
            .filter_map(|kind| self.link(kind).map(|url| (kind, url)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tool {
        Tool::new("1", "ChatGPT", "Advanced conversational AI assistant", "chatbots", Pricing::Freemium, 4.8)
            .with_tags(["conversation", "Writing"])
            .with_users("100M+")
            .with_website("https://chat.openai.com")
    }

    #[test]
    fn test_matches_text_on_name_description_and_tags() {
        let tool = sample();
        assert!(tool.matches_text("chat"));
        assert!(tool.matches_text("assistant"));
        assert!(tool.matches_text("writing"));
        assert!(!tool.matches_text("image"));
    }

    #[test]
    fn test_matches_text_ignores_full_description() {
        let mut tool = sample();
        tool.full_description = Some("Generates images too".to_string());
        assert!(!tool.matches_text("images"));
    }

    #[test]
    fn test_has_any_tag_is_exact() {
        let tool = sample();
        let wanted = vec!["conversation".to_string()];
        assert!(tool.has_any_tag(&wanted));
        let wanted = vec!["convers".to_string(), "art".to_string()];
        assert!(!tool.has_any_tag(&wanted));
    }

    #[test]
    fn test_user_count_concatenates_digits() {
        assert_eq!(sample().user_count(), 100);
        assert_eq!(sample().with_users("500K+").user_count(), 500);
        assert_eq!(sample().with_users("1.5M").user_count(), 15);
        assert_eq!(sample().with_users("lots").user_count(), 0);
        assert_eq!(sample().with_users("").user_count(), 0);
    }

    #[test]
    fn test_year_defaults_to_empty() {
        assert_eq!(sample().year(), "");
        assert_eq!(sample().with_year("2022").year(), "2022");
    }

    #[test]
    fn test_display_year_falls_back() {
        assert_eq!(sample().display_year(), DEFAULT_YEAR);
        assert_eq!(sample().with_year("2022").display_year(), "2022");
    }

    #[test]
    fn test_long_description_falls_back() {
        let mut tool = sample();
        assert_eq!(tool.long_description(), "Advanced conversational AI assistant");
        tool.full_description = Some("Longer".to_string());
        assert_eq!(tool.long_description(), "Longer");
    }

    #[test]
    fn test_links_in_order() {
        let mut tool = sample();
        tool.documentation = Some("https://docs.example".to_string());
        let links = tool.links();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].0, LinkKind::Website);
        assert_eq!(links[1], (LinkKind::Docs, "https://docs.example"));
        assert!(tool.link(LinkKind::Github).is_none());
    }

    #[test]
    fn test_link_kind_parse() {
        assert_eq!(LinkKind::parse("GitHub"), Some(LinkKind::Github));
        assert_eq!(LinkKind::parse("documentation"), Some(LinkKind::Docs));
        assert_eq!(LinkKind::parse("website"), Some(LinkKind::Website));
        assert_eq!(LinkKind::parse("ftp"), None);
    }

    #[test]
    fn test_deserialize_minimal_yaml() {
        let yaml = r#"
id: "9"
name: Runway ML
description: AI-powered creative suite
category: video-editing
website: https://runwayml.com
pricing: freemium
rating: 4.6
users: 1M+
"#;
        let tool: Tool = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(tool.name, "Runway ML");
        assert!(tool.tags.is_empty());
        assert!(!tool.featured);
        assert!(tool.created_at.is_none());
    }
}
