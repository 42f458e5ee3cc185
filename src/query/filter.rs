//! Filter state owned by the presentation layer
//!
//! A `FilterState` holds every facet the user can set. It is created fresh
//! for each session and reset when the user navigates back to the home view.

use serde::{Deserialize, Serialize};

use crate::domain::{Pricing, Tool};

use super::sort::SortKey;

/// Current search text and facet selections
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    /// Free-text search, matched case-insensitively
    pub search: String,
    /// Category id, if one is selected
    pub category: Option<String>,
    /// Selected pricing tiers, in selection order
    pub pricing: Vec<Pricing>,
    /// Selected tags, in selection order
    pub tags: Vec<String>,
    pub sort: SortKey,
}

/// One removable marker for an active filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chip {
    Category(String),
    Pricing(Pricing),
    Tag(String),
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_pricing(mut self, pricing: Pricing) -> Self {
        if !self.pricing.contains(&pricing) {
            self.pricing.push(pricing);
        }
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Select a category, or clear it with `None`
    pub fn set_category(&mut self, category: Option<String>) {
        self.category = category.filter(|c| !c.is_empty());
    }

    /// Add the tier if absent, remove it if present
    pub fn toggle_pricing(&mut self, pricing: Pricing) {
        if let Some(pos) = self.pricing.iter().position(|p| *p == pricing) {
            self.pricing.remove(pos);
        } else {
            self.pricing.push(pricing);
        }
    }

    /// Add the tag if absent, remove it if present
    pub fn toggle_tag(&mut self, tag: &str) {
        if let Some(pos) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(pos);
        } else {
            self.tags.push(tag.to_string());
        }
    }

    /// Clear the facets and sort; the search text is kept
    pub fn clear_filters(&mut self) {
        self.category = None;
        self.pricing.clear();
        self.tags.clear();
        self.sort = SortKey::Relevance;
    }

    /// Clear the search text and the facets, keeping the sort
    pub fn clear_search_and_facets(&mut self) {
        self.search.clear();
        self.category = None;
        self.pricing.clear();
        self.tags.clear();
    }

    /// Back to a fresh session
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when any predicate restricts the result
    pub fn is_filtered(&self) -> bool {
        !self.search.is_empty() || self.category.is_some() || !self.pricing.is_empty() || !self.tags.is_empty()
    }

    /// Count shown on the filter toggle badge
    pub fn active_filter_count(&self) -> usize {
        usize::from(self.category.is_some())
            + self.pricing.len()
            + self.tags.len()
            + usize::from(self.sort != SortKey::Relevance)
    }

    /// Active facets as removable chips: category, then pricing, then tags
    pub fn chips(&self) -> Vec<Chip> {
        let mut chips = Vec::with_capacity(1 + self.pricing.len() + self.tags.len());
        if let Some(category) = &self.category {
            chips.push(Chip::Category(category.clone()));
        }
        chips.extend(self.pricing.iter().copied().map(Chip::Pricing));
        chips.extend(self.tags.iter().cloned().map(Chip::Tag));
        chips
    }

    /// Remove the facet a chip stands for
    pub fn remove_chip(&mut self, chip: &Chip) {
        match chip {
            Chip::Category(_) => self.category = None,
            Chip::Pricing(p) => self.pricing.retain(|x| x != p),
            Chip::Tag(t) => self.tags.retain(|x| x != t),
        }
    }

    /// Check a tool against every active predicate
    pub fn matches(&self, tool: &Tool) -> bool {
        let needle = self.search.to_lowercase();
        self.matches_with_needle(tool, &needle)
    }

    pub(crate) fn matches_with_needle(&self, tool: &Tool, needle: &str) -> bool {
        if !needle.is_empty() && !tool.matches_text(needle) {
            return false;
        }
        if let Some(category) = &self.category
            && tool.category != *category
        {
            return false;
        }
        if !self.pricing.is_empty() && !self.pricing.contains(&tool.pricing) {
            return false;
        }
        if !self.tags.is_empty() && !tool.has_any_tag(&self.tags) {
            return false;
        }
        true
    }
}
