//! Query engine
//!
//! Pure functions over the catalog: filter by search text and facets, then
//! order by a sort key. Predicates are ANDed across facets; within the tag
//! facet any selected tag matches. There are no error conditions; an empty
//! result is a valid answer.

mod filter;
mod sort;

pub use filter::{Chip, FilterState};
pub use sort::{SortKey, sort_tools};

use log::debug;

use crate::catalog::Catalog;
use crate::domain::{Pricing, Tool};

/// Run a query described by a filter state
pub fn search<'a>(catalog: &'a Catalog, state: &FilterState) -> Vec<&'a Tool> {
    let needle = state.search.to_lowercase();
    let mut results: Vec<&Tool> = catalog
        .tools()
        .iter()
        .filter(|tool| state.matches_with_needle(tool, &needle))
        .collect();
    sort_tools(&mut results, state.sort);
    debug!(
        "search '{}' category={:?} pricing={:?} tags={:?} sort={} -> {} results",
        state.search,
        state.category,
        state.pricing,
        state.tags,
        state.sort,
        results.len()
    );
    results
}

/// Run a query from loose arguments
pub fn query<'a>(
    catalog: &'a Catalog,
    text: &str,
    category: Option<&str>,
    pricing: &[Pricing],
    tags: &[String],
    sort: SortKey,
) -> Vec<&'a Tool> {
    let state = FilterState {
        search: text.to_string(),
        category: category.filter(|c| !c.is_empty()).map(str::to_string),
        pricing: pricing.to_vec(),
        tags: tags.to_vec(),
        sort,
    };
    search(catalog, &state)
}
