//! Query engine integration tests
//!
//! Exercises filtering and sorting over the built-in catalog and over
//! catalogs loaded from files.

use std::io::Write;

use tempfile::NamedTempFile;
use toolhub::catalog::Catalog;
use toolhub::domain::Pricing;
use toolhub::error::{HubError, Result};
use toolhub::query::{self, FilterState, SortKey};

fn names(tools: &[&toolhub::domain::Tool]) -> Vec<String> {
    tools.iter().map(|t| t.name.clone()).collect()
}

/// Filter configurations covering each facet alone and in combination
fn filter_grid() -> Vec<FilterState> {
    let mut grid = Vec::new();
    for search in ["", "ai", "ART", "zzz"] {
        for category in [None, Some("image-generation"), Some("chatbots")] {
            for pricing in [vec![], vec![Pricing::Free], vec![Pricing::Freemium, Pricing::Paid]] {
                for tags in [vec![], vec!["creative".to_string(), "coding".to_string()]] {
                    for sort in SortKey::ALL {
                        grid.push(FilterState {
                            search: search.to_string(),
                            category: category.map(str::to_string),
                            pricing: pricing.clone(),
                            tags: tags.clone(),
                            sort,
                        });
                    }
                }
            }
        }
    }
    grid
}

#[test]
fn test_results_are_catalog_subset_and_satisfy_every_facet() -> Result<()> {
    let catalog = Catalog::builtin()?;
    for state in filter_grid() {
        let results = query::search(&catalog, &state);
        let needle = state.search.to_lowercase();
        for tool in &results {
            assert!(catalog.tool(&tool.id).is_some());
            assert!(tool.matches_text(&needle), "{} fails text '{}'", tool.name, state.search);
            if let Some(category) = &state.category {
                assert_eq!(&tool.category, category);
            }
            if !state.pricing.is_empty() {
                assert!(state.pricing.contains(&tool.pricing));
            }
            if !state.tags.is_empty() {
                assert!(tool.has_any_tag(&state.tags));
            }
        }
        let matching = catalog.tools().iter().filter(|t| state.matches(t)).count();
        assert_eq!(results.len(), matching);
    }
    Ok(())
}

#[test]
fn test_search_is_case_insensitive() -> Result<()> {
    let catalog = Catalog::builtin()?;
    for (lower, upper) in [("chat", "CHAT"), ("art", "Art"), ("openai", "OpenAI")] {
        let a = query::query(&catalog, lower, None, &[], &[], SortKey::Name);
        let b = query::query(&catalog, upper, None, &[], &[], SortKey::Name);
        assert_eq!(names(&a), names(&b));
        assert!(!a.is_empty());
    }
    Ok(())
}

#[test]
fn test_chat_example() -> Result<()> {
    let catalog = Catalog::builtin()?;
    let results = query::query(&catalog, "chat", None, &[], &[], SortKey::Relevance);
    assert_eq!(names(&results), vec!["ChatGPT"]);
    assert!(results[0].featured);
    Ok(())
}

#[test]
fn test_full_description_is_not_searched() -> Result<()> {
    let catalog = Catalog::builtin()?;
    // Only appears in long descriptions
    let results = query::query(&catalog, "extraordinarily", None, &[], &[], SortKey::Relevance);
    assert!(results.is_empty());
    Ok(())
}

#[test]
fn test_empty_pricing_selection_is_unrestricted() -> Result<()> {
    let catalog = Catalog::builtin()?;
    let all = query::query(&catalog, "", None, &[], &[], SortKey::Relevance);
    assert_eq!(all.len(), catalog.len());

    let every_tier = query::query(&catalog, "", None, &Pricing::ALL, &[], SortKey::Relevance);
    assert_eq!(every_tier.len(), catalog.len());
    Ok(())
}

#[test]
fn test_sort_orders() -> Result<()> {
    let catalog = Catalog::builtin()?;

    let by_rating = query::query(&catalog, "", None, &[], &[], SortKey::Rating);
    assert!(by_rating.windows(2).all(|w| w[0].rating >= w[1].rating));

    let by_name = query::query(&catalog, "", None, &[], &[], SortKey::Name);
    assert!(
        by_name
            .windows(2)
            .all(|w| w[0].name.to_lowercase() <= w[1].name.to_lowercase())
    );

    let by_relevance = query::query(&catalog, "", None, &[], &[], SortKey::Relevance);
    let first_plain = by_relevance.iter().position(|t| !t.featured).unwrap();
    assert!(by_relevance[first_plain..].iter().all(|t| !t.featured));
    assert_eq!(first_plain, catalog.featured().len());

    let by_year = query::query(&catalog, "", None, &[], &[], SortKey::Newest);
    assert!(by_year.windows(2).all(|w| w[0].year() >= w[1].year()));
    assert_eq!(by_year.last().unwrap().name, "Runway ML");
    Ok(())
}

#[test]
fn test_popularity_reads_digits_only() -> Result<()> {
    let catalog = Catalog::builtin()?;
    let results = query::query(&catalog, "", None, &[], &[], SortKey::Popularity);
    // "500K+" reads as 500, ahead of "100M+" at 100
    assert_eq!(results[0].name, "Cursor");
    assert!(results.windows(2).all(|w| w[0].user_count() >= w[1].user_count()));
    Ok(())
}

#[test]
fn test_unknown_sort_falls_back_to_relevance() -> Result<()> {
    let catalog = Catalog::builtin()?;
    let fallback = query::query(&catalog, "", None, &[], &[], SortKey::parse_or_default("shuffle"));
    let relevance = query::query(&catalog, "", None, &[], &[], SortKey::Relevance);
    assert_eq!(names(&fallback), names(&relevance));
    Ok(())
}

#[test]
fn test_combined_facets() -> Result<()> {
    let catalog = Catalog::builtin()?;
    let results = query::query(
        &catalog,
        "",
        Some("image-generation"),
        &[Pricing::Paid],
        &[],
        SortKey::Rating,
    );
    assert_eq!(names(&results), vec!["Midjourney", "DALL-E 3"]);

    let results = query::query(
        &catalog,
        "",
        None,
        &[],
        &["music".to_string(), "video".to_string()],
        SortKey::Name,
    );
    assert_eq!(names(&results), vec!["Runway ML", "Suno"]);
    Ok(())
}

#[test]
fn test_catalog_from_file_and_query() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(
        file,
        r#"
categories:
  - id: audio
    name: Audio
    description: Sound tools
tools:
  - id: "a1"
    name: beta voice
    description: Voice cloning
    category: audio
    tags: [voice]
    website: https://beta.example
    pricing: paid
    rating: 4.0
    users: 1K+
  - id: "a2"
    name: Alpha Voice
    description: Speech synthesis
    category: audio
    tags: [voice, tts]
    website: https://alpha.example
    pricing: free
    rating: 4.0
    users: 2K+
    featured: true
"#
    )?;

    let catalog = Catalog::from_file(file.path())?;
    let results = query::query(&catalog, "VOICE", None, &[], &[], SortKey::Name);
    assert_eq!(names(&results), vec!["Alpha Voice", "beta voice"]);

    let relevance = query::query(&catalog, "", None, &[], &[], SortKey::Relevance);
    assert_eq!(relevance[0].id, "a2");
    Ok(())
}

#[test]
fn test_catalog_file_with_unknown_category_is_rejected() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(
        file,
        r#"
categories: []
tools:
  - id: "x"
    name: Orphan
    description: No home
    category: nowhere
    website: https://x.example
    pricing: free
    rating: 1.0
    users: "0"
"#
    )?;
    let err = Catalog::from_file(file.path()).unwrap_err();
    assert!(matches!(err, HubError::UnknownCategory { .. }));
    Ok(())
}
