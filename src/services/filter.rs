//! Filter and sort pipeline for the browse view.

use crate::models::{SearchFilters, SortBy, Tool};
use std::cmp::Reverse;

/// Applies `filters` to `tools` and returns a fresh ordered list.
///
/// Steps run in order:
/// 1. non-empty search: case-insensitive substring over name, description, or any tag
/// 2. category: exact label match
/// 3. sort: stable, descending on the chosen key; unset keeps collection order
///
/// The input slice is never reordered.
pub fn apply_filters(tools: &[Tool], filters: &SearchFilters) -> Vec<Tool> {
    let needle = filters.search_needle();

    let mut result: Vec<Tool> = tools
        .iter()
        .filter(|tool| needle.as_deref().map_or(true, |n| tool.matches_search(n)))
        .filter(|tool| {
            filters
                .category
                .as_deref()
                .map_or(true, |c| tool.category.label() == c)
        })
        .cloned()
        .collect();

    if let Some(sort_by) = filters.sort_by {
        sort_tools(&mut result, sort_by);
    }

    result
}

/// Stable descending sort on the given key.
pub fn sort_tools(tools: &mut [Tool], sort_by: SortBy) {
    match sort_by {
        SortBy::Newest => tools.sort_by_key(|t| Reverse(t.created_at)),
        SortBy::Likes => tools.sort_by_key(|t| Reverse(t.likes)),
        SortBy::Views => tools.sort_by_key(|t| Reverse(t.views)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seed_tools;

    fn ids(tools: &[Tool]) -> Vec<&str> {
        tools.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_no_filters_keeps_order() {
        let tools = seed_tools().unwrap();
        let result = apply_filters(&tools, &SearchFilters::all());
        assert_eq!(ids(&result), ["1", "2", "3", "4", "5", "6", "7", "8"]);
    }

    #[test]
    fn test_search_matches_name_description_and_tags() {
        let tools = seed_tools().unwrap();

        // "react" hits names, descriptions, and tags
        let result = apply_filters(&tools, &SearchFilters::all().with_search("REACT"));
        assert_eq!(ids(&result), ["1", "4", "7"]);

        // "monorepo" only appears as a tag
        let result = apply_filters(&tools, &SearchFilters::all().with_search("monorepo"));
        assert_eq!(ids(&result), ["8"]);

        // "prototyping" only appears in a description
        let result = apply_filters(&tools, &SearchFilters::all().with_search("prototyping"));
        assert_eq!(ids(&result), ["3"]);
    }

    #[test]
    fn test_empty_search_is_ignored() {
        let tools = seed_tools().unwrap();
        let result = apply_filters(&tools, &SearchFilters::all().with_search(""));
        assert_eq!(result.len(), tools.len());
    }

    #[test]
    fn test_category_exact_match() {
        let tools = seed_tools().unwrap();
        let result = apply_filters(&tools, &SearchFilters::all().with_category("React Tools"));
        assert_eq!(ids(&result), ["1"]);

        // Labels are matched exactly, not case-insensitively
        let result = apply_filters(&tools, &SearchFilters::all().with_category("react tools"));
        assert!(result.is_empty());
    }

    #[test]
    fn test_unknown_category_filters_to_empty() {
        let tools = seed_tools().unwrap();
        let result = apply_filters(&tools, &SearchFilters::all().with_category("Games"));
        assert!(result.is_empty());
    }

    #[test]
    fn test_sort_by_likes() {
        let tools = seed_tools().unwrap();
        let result = apply_filters(&tools, &SearchFilters::all().with_sort(SortBy::Likes));
        assert_eq!(ids(&result), ["6", "4", "1", "5", "3", "8", "2", "7"]);
        assert!(result.windows(2).all(|w| w[0].likes >= w[1].likes));
    }

    #[test]
    fn test_sort_by_views() {
        let tools = seed_tools().unwrap();
        let result = apply_filters(&tools, &SearchFilters::all().with_sort(SortBy::Views));
        assert_eq!(result[0].id, "6");
        assert!(result.windows(2).all(|w| w[0].views >= w[1].views));
    }

    #[test]
    fn test_sort_by_newest() {
        let tools = seed_tools().unwrap();
        let result = apply_filters(&tools, &SearchFilters::all().with_sort(SortBy::Newest));
        assert_eq!(ids(&result), ["7", "8", "1", "5", "2", "3", "4", "6"]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let mut tools = seed_tools().unwrap();
        for tool in &mut tools {
            tool.likes = 1;
        }
        let result = apply_filters(&tools, &SearchFilters::all().with_sort(SortBy::Likes));
        assert_eq!(ids(&result), ids(&tools));
    }

    #[test]
    fn test_search_category_and_sort_combined() {
        let tools = seed_tools().unwrap();
        let filters = SearchFilters::all()
            .with_search("react")
            .with_category("UI Kits")
            .with_sort(SortBy::Likes);
        let result = apply_filters(&tools, &filters);
        assert_eq!(ids(&result), ["4"]);
    }

    #[test]
    fn test_input_not_mutated() {
        let tools = seed_tools().unwrap();
        let before = tools.clone();
        let _ = apply_filters(&tools, &SearchFilters::all().with_sort(SortBy::Views));
        assert_eq!(tools, before);
    }
}
