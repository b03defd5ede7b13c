//! List Pipeline
//!
//! Pure derivation of the visible recipe subset from the full fetched set
//! and the current view state. Both list screens call [`derive`]; the
//! result is recomputed on every state change rather than maintained
//! incrementally.

use chrono::DateTime;

use crate::recipe::Recipe;

/// Ordering applied after filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Keep the store's order
    #[default]
    Unsorted,
    TitleAsc,
    TitleDesc,
    NewestFirst,
}

impl SortMode {
    /// Stable token used by the sort dropdowns
    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Unsorted => "none",
            SortMode::TitleAsc => "asc",
            SortMode::TitleDesc => "desc",
            SortMode::NewestFirst => "newest",
        }
    }

    /// Parse a dropdown token; anything unknown means no sorting
    pub fn from_str(value: &str) -> Self {
        match value {
            "asc" => SortMode::TitleAsc,
            "desc" => SortMode::TitleDesc,
            "newest" => SortMode::NewestFirst,
            _ => SortMode::Unsorted,
        }
    }
}

/// Page size used when a screen offers no selector
pub const DEFAULT_PAGE_SIZE: usize = 9;

/// Choices offered by the page-size selector
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [6, 9, 12];

/// Ephemeral filter/sort/page selection owned by a list screen.
///
/// The setters own the page-reset rule: any change to search text, tag,
/// sort mode, or page size snaps back to page 1. Screens must go through
/// them instead of writing fields directly.
#[derive(Debug, Clone, PartialEq)]
pub struct ListViewState {
    pub search: String,
    pub selected_tag: Option<String>,
    pub sort: SortMode,
    pub page_size: usize,
    /// 1-based
    pub page: usize,
}

impl Default for ListViewState {
    fn default() -> Self {
        Self {
            search: String::new(),
            selected_tag: None,
            sort: SortMode::default(),
            page_size: DEFAULT_PAGE_SIZE,
            page: 1,
        }
    }
}

impl ListViewState {
    pub fn set_search(&mut self, search: String) {
        self.search = search;
        self.page = 1;
    }

    pub fn set_selected_tag(&mut self, tag: Option<String>) {
        self.selected_tag = tag;
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        self.sort = sort;
        self.page = 1;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }
}

/// Union of tags across all records, first-seen order preserved
pub fn tag_universe(records: &[Recipe]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for recipe in records {
        for tag in &recipe.tags {
            if !tags.iter().any(|t| t == tag) {
                tags.push(tag.clone());
            }
        }
    }
    tags
}

/// Keep records whose title contains `search` case-insensitively (empty
/// search passes everything) and whose tag list contains `selected_tag`
/// exactly. Input order is preserved.
pub fn filter(records: &[Recipe], search: &str, selected_tag: Option<&str>) -> Vec<Recipe> {
    let needle = search.to_lowercase();
    records
        .iter()
        .filter(|recipe| {
            let title_hit = needle.is_empty() || recipe.title.to_lowercase().contains(&needle);
            let tag_hit = match selected_tag {
                Some(tag) => recipe.tags.iter().any(|t| t == tag),
                None => true,
            };
            title_hit && tag_hit
        })
        .cloned()
        .collect()
}

// Missing or unparsable timestamps order as the earliest possible moment.
fn created_at_key(recipe: &Recipe) -> i64 {
    recipe
        .created_at
        .as_deref()
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|ts| ts.timestamp_micros())
        .unwrap_or(i64::MIN)
}

/// Apply the sort mode. All branches are stable: equal keys keep their
/// input order.
pub fn sort(mut records: Vec<Recipe>, mode: SortMode) -> Vec<Recipe> {
    match mode {
        SortMode::Unsorted => {}
        SortMode::TitleAsc => records.sort_by_key(|r| r.title.to_lowercase()),
        SortMode::TitleDesc => {
            records.sort_by(|a, b| b.title.to_lowercase().cmp(&a.title.to_lowercase()))
        }
        SortMode::NewestFirst => records.sort_by(|a, b| created_at_key(b).cmp(&created_at_key(a))),
    }
    records
}

/// Slice one 1-based page out of the already sorted set.
///
/// Returns the page plus the total page count. A page past the end yields
/// an empty slice, never an error; a page size of 0 yields no pages.
pub fn paginate(records: &[Recipe], page_size: usize, page: usize) -> (Vec<Recipe>, usize) {
    if page_size == 0 {
        return (Vec::new(), 0);
    }
    let total_pages = records.len().div_ceil(page_size);
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= records.len() {
        return (Vec::new(), total_pages);
    }
    let end = (start + page_size).min(records.len());
    (records[start..end].to_vec(), total_pages)
}

/// The single pipeline entry point: full record set and view state in,
/// visible page and total page count out.
pub fn derive(records: &[Recipe], state: &ListViewState) -> (Vec<Recipe>, usize) {
    let filtered = filter(records, &state.search, state.selected_tag.as_deref());
    let sorted = sort(filtered, state.sort);
    paginate(&sorted, state.page_size, state.page)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_recipe(id: &str, title: &str, tags: &[&str], created_at: Option<&str>) -> Recipe {
        Recipe {
            id: id.to_string(),
            title: title.to_string(),
            ingredients: vec!["something".to_string()],
            tags: tags.iter().map(|t| t.to_string()).collect(),
            image: None,
            created_at: created_at.map(|c| c.to_string()),
            updated_at: None,
        }
    }

    fn titles(records: &[Recipe]) -> Vec<&str> {
        records.iter().map(|r| r.title.as_str()).collect()
    }

    fn sample() -> Vec<Recipe> {
        vec![
            make_recipe("1", "Banana Bread", &["Dessert"], Some("2024-01-10T08:00:00+00:00")),
            make_recipe("2", "Apple Pie", &["Dessert", "Easy"], Some("2024-03-02T12:00:00+00:00")),
            make_recipe("3", "Chili", &["Spicy", "Vegan"], None),
            make_recipe("4", "Green Salad", &["Vegan", "Quick"], Some("2024-02-20T09:30:00+00:00")),
            make_recipe("5", "Apple Crumble", &["Dessert"], Some("not-a-timestamp")),
        ]
    }

    #[test]
    fn test_empty_state_preserves_input_order() {
        let records = sample();
        let filtered = filter(&records, "", None);
        let sorted = sort(filtered, SortMode::Unsorted);
        assert_eq!(sorted, records);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let records = sample();
        let once = filter(&records, "apple", Some("Dessert"));
        let twice = filter(&once, "apple", Some("Dessert"));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_search_is_case_insensitive_substring() {
        let records = vec![
            make_recipe("1", "Banana Bread", &[], None),
            make_recipe("2", "Apple Pie", &[], None),
        ];
        assert_eq!(titles(&filter(&records, "app", None)), vec!["Apple Pie"]);
        assert_eq!(titles(&filter(&records, "BREAD", None)), vec!["Banana Bread"]);
        // Empty search passes everything
        assert_eq!(filter(&records, "", None).len(), 2);
    }

    #[test]
    fn test_filter_by_tag_requires_exact_membership() {
        let records = sample();
        let vegan = filter(&records, "", Some("Vegan"));
        assert_eq!(titles(&vegan), vec!["Chili", "Green Salad"]);
        // No partial tag matches
        assert!(filter(&records, "", Some("Veg")).is_empty());
    }

    #[test]
    fn test_filter_combines_search_and_tag() {
        let records = sample();
        let hits = filter(&records, "apple", Some("Easy"));
        assert_eq!(titles(&hits), vec!["Apple Pie"]);
    }

    #[test]
    fn test_tag_universe_keeps_first_seen_order() {
        let records = sample();
        assert_eq!(
            tag_universe(&records),
            vec!["Dessert", "Easy", "Spicy", "Vegan", "Quick"]
        );
    }

    #[test]
    fn test_sort_ascending_by_title() {
        let records = vec![
            make_recipe("1", "Banana Bread", &[], None),
            make_recipe("2", "Apple Pie", &[], None),
        ];
        let sorted = sort(records, SortMode::TitleAsc);
        assert_eq!(titles(&sorted), vec!["Apple Pie", "Banana Bread"]);
    }

    #[test]
    fn test_sort_descending_is_reverse_of_ascending_without_ties() {
        let records = sample();
        let asc = sort(records.clone(), SortMode::TitleAsc);
        let mut desc = sort(records, SortMode::TitleDesc);
        desc.reverse();
        assert_eq!(titles(&asc), titles(&desc));
    }

    #[test]
    fn test_sort_is_stable_for_equal_titles() {
        let records = vec![
            make_recipe("1", "Stew", &[], None),
            make_recipe("2", "stew", &[], None),
            make_recipe("3", "Apple Pie", &[], None),
        ];
        let sorted = sort(records, SortMode::TitleAsc);
        // "Stew" and "stew" compare equal case-insensitively; ids keep input order
        assert_eq!(sorted[1].id, "1");
        assert_eq!(sorted[2].id, "2");
    }

    #[test]
    fn test_newest_first_treats_missing_and_malformed_as_earliest() {
        let records = sample();
        let sorted = sort(records, SortMode::NewestFirst);
        assert_eq!(
            titles(&sorted),
            // Chili (no timestamp) and Apple Crumble (malformed) sink to the
            // end, keeping their relative input order
            vec!["Apple Pie", "Green Salad", "Banana Bread", "Chili", "Apple Crumble"]
        );
    }

    #[test]
    fn test_paginate_never_exceeds_page_size() {
        let records = sample();
        for page in 1..=4 {
            let (slice, _) = paginate(&records, 2, page);
            assert!(slice.len() <= 2);
        }
    }

    #[test]
    fn test_paginate_five_records_page_size_two() {
        let records = sample();
        let (page1, total) = paginate(&records, 2, 1);
        assert_eq!(total, 3);
        assert_eq!(page1.len(), 2);
        let (page3, _) = paginate(&records, 2, 3);
        assert_eq!(page3.len(), 1);
        assert_eq!(page3[0].title, "Apple Crumble");
    }

    #[test]
    fn test_paginate_past_the_end_is_empty_not_an_error() {
        let records = sample();
        let (slice, total) = paginate(&records, 2, 9);
        assert_eq!(total, 3);
        assert!(slice.is_empty());
    }

    #[test]
    fn test_paginate_empty_set_has_zero_pages() {
        let (slice, total) = paginate(&[], 10, 1);
        assert!(slice.is_empty());
        assert_eq!(total, 0);
    }

    #[test]
    fn test_paginate_zero_page_size_yields_no_pages() {
        let records = sample();
        let (slice, total) = paginate(&records, 0, 1);
        assert!(slice.is_empty());
        assert_eq!(total, 0);
    }

    #[test]
    fn test_setters_reset_page_to_one() {
        let mut state = ListViewState::default();
        state.set_page(4);
        state.set_search("pie".to_string());
        assert_eq!(state.page, 1);

        state.set_page(4);
        state.set_selected_tag(Some("Vegan".to_string()));
        assert_eq!(state.page, 1);

        state.set_page(4);
        state.set_sort(SortMode::TitleAsc);
        assert_eq!(state.page, 1);

        state.set_page(4);
        state.set_page_size(6);
        assert_eq!(state.page, 1);

        // set_page itself clamps to 1, never resets
        state.set_page(0);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_sort_mode_tokens_round_trip() {
        for mode in [
            SortMode::Unsorted,
            SortMode::TitleAsc,
            SortMode::TitleDesc,
            SortMode::NewestFirst,
        ] {
            assert_eq!(SortMode::from_str(mode.as_str()), mode);
        }
        assert_eq!(SortMode::from_str("gibberish"), SortMode::Unsorted);
    }

    #[test]
    fn test_derive_composes_filter_sort_paginate() {
        let records = sample();
        let mut state = ListViewState::default();
        state.set_selected_tag(Some("Dessert".to_string()));
        state.set_sort(SortMode::TitleAsc);
        state.set_page_size(2);

        let (visible, total) = derive(&records, &state);
        assert_eq!(total, 2);
        assert_eq!(titles(&visible), vec!["Apple Crumble", "Apple Pie"]);

        state.set_page(2);
        let (visible, total) = derive(&records, &state);
        assert_eq!(total, 2);
        assert_eq!(titles(&visible), vec!["Banana Bread"]);
    }
}
