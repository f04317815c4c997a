//! In-page search
//!
//! The index is built once from elements carrying the search title attribute.
//! Filtering is a case-insensitive substring match on title or category that
//! keeps the items in page order. There is no ranking.

use cmc_core::{Document, NodeId};
use serde::{Deserialize, Serialize};

use crate::config::SearchConfig;

/// One searchable section of the page
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchableItem {
    pub title: String,
    pub category: String,
    pub id: String,
}

impl SearchableItem {
    pub fn new(title: &str, category: &str, id: &str) -> Self {
        Self {
            title: title.to_string(),
            category: category.to_string(),
            id: id.to_string(),
        }
    }

    fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.category.to_lowercase().contains(needle)
    }
}

/// Result of filtering the index
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome<'a> {
    /// Query too short, the panel stays closed
    Inactive,
    /// Query long enough but nothing matched
    NoResults,
    Matches(Vec<&'a SearchableItem>),
}

impl SearchOutcome<'_> {
    pub fn is_active(&self) -> bool {
        !matches!(self, SearchOutcome::Inactive)
    }

    pub fn matches(&self) -> &[&SearchableItem] {
        match self {
            SearchOutcome::Matches(items) => items,
            _ => &[],
        }
    }
}

/// Fixed list of searchable items
#[derive(Clone, Debug)]
pub struct SearchIndex {
    items: Vec<SearchableItem>,
    min_query_len: usize,
}

impl SearchIndex {
    pub fn new(items: Vec<SearchableItem>) -> Self {
        Self {
            items,
            min_query_len: 2,
        }
    }

    pub fn with_min_query_len(mut self, min_query_len: usize) -> Self {
        self.min_query_len = min_query_len;
        self
    }

    /// Index every attached element carrying the title attribute
    pub fn from_document(doc: &Document, config: &SearchConfig) -> Self {
        let items = doc
            .query_attribute(&config.title_attribute)
            .into_iter()
            .map(|node| SearchableItem {
                title: doc
                    .attribute(node, &config.title_attribute)
                    .unwrap_or_default()
                    .to_string(),
                category: doc
                    .attribute(node, &config.category_attribute)
                    .filter(|c| !c.is_empty())
                    .unwrap_or(config.default_category.as_str())
                    .to_string(),
                id: doc.id(node).unwrap_or_default().to_string(),
            })
            .collect();
        Self::new(items).with_min_query_len(config.min_query_len)
    }

    pub fn items(&self) -> &[SearchableItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Filter by `query`. Its length is counted in UTF-16 code units, the
    /// way the page's input reports it, so one emoji counts as two.
    pub fn filter(&self, query: &str) -> SearchOutcome<'_> {
        let needle = query.trim().to_lowercase();
        if needle.encode_utf16().count() < self.min_query_len {
            return SearchOutcome::Inactive;
        }
        let matches: Vec<_> = self.items.iter().filter(|item| item.matches(&needle)).collect();
        if matches.is_empty() {
            SearchOutcome::NoResults
        } else {
            SearchOutcome::Matches(matches)
        }
    }
}

/// Search box bound to its results panel
pub struct SearchPanel {
    input: NodeId,
    results: NodeId,
    index: SearchIndex,
}

impl SearchPanel {
    /// Bind to the page, or `None` if the input or results container is missing
    pub fn init(doc: &Document, config: &SearchConfig) -> Option<Self> {
        let input = doc.get_element_by_id(&config.input_id)?;
        let results = doc.get_element_by_id(&config.results_id)?;
        let index = SearchIndex::from_document(doc, config);
        tracing::debug!(items = index.len(), "search index built");
        Some(Self {
            input,
            results,
            index,
        })
    }

    pub fn input(&self) -> NodeId {
        self.input
    }

    pub fn results(&self) -> NodeId {
        self.results
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    /// Re-filter and redraw the panel for the current query
    pub fn on_input(&self, doc: &mut Document, query: &str, config: &SearchConfig) {
        let outcome = self.index.filter(query);
        match &outcome {
            SearchOutcome::Inactive => {
                doc.remove_class(self.results, &config.active_class);
                return;
            }
            SearchOutcome::NoResults => {
                doc.clear_children(self.results);
                doc.build("div")
                    .class(&config.result_item_class)
                    .class("text-gray-500")
                    .class("text-sm")
                    .text(&config.no_results_label)
                    .append_to(self.results);
            }
            SearchOutcome::Matches(items) => {
                doc.clear_children(self.results);
                for item in items {
                    let link = doc
                        .build("a")
                        .class(&config.result_item_class)
                        .class("block")
                        .attr("href", &format!("#{}", item.id))
                        .append_to(self.results);
                    doc.build("div")
                        .class("text-white")
                        .class("text-sm")
                        .class("font-medium")
                        .text(&item.title)
                        .append_to(link);
                    doc.build("div")
                        .class("text-gray-500")
                        .class("text-xs")
                        .class("mt-0.5")
                        .text(&item.category)
                        .append_to(link);
                }
            }
        }
        doc.add_class(self.results, &config.active_class);
    }

    pub fn close(&self, doc: &mut Document, config: &SearchConfig) {
        doc.remove_class(self.results, &config.active_class);
    }

    pub fn is_open(&self, doc: &Document, config: &SearchConfig) -> bool {
        doc.has_class(self.results, &config.active_class)
    }

    /// The `href` of the result under `target`, if it is a result link
    pub fn selected_href<'d>(
        &self,
        doc: &'d Document,
        target: NodeId,
        config: &SearchConfig,
    ) -> Option<&'d str> {
        let item = doc.closest_class(target, &config.result_item_class)?;
        if !doc.is_inclusive_ancestor(self.results, item) {
            return None;
        }
        doc.attribute(item, "href")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> SearchIndex {
        SearchIndex::new(vec![
            SearchableItem::new("Colors", "Foundations", "colors"),
            SearchableItem::new("Typography", "Foundations", "typography"),
            SearchableItem::new("Buttons", "Components", "buttons"),
            SearchableItem::new("Button Groups", "Components", "button-groups"),
        ])
    }

    #[test]
    fn test_short_queries_are_inactive() {
        let index = index();
        for query in ["", " ", "b", "  b  ", "\tB\n"] {
            assert_eq!(index.filter(query), SearchOutcome::Inactive, "{query:?}");
        }
    }

    #[test]
    fn test_no_results_is_distinct_from_inactive() {
        let index = index();
        let outcome = index.filter("zzz");
        assert_eq!(outcome, SearchOutcome::NoResults);
        assert!(outcome.is_active());
        assert!(outcome.matches().is_empty());
    }

    #[test]
    fn test_matches_title_or_category_case_insensitively() {
        let index = index();
        let ids = |q: &str| -> Vec<String> {
            index
                .filter(q)
                .matches()
                .iter()
                .map(|item| item.id.clone())
                .collect()
        };
        assert_eq!(ids("BUTTON"), vec!["buttons", "button-groups"]);
        assert_eq!(ids("foundations"), vec!["colors", "typography"]);
        assert_eq!(ids("  typo "), vec!["typography"]);
    }

    #[test]
    fn test_filter_preserves_order() {
        let index = SearchIndex::new(vec![
            SearchableItem::new("Alpha", "x", "a"),
            SearchableItem::new("Beta", "match", "b"),
            SearchableItem::new("Gamma match", "y", "c"),
        ]);
        let outcome = index.filter("match");
        let ids: Vec<&str> = outcome
            .matches()
            .iter()
            .map(|item| item.id.as_str())
            .collect();
        assert_eq!(ids, vec!["b", "c"]);
    }

    #[test]
    fn test_query_length_counts_utf16_units() {
        let index = SearchIndex::new(vec![
            SearchableItem::new("Reactions 😀", "Components", "reactions"),
            SearchableItem::new("가나다", "Foundations", "hangul"),
        ]);
        assert_eq!(index.filter("가"), SearchOutcome::Inactive);
        let outcome = index.filter("😀");
        assert_eq!(outcome.matches().len(), 1);
        assert_eq!(outcome.matches()[0].id, "reactions");
    }

    #[test]
    fn test_filter_is_sound_and_complete() {
        let index = index();
        for query in ["co", "on", "but", "ty", "ns", "xx", "FOUND"] {
            let needle = query.trim().to_lowercase();
            let matched = index.filter(query);
            for item in index.items() {
                let expected = item.title.to_lowercase().contains(&needle)
                    || item.category.to_lowercase().contains(&needle);
                let returned = matched.matches().iter().any(|m| m.id == item.id);
                assert_eq!(expected, returned, "query={query} item={}", item.id);
            }
        }
    }

    #[test]
    fn test_index_from_document_defaults_category() {
        let mut doc = Document::new();
        let body = doc.body();
        doc.build("section")
            .id("colors")
            .attr("data-search-title", "Colors")
            .attr("data-search-category", "Foundations")
            .append_to(body);
        doc.build("section")
            .id("misc")
            .attr("data-search-title", "Misc")
            .append_to(body);
        doc.build("section").id("untitled").append_to(body);

        let index = SearchIndex::from_document(&doc, &SearchConfig::default());
        assert_eq!(
            index.items(),
            &[
                SearchableItem::new("Colors", "Foundations", "colors"),
                SearchableItem::new("Misc", "General", "misc"),
            ]
        );
    }

    #[test]
    fn test_items_load_from_json() {
        let items: Vec<SearchableItem> = serde_json::from_str(
            r#"[
                {"title": "Shadows", "category": "Foundations", "id": "shadows"},
                {"title": "Cards", "category": "Components", "id": "cards"}
            ]"#,
        )
        .unwrap();
        let index = SearchIndex::new(items);
        assert_eq!(index.len(), 2);
        assert_eq!(index.filter("CARD").matches()[0].id, "cards");
    }
}
