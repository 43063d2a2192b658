//! Content-type catalog.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use indexmap::IndexMap;

/// Available content types, id -> display name, in configured order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentTypeCatalog {
    entries: IndexMap<String, String>,
}

impl ContentTypeCatalog {
    #[must_use]
    pub fn new(entries: IndexMap<String, String>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Display names in catalog order, as offered in the selection prompt.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.entries.values().cloned().collect()
    }

    /// Id of the entry at `index` in catalog order.
    #[must_use]
    pub fn id_at(&self, index: usize) -> Option<&str> {
        self.entries
            .get_index(index)
            .map(|(id, _)| id.as_str())
    }

    /// Closest catalog id to an unknown token, matched against ids and labels.
    #[must_use]
    pub fn suggest(&self, token: &str) -> Option<&str> {
        let matcher = SkimMatcherV2::default();

        self.entries
            .iter()
            .filter_map(|(id, label)| {
                let score = matcher
                    .fuzzy_match(id, token)
                    .max(matcher.fuzzy_match(label, token))?;
                Some((score, id.as_str()))
            })
            .max_by_key(|(score, _)| *score)
            .map(|(_, id)| id)
    }
}
