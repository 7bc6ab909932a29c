//! Client-side search over the rows' display text.

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use serde::{Deserialize, Serialize};

use crate::grid::Column;

/// How a query is matched against a cell's text. Both are case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchMode {
    /// Query characters must appear in order, gaps allowed.
    #[default]
    Fuzzy,
    /// The query must appear as one contiguous piece.
    Substring,
}

/// Row filter over the searchable columns.
///
/// A row matches when any searchable column's text matches the query.
pub struct RowFilter {
    mode: SearchMode,
    fuzzy: SkimMatcherV2,
}

impl Default for RowFilter {
    fn default() -> Self {
        Self::new(SearchMode::default())
    }
}

impl RowFilter {
    pub fn new(mode: SearchMode) -> Self {
        Self {
            mode,
            fuzzy: SkimMatcherV2::default().ignore_case(),
        }
    }

    pub const fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn matches_text(&self, text: &str, query: &str) -> bool {
        match self.mode {
            SearchMode::Fuzzy => self.fuzzy.fuzzy_match(text, query).is_some(),
            SearchMode::Substring => text.to_lowercase().contains(&query.to_lowercase()),
        }
    }

    pub fn matches_row<T>(&self, row: &T, columns: &[Column<T>], query: &str) -> bool {
        query.is_empty()
            || columns
                .iter()
                .filter(|column| column.is_searchable())
                .any(|column| self.matches_text(&column.text(row), query))
    }

    /// Positions of `rows` that match, in insertion order.
    pub fn apply<T>(&self, rows: &[T], columns: &[Column<T>], query: &str) -> Vec<usize> {
        rows.iter()
            .enumerate()
            .filter(|(_, row)| self.matches_row(*row, columns, query))
            .map(|(index, _)| index)
            .collect()
    }
}
