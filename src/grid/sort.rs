//! Single-column, stable sorting.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::grid::{Column, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Marker drawn next to a sorted header.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

/// The one active sort: which column and which way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortDirective {
    pub column: String,
    pub direction: SortDirection,
}

impl SortDirective {
    pub fn new(column: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column: column.into(),
            direction,
        }
    }
}

/// How repeated activation of the same header moves through directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortCycle {
    /// none → ascending → descending → none
    #[default]
    TriState,
    /// ascending ⇄ descending, never back to unsorted
    Toggle,
}

impl SortCycle {
    /// Directive that results from activating `column`'s header.
    ///
    /// A different column always starts over at ascending; the previous
    /// directive is discarded.
    pub fn next(self, current: Option<&SortDirective>, column: &str) -> Option<SortDirective> {
        let direction = match current {
            Some(directive) if directive.column == column => match (self, directive.direction) {
                (_, SortDirection::Ascending) => Some(SortDirection::Descending),
                (Self::TriState, SortDirection::Descending) => None,
                (Self::Toggle, SortDirection::Descending) => Some(SortDirection::Ascending),
            },
            _ => Some(SortDirection::Ascending),
        };
        direction.map(|direction| SortDirective::new(column, direction))
    }
}

/// Compare two keys for `direction`, keeping nulls last either way.
fn compare_keys(a: &Value, b: &Value, direction: SortDirection) -> Ordering {
    match (a.is_null(), b.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => match direction {
            SortDirection::Ascending => a.compare(b),
            SortDirection::Descending => b.compare(a),
        },
    }
}

/// Reorder `indices` (positions into `rows`) by `column`.
///
/// `indices` must be in insertion order on entry; ties keep that order, so
/// the result never depends on any earlier sort.
pub fn sort_indices<T>(
    rows: &[T],
    indices: &mut Vec<usize>,
    column: &Column<T>,
    direction: SortDirection,
) {
    let mut keyed: Vec<(usize, Value)> = indices
        .iter()
        .map(|&index| (index, column.value(&rows[index])))
        .collect();
    keyed.sort_by(|(_, a), (_, b)| compare_keys(a, b, direction));
    indices.clear();
    indices.extend(keyed.into_iter().map(|(index, _)| index));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        name: &'static str,
        score: Option<i64>,
    }

    fn item(name: &'static str, score: Option<i64>) -> Item {
        Item { name, score }
    }

    fn score_column() -> Column<Item> {
        Column::new("score", "Score", |i: &Item| i.score.into())
    }

    fn sorted_names(rows: &[Item], direction: SortDirection) -> Vec<&'static str> {
        let mut indices: Vec<usize> = (0..rows.len()).collect();
        sort_indices(rows, &mut indices, &score_column(), direction);
        indices.into_iter().map(|i| rows[i].name).collect()
    }

    #[test]
    fn test_sort_is_stable() {
        let rows = vec![
            item("a", Some(2)),
            item("b", Some(1)),
            item("c", Some(2)),
            item("d", Some(1)),
        ];
        assert_eq!(
            sorted_names(&rows, SortDirection::Ascending),
            vec!["b", "d", "a", "c"]
        );
        assert_eq!(
            sorted_names(&rows, SortDirection::Descending),
            vec!["a", "c", "b", "d"]
        );
    }

    #[test]
    fn test_nulls_sort_last_in_both_directions() {
        let rows = vec![item("none", None), item("low", Some(1)), item("high", Some(5))];
        assert_eq!(
            sorted_names(&rows, SortDirection::Ascending),
            vec!["low", "high", "none"]
        );
        assert_eq!(
            sorted_names(&rows, SortDirection::Descending),
            vec!["high", "low", "none"]
        );
    }

    #[test]
    fn test_descending_is_reverse_of_ascending() {
        let rows = vec![
            item("c", Some(30)),
            item("a", Some(10)),
            item("e", Some(50)),
            item("b", Some(20)),
            item("d", Some(40)),
        ];
        let ascending = sorted_names(&rows, SortDirection::Ascending);
        let mut descending = sorted_names(&rows, SortDirection::Descending);
        descending.reverse();
        assert_eq!(ascending, descending);
    }

    #[test]
    fn test_tri_state_cycle() {
        let cycle = SortCycle::TriState;
        let first = cycle.next(None, "name");
        assert_eq!(first, Some(SortDirective::new("name", SortDirection::Ascending)));
        let second = cycle.next(first.as_ref(), "name");
        assert_eq!(second, Some(SortDirective::new("name", SortDirection::Descending)));
        assert_eq!(cycle.next(second.as_ref(), "name"), None);
    }

    #[test]
    fn test_toggle_cycle_never_unsorts() {
        let cycle = SortCycle::Toggle;
        let descending = SortDirective::new("name", SortDirection::Descending);
        assert_eq!(
            cycle.next(Some(&descending), "name"),
            Some(SortDirective::new("name", SortDirection::Ascending))
        );
    }

    #[test]
    fn test_new_column_discards_old_directive() {
        let current = SortDirective::new("name", SortDirection::Descending);
        assert_eq!(
            SortCycle::TriState.next(Some(&current), "price"),
            Some(SortDirective::new("price", SortDirection::Ascending))
        );
    }
}
