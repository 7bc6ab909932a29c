//! Binds columns and rows into header and body rows.
//!
//! Pure functions: the caller decides which rows (and in which order) are
//! laid out, these only produce the cell structure.

use crate::grid::{Column, SortDirection, SortDirective, Value};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell<'a> {
    pub column_id: &'a str,
    /// `None` for placeholder columns.
    pub content: Option<&'a str>,
    pub sort: Option<SortDirection>,
    pub sortable: bool,
}

#[derive(Debug)]
pub struct BodyRow<'a, T> {
    /// Position of the record in the caller's row sequence.
    pub source_index: usize,
    pub record: &'a T,
    /// One value per column, in column order.
    pub values: Vec<Value>,
}

pub fn header_row<'a, T>(
    columns: &'a [Column<T>],
    sort: Option<&SortDirective>,
) -> Vec<HeaderCell<'a>> {
    columns
        .iter()
        .map(|column| HeaderCell {
            column_id: column.id(),
            content: column.header(),
            sort: sort
                .filter(|directive| directive.column == column.id())
                .map(|directive| directive.direction),
            sortable: column.is_sortable(),
        })
        .collect()
}

pub fn body_rows<'a, T>(
    rows: &'a [T],
    columns: &[Column<T>],
    order: impl IntoIterator<Item = usize>,
) -> Vec<BodyRow<'a, T>> {
    order
        .into_iter()
        .filter_map(|index| rows.get(index).map(|record| (index, record)))
        .map(|(source_index, record)| BodyRow {
            source_index,
            record,
            values: columns.iter().map(|column| column.value(record)).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<Column<(i64, &'static str)>> {
        vec![
            Column::new("id", "ID", |r: &(i64, &str)| r.0.into()),
            Column::placeholder("actions", |_: &(i64, &str)| Value::Null),
            Column::new("name", "Name", |r: &(i64, &str)| r.1.into()),
        ]
    }

    #[test]
    fn test_header_has_one_cell_per_column() {
        let columns = columns();
        let directive = SortDirective::new("name", SortDirection::Descending);
        let header = header_row(&columns, Some(&directive));
        assert_eq!(header.len(), 3);
        assert_eq!(header[0].content, Some("ID"));
        assert_eq!(header[1].content, None);
        assert_eq!(header[0].sort, None);
        assert_eq!(header[2].sort, Some(SortDirection::Descending));
    }

    #[test]
    fn test_body_follows_order() {
        let rows = vec![(1, "a"), (2, "b"), (3, "c")];
        let columns = columns();
        let body = body_rows(&rows, &columns, [2, 0]);
        assert_eq!(body.len(), 2);
        assert_eq!(body[0].source_index, 2);
        assert_eq!(body[0].values, vec![Value::Int(3), Value::Null, Value::from("c")]);
        assert_eq!(body[1].record, &(1, "a"));
    }
}
