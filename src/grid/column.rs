use std::fmt;
use std::rc::Rc;

use ratatui::layout::Constraint;
use ratatui::style::Style;
use ratatui::widgets::Cell;

use crate::Theme;
use crate::grid::Value;

type Accessor<T> = Rc<dyn Fn(&T) -> Value>;
type CellRenderer<T> = Rc<dyn Fn(&T, &Theme) -> Cell<'static>>;

/// Describes how one field is extracted from every row and drawn.
///
/// Columns are ordered; the order of the slice handed to the grid is the
/// left-to-right display order.
pub struct Column<T> {
    id: String,
    header: Option<String>,
    accessor: Accessor<T>,
    renderer: Option<CellRenderer<T>>,
    constraint: Constraint,
    sortable: bool,
    searchable: bool,
}

impl<T> Column<T> {
    /// Create a sortable column with a header and an accessor.
    pub fn new(
        id: impl Into<String>,
        header: impl Into<String>,
        accessor: impl Fn(&T) -> Value + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            header: Some(header.into()),
            accessor: Rc::new(accessor),
            renderer: None,
            constraint: Constraint::Fill(1),
            sortable: true,
            searchable: true,
        }
    }

    /// Create a column whose header cell renders nothing.
    pub fn placeholder(id: impl Into<String>, accessor: impl Fn(&T) -> Value + 'static) -> Self {
        Self {
            header: None,
            ..Self::new(id, "", accessor)
        }
    }

    /// Use a custom renderer for body cells instead of the value's text.
    #[must_use]
    pub fn with_cell(mut self, renderer: impl Fn(&T, &Theme) -> Cell<'static> + 'static) -> Self {
        self.renderer = Some(Rc::new(renderer));
        self
    }

    #[must_use]
    pub const fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraint = constraint;
        self
    }

    #[must_use]
    pub const fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// Leave this column's text out of client-side search.
    #[must_use]
    pub const fn unsearchable(mut self) -> Self {
        self.searchable = false;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Header content, or `None` for a placeholder column.
    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    pub const fn constraint(&self) -> Constraint {
        self.constraint
    }

    pub const fn is_sortable(&self) -> bool {
        self.sortable
    }

    pub const fn is_searchable(&self) -> bool {
        self.searchable
    }

    /// Extract this column's value from a row.
    pub fn value(&self, row: &T) -> Value {
        (self.accessor)(row)
    }

    /// Plain text of this column for a row, as used by search.
    pub fn text(&self, row: &T) -> String {
        self.value(row).to_string()
    }

    /// Build the body cell for a row.
    pub fn render_cell(&self, row: &T, theme: &Theme) -> Cell<'static> {
        match &self.renderer {
            Some(renderer) => renderer(row, theme),
            None => Cell::from(self.text(row)).style(Style::default().fg(theme.text())),
        }
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            header: self.header.clone(),
            accessor: Rc::clone(&self.accessor),
            renderer: self.renderer.clone(),
            constraint: self.constraint,
            sortable: self.sortable,
            searchable: self.searchable,
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("constraint", &self.constraint)
            .field("sortable", &self.sortable)
            .field("searchable", &self.searchable)
            .finish_non_exhaustive()
    }
}
