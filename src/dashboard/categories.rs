use ratatui::layout::Constraint;
use ratatui::style::Style;
use ratatui::widgets::Cell;

use lazygrid::grid::{Column, Value};

use super::Record;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub product_count: i64,
}

impl Record for Category {
    fn summary(&self) -> String {
        format!("category #{} {}", self.id, self.name)
    }
}

pub fn mock_categories() -> Vec<Category> {
    [
        (1, "Electronics", "Devices, gadgets, and accessories", 12),
        (2, "Furniture", "Home and office furniture", 5),
        (3, "Clothing", "Apparel for men, women, and kids", 20),
        (4, "Books", "Fiction, non-fiction, and academic books", 8),
    ]
    .into_iter()
    .map(|(id, name, description, product_count)| Category {
        id,
        name: name.to_string(),
        description: description.to_string(),
        product_count,
    })
    .collect()
}

pub fn columns() -> Vec<Column<Category>> {
    vec![
        Column::new("id", "ID", |c: &Category| c.id.into())
            .with_constraint(Constraint::Length(4))
            .unsearchable(),
        Column::new("name", "Category Name", |c: &Category| c.name.as_str().into()),
        Column::new("description", "Description", |c: &Category| {
            c.description.as_str().into()
        })
        .with_constraint(Constraint::Fill(2))
        .unsearchable()
        .with_cell(|c, theme| {
            Cell::from(c.description.clone()).style(Style::default().fg(theme.subtext0()))
        }),
        Column::new("product_count", "Products", |c: &Category| c.product_count.into())
            .with_constraint(Constraint::Length(9))
            .unsearchable(),
        // Header-less hint column.
        Column::placeholder("actions", |_: &Category| Value::Null)
            .unsortable()
            .unsearchable()
            .with_constraint(Constraint::Length(8))
            .with_cell(|_, theme| Cell::from("⏎ open").style(Style::default().fg(theme.overlay1()))),
    ]
}
