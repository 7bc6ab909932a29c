use ratatui::layout::Constraint;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Cell;

use lazygrid::grid::Column;

use super::{Record, rupees};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub price: i64,
    pub stock: i64,
}

impl Record for Product {
    fn summary(&self) -> String {
        format!("product #{} {} ({})", self.id, self.name, self.category)
    }
}

pub fn mock_products() -> Vec<Product> {
    [
        (1, "Wireless Mouse", "Electronics", 499, 25),
        (2, "Bluetooth Headphones", "Electronics", 1299, 12),
        (3, "Gaming Keyboard", "Electronics", 1999, 8),
        (4, "Office Chair", "Furniture", 4999, 5),
    ]
    .into_iter()
    .map(|(id, name, category, price, stock)| Product {
        id,
        name: name.to_string(),
        category: category.to_string(),
        price,
        stock,
    })
    .collect()
}

pub fn columns() -> Vec<Column<Product>> {
    vec![
        Column::new("id", "ID", |p: &Product| p.id.into())
            .with_constraint(Constraint::Length(4))
            .unsearchable(),
        Column::new("name", "Name", |p: &Product| p.name.as_str().into()).with_cell(|p, theme| {
            Cell::from(p.name.clone()).style(
                Style::default()
                    .fg(theme.text())
                    .add_modifier(Modifier::BOLD),
            )
        }),
        Column::new("category", "Category", |p: &Product| p.category.as_str().into()),
        Column::new("price", "Price", |p: &Product| p.price.into())
            .with_constraint(Constraint::Length(10))
            .unsearchable()
            .with_cell(|p, theme| Cell::from(rupees(p.price)).style(Style::default().fg(theme.text()))),
        // Badge colour follows how much is left.
        Column::new("stock", "Stock", |p: &Product| p.stock.into())
            .with_constraint(Constraint::Length(7))
            .unsearchable()
            .with_cell(|p, theme| {
                let color = match p.stock {
                    s if s > 10 => theme.success(),
                    s if s > 0 => theme.warning(),
                    _ => theme.error(),
                };
                Cell::from(p.stock.to_string())
                    .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            }),
    ]
}

#[cfg(test)]
mod tests {
    use lazygrid::grid::{Grid, GridConfig, SearchMode};

    use super::*;

    fn search(query: &str) -> Vec<u32> {
        let config = GridConfig::default().with_search_mode(SearchMode::Substring);
        let mut grid = Grid::new(columns(), config).unwrap();
        grid.set_rows("products", mock_products());
        grid.set_query(query);
        grid.visible_rows().map(|p| p.id).collect()
    }

    #[test]
    fn test_search_covers_name_and_category_only() {
        assert_eq!(search("electr"), vec![1, 2, 3]);
        assert_eq!(search("CHAIR"), vec![4]);
        assert!(search("wmouse").is_empty());
        assert!(search("4999").is_empty());
    }
}
