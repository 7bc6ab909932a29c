use std::fmt;

use chrono::{Days, NaiveDate};
use ratatui::layout::Constraint;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Cell;

use lazygrid::Theme;
use lazygrid::grid::Column;

use super::{Record, date, rupees};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    const ALL: [Self; 4] = [
        Self::Shipped,
        Self::Pending,
        Self::Delivered,
        Self::Cancelled,
    ];

    const fn color(self, theme: &Theme) -> Color {
        match self {
            Self::Pending => theme.warning(),
            Self::Shipped => theme.primary(),
            Self::Delivered => theme.success(),
            Self::Cancelled => theme.error(),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pending => "Pending",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: u32,
    pub customer: String,
    pub product: String,
    pub quantity: i64,
    pub total_price: i64,
    pub status: OrderStatus,
    pub order_date: NaiveDate,
}

impl Record for Order {
    fn summary(&self) -> String {
        format!(
            "order #{} {} x{} for {} ({})",
            self.id, self.product, self.quantity, self.customer, self.status
        )
    }
}

const CUSTOMERS: [&str; 4] = ["Deepak Kumar", "Rahul Sharma", "Anita Singh", "Priya Verma"];
const CATALOG: [(&str, i64); 4] = [
    ("Wireless Mouse", 499),
    ("Bluetooth Headphones", 1299),
    ("Office Chair", 4999),
    ("Gaming Keyboard", 1999),
];

/// Order history, newest first: the four recent orders followed by a longer
/// generated backlog so the server-paged grid has several pages.
pub fn mock_orders(count: usize) -> Vec<Order> {
    let newest = date(2025, 9, 28);
    (0..count)
        .map(|i| {
            let (product, price) = CATALOG[i % CATALOG.len()];
            let quantity = match i {
                0 => 2,
                1..=3 => 1,
                _ => i64::try_from(i % 3).unwrap_or(0) + 1,
            };
            Order {
                id: u32::try_from(i + 1).unwrap_or(u32::MAX),
                customer: CUSTOMERS[i % CUSTOMERS.len()].to_string(),
                product: product.to_string(),
                quantity,
                total_price: price * quantity,
                status: OrderStatus::ALL[i % OrderStatus::ALL.len()],
                order_date: newest
                    .checked_sub_days(Days::new(u64::try_from(i).unwrap_or(0)))
                    .unwrap_or(newest),
            }
        })
        .collect()
}

pub fn columns() -> Vec<Column<Order>> {
    vec![
        Column::new("id", "ID", |o: &Order| o.id.into()).with_constraint(Constraint::Length(4)),
        Column::new("customer", "Customer", |o: &Order| o.customer.as_str().into()),
        Column::new("product", "Product", |o: &Order| o.product.as_str().into()),
        Column::new("quantity", "Quantity", |o: &Order| o.quantity.into())
            .with_constraint(Constraint::Length(9)),
        Column::new("total_price", "Total Price", |o: &Order| o.total_price.into())
            .with_constraint(Constraint::Length(12))
            .with_cell(|o, theme| {
                Cell::from(rupees(o.total_price)).style(Style::default().fg(theme.text()))
            }),
        Column::new("status", "Status", |o: &Order| o.status.to_string().into())
            .with_constraint(Constraint::Length(10))
            .with_cell(|o, theme| {
                Cell::from(o.status.to_string()).style(
                    Style::default()
                        .fg(o.status.color(theme))
                        .add_modifier(Modifier::BOLD),
                )
            }),
        Column::new("order_date", "Order Date", |o: &Order| o.order_date.into())
            .with_constraint(Constraint::Length(11)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_orders_match_catalog() {
        let orders = mock_orders(4);
        assert_eq!(orders[0].total_price, 998);
        assert_eq!(orders[0].status, OrderStatus::Shipped);
        assert_eq!(orders[2].product, "Office Chair");
        assert_eq!(orders[3].status, OrderStatus::Cancelled);
        assert_eq!(orders[3].order_date, date(2025, 9, 25));
    }

    #[test]
    fn test_backlog_is_newest_first() {
        let orders = mock_orders(42);
        assert_eq!(orders.len(), 42);
        assert!(orders.windows(2).all(|w| w[0].order_date > w[1].order_date));
    }
}
