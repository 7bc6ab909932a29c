use chrono::NaiveDate;
use ratatui::layout::Constraint;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Cell;

use lazygrid::grid::Column;

use super::{Record, date};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub registered_at: NaiveDate,
}

impl Record for User {
    fn summary(&self) -> String {
        format!("user #{} {} <{}>", self.id, self.name, self.email)
    }
}

pub fn mock_users() -> Vec<User> {
    [
        (1, "Deepak Kumar", "deepak@mail.com", 28),
        (2, "Rahul Sharma", "rahul@mail.com", 27),
        (3, "Anita Singh", "anita@mail.com", 26),
        (4, "Priya Verma", "priya@mail.com", 25),
    ]
    .into_iter()
    .map(|(id, name, email, day)| User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        registered_at: date(2025, 9, day),
    })
    .collect()
}

pub fn columns() -> Vec<Column<User>> {
    vec![
        Column::new("id", "ID", |u: &User| u.id.into())
            .with_constraint(Constraint::Length(4))
            .unsearchable()
            .with_cell(|u, theme| {
                Cell::from(u.id.to_string()).style(
                    Style::default()
                        .fg(theme.text())
                        .add_modifier(Modifier::BOLD),
                )
            }),
        Column::new("name", "Name", |u: &User| u.name.as_str().into()),
        Column::new("email", "Email", |u: &User| u.email.as_str().into())
            .unsearchable()
            .with_cell(|u, theme| {
                Cell::from(u.email.clone()).style(Style::default().fg(theme.subtext0()))
            }),
        Column::new("registered_at", "Registered At", |u: &User| {
            u.registered_at.into()
        })
        .with_constraint(Constraint::Length(14))
        .unsearchable(),
    ]
}

#[cfg(test)]
mod tests {
    use lazygrid::grid::{Grid, GridConfig, SearchMode};

    use super::*;

    #[test]
    fn test_search_covers_name_only() {
        let config = GridConfig::default().with_search_mode(SearchMode::Substring);
        let mut grid = Grid::new(columns(), config).unwrap();
        grid.set_rows("users", mock_users());
        grid.set_query("mail.com");
        assert_eq!(grid.visible_rows().count(), 0);
        grid.set_query("priya");
        assert_eq!(grid.visible_rows().map(|u| u.id).collect::<Vec<_>>(), vec![4]);
    }
}
