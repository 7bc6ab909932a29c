use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use crate::Theme;
use crate::config::{GlobalAction, GridAction, KeyResolver, NavAction, SearchAction};
use crate::ui::{Component, Handled, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybinding {
    pub key: String,
    pub description: String,
}

impl Keybinding {
    pub fn new(key: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
        }
    }
}

struct Section {
    title: &'static str,
    keybindings: Vec<Keybinding>,
}

/// Popup listing every binding, grouped by area.
pub struct HelpOverlay {
    sections: Vec<Section>,
}

impl HelpOverlay {
    pub fn new(resolver: &KeyResolver, screen: Vec<Keybinding>) -> Self {
        let global = vec![
            Keybinding::new(resolver.display_global(GlobalAction::Quit), "Quit"),
            Keybinding::new(resolver.display_global(GlobalAction::Help), "Toggle help"),
            Keybinding::new(resolver.display_global(GlobalAction::Theme), "Next theme"),
            Keybinding::new(resolver.display_global(GlobalAction::NextTab), "Next tab"),
            Keybinding::new(resolver.display_global(GlobalAction::PreviousTab), "Previous tab"),
        ];
        let grid = vec![
            Keybinding::new(resolver.display_nav(NavAction::Up), "Previous row"),
            Keybinding::new(resolver.display_nav(NavAction::Down), "Next row"),
            Keybinding::new(resolver.display_nav(NavAction::Select), "Open row"),
            Keybinding::new(resolver.display_grid(GridAction::ColumnLeft), "Focus column left"),
            Keybinding::new(resolver.display_grid(GridAction::ColumnRight), "Focus column right"),
            Keybinding::new(resolver.display_grid(GridAction::Sort), "Sort focused column"),
            Keybinding::new(resolver.display_grid(GridAction::NextPage), "Next page"),
            Keybinding::new(resolver.display_grid(GridAction::PreviousPage), "Previous page"),
            Keybinding::new(resolver.display_grid(GridAction::FirstPage), "First page"),
            Keybinding::new(resolver.display_grid(GridAction::LastPage), "Last page"),
            Keybinding::new(resolver.display_grid(GridAction::PageSizeUp), "Larger pages"),
            Keybinding::new(resolver.display_grid(GridAction::PageSizeDown), "Smaller pages"),
            Keybinding::new(resolver.display_search(SearchAction::Toggle), "Search"),
            Keybinding::new(resolver.display_search(SearchAction::Exit), "Clear search"),
        ];
        let mut sections = vec![
            Section {
                title: "Global",
                keybindings: global,
            },
            Section {
                title: "Grid",
                keybindings: grid,
            },
        ];
        if !screen.is_empty() {
            sections.push(Section {
                title: "Screen",
                keybindings: screen,
            });
        }
        Self { sections }
    }
}

pub enum HelpEvent {
    Close,
}

impl Component for HelpOverlay {
    type Output = HelpEvent;

    fn handle_key(&mut self, key: KeyEvent) -> Result<Handled<Self::Output>> {
        Ok(match key.code {
            KeyCode::Esc | KeyCode::Char('?' | 'q') => HelpEvent::Close.into(),
            _ => Handled::Consumed,
        })
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let popup_area = area.centered(Constraint::Percentage(60), Constraint::Percentage(80));
        frame.render_widget(Clear, popup_area);

        let key_style = Style::default()
            .fg(theme.peach())
            .add_modifier(Modifier::BOLD);
        let desc_style = Style::default().fg(theme.text());
        let section_style = Style::default()
            .fg(theme.subtext0())
            .add_modifier(Modifier::BOLD);

        let mut lines: Vec<Line> = Vec::new();
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(Span::styled(
                format!("── {} ──", section.title),
                section_style,
            )));
            for kb in &section.keybindings {
                lines.push(Line::from(vec![
                    Span::styled(format!("{:>14}", kb.key), key_style),
                    Span::raw("  "),
                    Span::styled(kb.description.clone(), desc_style),
                ]));
            }
        }

        let block = Block::default()
            .title(" Help (press ? or Esc to close) ")
            .title_style(Style::default().fg(theme.mauve()).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.lavender()))
            .style(Style::default().bg(theme.base()));

        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }
}
