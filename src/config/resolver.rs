use std::sync::Arc;

use crossterm::event::KeyEvent;

use crate::config::actions::{GlobalAction, GridAction, NavAction, SearchAction};
use crate::config::key::KeyBinding;
use crate::config::keybindings::KeybindingsConfig;

/// Maps key events to actions using the configured bindings.
pub struct KeyResolver {
    pub keybindings: Arc<KeybindingsConfig>,
}

impl KeyResolver {
    pub const fn new(keybindings: Arc<KeybindingsConfig>) -> Self {
        Self { keybindings }
    }

    fn global(&self, action: GlobalAction) -> &KeyBinding {
        let kb = &self.keybindings.global;
        match action {
            GlobalAction::Quit => &kb.quit,
            GlobalAction::Help => &kb.help,
            GlobalAction::Theme => &kb.theme,
            GlobalAction::NextTab => &kb.next_tab,
            GlobalAction::PreviousTab => &kb.previous_tab,
        }
    }

    fn nav(&self, action: NavAction) -> &KeyBinding {
        let kb = &self.keybindings.navigation;
        match action {
            NavAction::Up => &kb.up,
            NavAction::Down => &kb.down,
            NavAction::Home => &kb.home,
            NavAction::End => &kb.end,
            NavAction::Select => &kb.select,
        }
    }

    fn search(&self, action: SearchAction) -> &KeyBinding {
        let kb = &self.keybindings.search;
        match action {
            SearchAction::Toggle => &kb.toggle,
            SearchAction::Exit => &kb.exit,
        }
    }

    fn grid(&self, action: GridAction) -> &KeyBinding {
        let kb = &self.keybindings.grid;
        match action {
            GridAction::ColumnLeft => &kb.column_left,
            GridAction::ColumnRight => &kb.column_right,
            GridAction::Sort => &kb.sort,
            GridAction::NextPage => &kb.next_page,
            GridAction::PreviousPage => &kb.previous_page,
            GridAction::FirstPage => &kb.first_page,
            GridAction::LastPage => &kb.last_page,
            GridAction::PageSizeUp => &kb.page_size_up,
            GridAction::PageSizeDown => &kb.page_size_down,
            GridAction::Reload => &kb.reload,
            GridAction::FailNext => &kb.fail_next,
        }
    }

    pub fn matches_global(&self, event: &KeyEvent, action: GlobalAction) -> bool {
        self.global(action).matches(event)
    }

    pub fn display_global(&self, action: GlobalAction) -> String {
        self.global(action).display()
    }

    pub fn matches_nav(&self, event: &KeyEvent, action: NavAction) -> bool {
        self.nav(action).matches(event)
    }

    pub fn display_nav(&self, action: NavAction) -> String {
        self.nav(action).display()
    }

    pub fn matches_search(&self, event: &KeyEvent, action: SearchAction) -> bool {
        self.search(action).matches(event)
    }

    pub fn display_search(&self, action: SearchAction) -> String {
        self.search(action).display()
    }

    pub fn matches_grid(&self, event: &KeyEvent, action: GridAction) -> bool {
        self.grid(action).matches(event)
    }

    pub fn display_grid(&self, action: GridAction) -> String {
        self.grid(action).display()
    }
}

impl Default for KeyResolver {
    fn default() -> Self {
        Self::new(Arc::new(KeybindingsConfig::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    use crate::config::key::Key;

    #[test]
    fn test_default_grid_bindings() {
        let resolver = KeyResolver::default();
        let page_down = KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE);
        assert!(resolver.matches_grid(&page_down, GridAction::NextPage));
        assert!(!resolver.matches_grid(&page_down, GridAction::PreviousPage));
        let last = KeyEvent::new(KeyCode::Char('L'), KeyModifiers::SHIFT);
        assert!(resolver.matches_grid(&last, GridAction::LastPage));
        assert!(!resolver.matches_grid(&last, GridAction::ColumnRight));
        assert_eq!(resolver.display_grid(GridAction::Sort), "s");
    }

    #[test]
    fn test_fail_next_is_rebindable() {
        let x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert!(KeyResolver::default().matches_grid(&x, GridAction::FailNext));
        assert_eq!(KeyResolver::default().display_grid(GridAction::FailNext), "x");

        let mut config = KeybindingsConfig::default();
        config.grid.fail_next = Key::new(KeyCode::Char('z')).into();
        let resolver = KeyResolver::new(Arc::new(config));
        let z = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);
        assert!(resolver.matches_grid(&z, GridAction::FailNext));
        assert!(!resolver.matches_grid(&x, GridAction::FailNext));
        assert_eq!(resolver.display_grid(GridAction::FailNext), "z");
    }

    #[test]
    fn test_home_and_end_are_distinct() {
        let resolver = KeyResolver::default();
        let end = KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT);
        assert!(resolver.matches_nav(&end, NavAction::End));
        assert!(!resolver.matches_nav(&end, NavAction::Home));
    }
}
