use crossterm::event::KeyCode;

use crate::config::key::{Key, KeyBinding};
use crate::config::keybindings::{
    GlobalKeybindings, GridKeybindings, NavigationKeybindings, SearchKeybindings,
};

impl Default for GlobalKeybindings {
    fn default() -> Self {
        Self {
            quit: Key::new(KeyCode::Char('q')).into(),
            help: Key::new(KeyCode::Char('?')).into(),
            theme: Key::new(KeyCode::Char('t')).into(),
            next_tab: Key::new(KeyCode::Tab).into(),
            previous_tab: Key::new(KeyCode::BackTab).into(),
        }
    }
}

impl Default for NavigationKeybindings {
    fn default() -> Self {
        Self {
            up: KeyBinding::multiple(vec![Key::new(KeyCode::Char('k')), Key::new(KeyCode::Up)]),
            down: KeyBinding::multiple(vec![Key::new(KeyCode::Char('j')), Key::new(KeyCode::Down)]),
            home: KeyBinding::multiple(vec![Key::new(KeyCode::Char('g')), Key::new(KeyCode::Home)]),
            end: KeyBinding::multiple(vec![Key::new(KeyCode::Char('G')), Key::new(KeyCode::End)]),
            select: Key::new(KeyCode::Enter).into(),
        }
    }
}

impl Default for SearchKeybindings {
    fn default() -> Self {
        Self {
            toggle: Key::new(KeyCode::Char('/')).into(),
            exit: Key::new(KeyCode::Esc).into(),
        }
    }
}

impl Default for GridKeybindings {
    fn default() -> Self {
        Self {
            column_left: KeyBinding::multiple(vec![
                Key::new(KeyCode::Char('h')),
                Key::new(KeyCode::Left),
            ]),
            column_right: KeyBinding::multiple(vec![
                Key::new(KeyCode::Char('l')),
                Key::new(KeyCode::Right),
            ]),
            sort: Key::new(KeyCode::Char('s')).into(),
            next_page: KeyBinding::multiple(vec![
                Key::new(KeyCode::Char('n')),
                Key::new(KeyCode::PageDown),
            ]),
            previous_page: KeyBinding::multiple(vec![
                Key::new(KeyCode::Char('p')),
                Key::new(KeyCode::PageUp),
            ]),
            first_page: Key::new(KeyCode::Char('H')).into(),
            last_page: Key::new(KeyCode::Char('L')).into(),
            page_size_up: KeyBinding::multiple(vec![
                Key::new(KeyCode::Char('+')),
                Key::new(KeyCode::Char('=')),
            ]),
            page_size_down: Key::new(KeyCode::Char('-')).into(),
            reload: Key::new(KeyCode::Char('r')).into(),
            fail_next: Key::new(KeyCode::Char('x')).into(),
        }
    }
}
