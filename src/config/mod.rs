pub mod actions;
mod defaults;
pub mod key;
pub mod keybindings;
pub mod loader;
pub mod resolver;

pub use actions::*;
pub use keybindings::KeybindingsConfig;
pub use loader::{load, save_theme};
pub use resolver::KeyResolver;
use serde::{Deserialize, Serialize};

use crate::grid::GridConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "Catppuccin Mocha".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Defaults applied to every grid in the dashboard.
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{PaginationMode, TableStyle};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_empty_file_is_all_defaults() {
        let config = loader::parse("").unwrap();
        assert_eq!(config.theme.name, "Catppuccin Mocha");
        assert_eq!(config.grid, GridConfig::default());
    }

    #[test]
    fn test_partial_overrides() {
        let config = loader::parse(
            r#"
            [theme]
            name = "Catppuccin Latte"

            [grid]
            initial_page_size = 5
            style = "bordered"

            [keybindings.grid]
            sort = "S"
            "#,
        )
        .unwrap();
        assert_eq!(config.theme.name, "Catppuccin Latte");
        assert_eq!(config.grid.initial_page_size, 5);
        assert_eq!(config.grid.style, TableStyle::Bordered);
        assert_eq!(config.grid.mode, PaginationMode::Client);

        let resolver = KeyResolver::new(std::sync::Arc::new(config.keybindings));
        let upper = KeyEvent::new(KeyCode::Char('S'), KeyModifiers::SHIFT);
        assert!(resolver.matches_grid(&upper, GridAction::Sort));
        let next = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE);
        assert!(resolver.matches_grid(&next, GridAction::NextPage));
    }
}
