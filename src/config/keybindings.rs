use serde::{Deserialize, Serialize};

use crate::config::key::KeyBinding;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalKeybindings {
    pub quit: KeyBinding,
    pub help: KeyBinding,
    pub theme: KeyBinding,
    pub next_tab: KeyBinding,
    pub previous_tab: KeyBinding,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationKeybindings {
    pub up: KeyBinding,
    pub down: KeyBinding,
    pub home: KeyBinding,
    pub end: KeyBinding,
    pub select: KeyBinding,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchKeybindings {
    pub toggle: KeyBinding,
    pub exit: KeyBinding,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridKeybindings {
    pub column_left: KeyBinding,
    pub column_right: KeyBinding,
    pub sort: KeyBinding,
    pub next_page: KeyBinding,
    pub previous_page: KeyBinding,
    pub first_page: KeyBinding,
    pub last_page: KeyBinding,
    pub page_size_up: KeyBinding,
    pub page_size_down: KeyBinding,
    pub reload: KeyBinding,
    /// Make the next dashboard load fail, to preview the error state.
    pub fail_next: KeyBinding,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct KeybindingsConfig {
    pub global: GlobalKeybindings,
    pub navigation: NavigationKeybindings,
    pub search: SearchKeybindings,
    pub grid: GridKeybindings,
}
