//! Screen trait for full-page views.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::Theme;
use crate::ui::{Handled, Keybinding, Result};

/// Full-page view that orchestrates components.
///
/// Screens own their records and translate grid events into whatever their
/// data source needs (page fetches, reloads, detail toasts).
pub trait Screen {
    /// Tab title.
    fn title(&self) -> &str;

    fn handle_key(&mut self, key: KeyEvent) -> Result<Handled<()>> {
        _ = key;
        Ok(Handled::Ignored)
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<Handled<()>> {
        _ = mouse;
        Ok(Handled::Ignored)
    }

    /// Called on each tick for animations and time-based updates.
    fn on_tick(&mut self) {}

    /// Drain any results that arrived from background work.
    fn update(&mut self) -> Result<()> {
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme);

    /// Status line text describing the last notable thing that happened.
    fn status(&self) -> Option<&str> {
        None
    }

    /// Returns the keybindings for this screen.
    fn keybindings(&self) -> Vec<Keybinding> {
        vec![]
    }
}
