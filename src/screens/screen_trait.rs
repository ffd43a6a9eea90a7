//! Screen trait and associated types.
//!
//! Screens own their state, render themselves, and report what should happen
//! next through a [`ScreenAction`] instead of mutating app state directly.
//! The app event loop calls `on_enter` when a screen becomes the current one;
//! that is the activation hook screens initialize their content in.

use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::Frame;

/// Actions that a screen can return after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenAction {
    /// No action needed, stay on current screen.
    #[default]
    None,
    /// Request to quit the application.
    Quit,
}

/// Trait for screen controllers.
pub trait Screen {
    /// Render the screen into `area`.
    fn render(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;

    /// Handle an input event and return the resulting action.
    fn handle_event(&mut self, event: Event) -> Result<ScreenAction>;

    /// Called when the screen is entered (becomes the active screen).
    ///
    /// Screens initialize their visible content here.
    fn on_enter(&mut self) -> Result<()> {
        Ok(())
    }
}
