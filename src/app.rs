//! Application state and event loop.

use crate::screens::{ClockScreen, Screen, ScreenAction};
use crate::tui::Tui;
use crate::ui::{ScreenId, UiState};
use anyhow::Result;
use crossterm::event::Event;
use std::time::Duration;
use tracing::info;

/// Main application state
pub struct App {
    tui: Tui,
    ui_state: UiState,
    clock_screen: ClockScreen,
    should_quit: bool,
    /// Track the last screen to detect screen transitions
    last_screen: Option<ScreenId>,
}

impl App {
    pub fn new() -> Result<Self> {
        Ok(Self {
            tui: Tui::new()?,
            ui_state: UiState::new(),
            clock_screen: ClockScreen::new()?,
            should_quit: false,
            last_screen: None,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        self.tui.enter()?;
        let result = self.event_loop();
        self.tui.exit()?;
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        loop {
            self.draw()?;

            if self.should_quit {
                break;
            }

            // Poll for events with 250ms timeout
            if let Some(event) = self.tui.poll_event(Duration::from_millis(250))? {
                self.handle_event(event)?;
            }
        }
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        // Fire on_enter when the current screen changes; the first draw is
        // the initial activation.
        let current_screen = self.ui_state.current_screen;
        if self.last_screen != Some(current_screen) {
            match current_screen {
                ScreenId::Clock => self.clock_screen.on_enter()?,
            }
            self.last_screen = Some(current_screen);
            info!("entered screen {:?}", current_screen);
        }

        let mut render_result = Ok(());
        self.tui.terminal_mut().draw(|frame| {
            let area = frame.area();
            render_result = match self.ui_state.current_screen {
                ScreenId::Clock => self.clock_screen.render(frame, area),
            };
        })?;
        render_result
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        let action = match self.ui_state.current_screen {
            ScreenId::Clock => self.clock_screen.handle_event(event)?,
        };

        match action {
            ScreenAction::Quit => {
                info!("quit requested");
                self.should_quit = true;
            }
            ScreenAction::None => {}
        }
        Ok(())
    }
}
