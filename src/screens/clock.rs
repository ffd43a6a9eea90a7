//! Clock screen controller.
//!
//! On activation this screen reads the current local time once, formats it,
//! and writes it into its text display widget. The text is a snapshot taken
//! at activation and is never updated afterward; re-entering the screen runs
//! the same sequence again.

use crate::clock::{Clock, SystemClock};
use crate::layout::{LabelHandle, ScreenLayout, WidgetDecl, WidgetKind};
use crate::screens::screen_trait::{Screen, ScreenAction};
use anyhow::{bail, Result};
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::Frame;
use tracing::debug;

/// Identifier of the text display widget that shows the time.
pub const TIME_TEXT_ID: &str = "time_text";

/// Identifier of the quit-keys hint line.
pub const QUIT_HINT_ID: &str = "quit_hint";

/// Fixed prefix the displayed time is rendered behind.
pub const TIME_PREFIX: &str = "The current local time is: ";

/// Declarative layout of the clock screen.
const CLOCK_LAYOUT: &[WidgetDecl] = &[
    WidgetDecl {
        id: TIME_TEXT_ID,
        kind: WidgetKind::Label,
    },
    WidgetDecl {
        id: QUIT_HINT_ID,
        kind: WidgetKind::Hint,
    },
];

/// The one screen of the application.
pub struct ClockScreen<C: Clock = SystemClock> {
    clock: C,
    layout: ScreenLayout,
    /// Handle to the time label, resolved once at construction.
    time_text: LabelHandle,
    activated: bool,
}

impl ClockScreen<SystemClock> {
    /// Create the clock screen backed by the system clock.
    pub fn new() -> Result<Self> {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> ClockScreen<C> {
    /// Create the clock screen with the given clock.
    ///
    /// Inflates the layout and locates the time label by its identifier.
    /// A layout without that identifier is a programmer error and fails
    /// construction.
    pub fn with_clock(clock: C) -> Result<Self> {
        let mut layout = ScreenLayout::inflate(CLOCK_LAYOUT);
        let time_text = layout.find_label(TIME_TEXT_ID)?;
        layout.set_hint(QUIT_HINT_ID, "Quit: q | Esc")?;
        Ok(Self {
            clock,
            layout,
            time_text,
            activated: false,
        })
    }

    /// The text currently set on the time widget.
    ///
    /// Empty until the screen has been activated.
    pub fn display_text(&self) -> &str {
        self.layout.text(self.time_text)
    }
}

impl<C: Clock> Screen for ClockScreen<C> {
    fn on_enter(&mut self) -> Result<()> {
        let now = self.clock.now();
        let text = format!("{TIME_PREFIX}{}", now.format("%H:%M:%S"));
        debug!("clock screen activated: {text}");
        self.layout.set_text(self.time_text, text);
        self.activated = true;
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        if !self.activated {
            // Activation must have run; a blank label would hide the bug
            bail!("clock screen rendered before activation");
        }
        self.layout.render(frame, area, " timeview ");
        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<ScreenAction> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => Ok(ScreenAction::Quit),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Ok(ScreenAction::Quit)
                }
                _ => Ok(ScreenAction::None),
            },
            _ => Ok(ScreenAction::None),
        }
    }
}
