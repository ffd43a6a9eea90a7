//! Theme and style system for timeview
//!
//! A single global theme, updatable at startup (`--no-colors` / `NO_COLOR`).

use ratatui::style::{Color, Modifier, Style};
use std::sync::RwLock;

/// Global theme instance (supports runtime updates)
static THEME: RwLock<Theme> = RwLock::new(Theme {
    theme_type: ThemeType::Dark,
    primary: Color::Cyan,
    text: Color::White,
    text_muted: Color::DarkGray,
    border_focused: Color::Cyan,
});

/// Initialize the global theme (call once at startup)
pub fn init_theme(theme_type: ThemeType) {
    let mut theme = THEME.write().unwrap();
    *theme = Theme::new(theme_type);
}

/// Get the current theme
pub fn theme() -> Theme {
    THEME.read().unwrap().clone()
}

/// Theme type selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeType {
    #[default]
    Dark,
    /// Disable all UI colors (equivalent to `NO_COLOR=1` / `--no-colors`)
    NoColor,
}

/// Color palette for the application
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme type
    pub theme_type: ThemeType,
    /// Main accent color (borders, titles)
    pub primary: Color,
    /// Body text
    pub text: Color,
    /// De-emphasized text (hints)
    pub text_muted: Color,
    /// Focused borders
    pub border_focused: Color,
}

impl Theme {
    /// Create a theme of the given type
    pub fn new(theme_type: ThemeType) -> Self {
        match theme_type {
            ThemeType::Dark => Self {
                theme_type,
                primary: Color::Cyan,
                text: Color::White,
                text_muted: Color::DarkGray,
                border_focused: Color::Cyan,
            },
            ThemeType::NoColor => Self {
                theme_type,
                primary: Color::Reset,
                text: Color::Reset,
                text_muted: Color::Reset,
                border_focused: Color::Reset,
            },
        }
    }

    /// Style for screen titles
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for body text
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Style for hint text
    pub fn hint_style(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for the screen border
    pub fn border_focused_style(&self) -> Style {
        Style::default().fg(self.border_focused)
    }
}
