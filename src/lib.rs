//! timeview - a tiny TUI that shows the current local time at launch
//!
//! One screen: on activation it reads the local wall-clock time once and
//! renders it into a text widget. The display is a snapshot, not a live
//! clock.

// Core modules
pub mod app;
pub mod cli;
pub mod clock;
pub mod layout;
pub mod screens;
pub mod styles;
pub mod tui;
pub mod ui;
pub mod widgets;

// Re-exports for convenience
pub use clock::{Clock, FixedClock, SystemClock};
pub use screens::{ClockScreen, Screen, ScreenAction};
