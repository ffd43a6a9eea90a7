//! Screen controllers for the application.
//!
//! Each screen controller owns its state and handles both rendering and
//! events. The app routes events to the current screen and fires `on_enter`
//! when a screen becomes active.

pub mod clock;
pub mod screen_trait;

pub use clock::ClockScreen;
pub use screen_trait::{Screen, ScreenAction};
