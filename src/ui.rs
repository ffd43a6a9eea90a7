/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    Clock,
}

/// Application UI state
#[derive(Debug)]
pub struct UiState {
    pub current_screen: ScreenId,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            current_screen: ScreenId::Clock,
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
