//! Loading state.

use serde::Serialize;

/// The two states of the loading toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadingState {
    #[default]
    Idle,
    Loading,
}

impl LoadingState {
    pub fn toggled(self) -> Self {
        match self {
            LoadingState::Idle => LoadingState::Loading,
            LoadingState::Loading => LoadingState::Idle,
        }
    }

    pub fn is_loading(self) -> bool {
        self == LoadingState::Loading
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LoadingState::Idle => "idle",
            LoadingState::Loading => "loading",
        }
    }

    /// Label of the control that flips this state.
    pub fn button_label(self) -> &'static str {
        match self {
            LoadingState::Idle => "Toggle Loading",
            LoadingState::Loading => "Stop Loading",
        }
    }

    pub fn button_color(self) -> &'static str {
        match self {
            LoadingState::Idle => "#667eea",
            LoadingState::Loading => "#dc3545",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_cycle() {
        let start = LoadingState::default();
        assert_eq!(start, LoadingState::Idle);
        assert_eq!(start.toggled(), LoadingState::Loading);
        assert_eq!(start.toggled().toggled(), start);
    }

    #[test]
    fn test_presentation() {
        assert_eq!(LoadingState::Loading.button_label(), "Stop Loading");
        assert_eq!(LoadingState::Idle.button_color(), "#667eea");
    }
}
