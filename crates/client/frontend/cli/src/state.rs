//! Application state that lives outside the adventure manager.

use adventure_core::Transition;

/// Mutable UI state: display mode and the last thing that happened.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Status bar hidden, canvas fills the whole terminal.
    pub fullscreen: bool,
    pub last_transition: Option<Transition>,
    pub transitions: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
        tracing::debug!(fullscreen = self.fullscreen, "Display mode toggled");
    }

    pub fn note_transition(&mut self, transition: &Transition) {
        self.transitions += 1;
        self.last_transition = Some(transition.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adventure_core::{KeySymbol, StateId, TransitionCause};

    #[test]
    fn starts_windowed() {
        let state = AppState::new();
        assert!(!state.fullscreen);
        assert!(state.last_transition.is_none());
    }

    #[test]
    fn toggle_flips_back_and_forth() {
        let mut state = AppState::new();
        state.toggle_fullscreen();
        assert!(state.fullscreen);
        state.toggle_fullscreen();
        assert!(!state.fullscreen);
    }

    #[test]
    fn remembers_last_transition() {
        let mut state = AppState::new();
        let transition = Transition {
            from: StateId::new("splash"),
            to: StateId::new("intro"),
            cause: TransitionCause::Key(KeySymbol::new("ENTER")),
        };
        state.note_transition(&transition);
        assert_eq!(state.transitions, 1);
        assert_eq!(state.last_transition, Some(transition));
    }
}
