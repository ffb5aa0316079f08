//! State transition execution.
//!
//! Every state change runs the same sequence:
//!
//! 1. `unload` the old room
//! 2. hide the overlay and reset button visuals
//! 3. make the target state current
//! 4. `load` the new room
//! 5. show or hide the avatar from the target's avatar flag

use crate::ids::{KeySymbol, PropId, RegionId, StateId};
use crate::player::Edge;
use crate::room::RoomContext;

use super::AdventureManager;

/// Which input moved the adventure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransitionCause {
    Key(KeySymbol),
    Click(RegionId),
    Overlap(PropId),
    Exit(Edge),
}

impl std::fmt::Display for TransitionCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransitionCause::Key(key) => write!(f, "key '{key}'"),
            TransitionCause::Click(region) => write!(f, "click on '{region}'"),
            TransitionCause::Overlap(prop) => write!(f, "overlap with '{prop}'"),
            TransitionCause::Exit(edge) => write!(f, "{edge} exit"),
        }
    }
}

/// A completed state change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: StateId,
    pub to: StateId,
    pub cause: TransitionCause,
}

impl AdventureManager {
    /// Leaves the current state for `target`. Callers filter self-targets.
    pub(super) fn transition_to(&mut self, target: StateId, cause: TransitionCause) -> Transition {
        let leaving = self.current.clone();
        self.run_hook(&leaving, Hook::Unload);
        self.overlay.hide();
        self.clickables.reset_visuals();

        let from = std::mem::replace(&mut self.current, target.clone());
        self.enter_current();

        tracing::info!(%from, to = %target, %cause, "state transition");

        Transition {
            from,
            to: target,
            cause,
        }
    }

    /// Loads the current state's room and applies its avatar flag.
    pub(super) fn enter_current(&mut self) {
        let current = self.current.clone();
        self.run_hook(&current, Hook::Load);

        let visible = self
            .states
            .get(&current)
            .is_some_and(|state| state.avatar_visible);
        self.player.visible = visible;
        if !visible {
            self.player.stop();
        }
    }

    fn run_hook(&mut self, state: &StateId, hook: Hook) {
        let Some(room_id) = self.states.get(state).map(|s| s.room.clone()) else {
            return;
        };
        let Some(room) = self.rooms.get_mut(&room_id) else {
            return;
        };
        let mut ctx = RoomContext::new(
            state,
            &self.player,
            &mut self.overlay,
            &self.interactions,
            self.config.canvas,
        );
        tracing::debug!(room = %room_id, ?hook, "room hook");
        match hook {
            Hook::Load => room.load(&mut ctx),
            Hook::Unload => room.unload(&mut ctx),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Hook {
    Load,
    Unload,
}
