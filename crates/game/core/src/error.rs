//! Configuration errors raised while initializing the adventure.
//!
//! Every reference between tables is checked once, up front. A game that
//! initializes successfully can never hit a dangling id mid-session, so
//! runtime input handling has no error path at all.

use crate::ids::{KeySymbol, PropId, RegionId, RoomId, StateId};

/// Reason the adventure refuses to start.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("state table is empty")]
    EmptyStateTable,

    #[error("state '{0}' is defined more than once")]
    DuplicateState(StateId),

    #[error("clickable '{0}' is defined more than once")]
    DuplicateRegion(RegionId),

    #[error("start state '{0}' is not in the state table")]
    UnknownStartState(StateId),

    #[error("state '{state}' uses room '{room}' which is not registered")]
    UnknownRoom { state: StateId, room: RoomId },

    #[error("{context} refers to unknown state '{target}'")]
    UnknownState { context: String, target: StateId },

    #[error("{context} refers to unknown clickable '{region}'")]
    UnknownRegion { context: String, region: RegionId },

    #[error("{context} refers to prop '{prop}' which room '{room}' does not have")]
    UnknownProp {
        context: String,
        room: RoomId,
        prop: PropId,
    },

    #[error("state '{state}' has a transition with an empty input symbol")]
    EmptyInputSymbol { state: StateId },

    #[error("state '{state}' binds reserved key '{key}'")]
    ReservedSymbol { state: StateId, key: KeySymbol },

    #[error("state '{state}' has more than one rule for {trigger}")]
    AmbiguousTransition { state: StateId, trigger: String },

    #[error("state '{state}': narrate effect needs an overlap trigger, found {trigger}")]
    NarrateWithoutOverlap { state: StateId, trigger: String },
}

impl ConfigError {
    /// Static identifier for the variant, handy for logs and tests.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EmptyStateTable => "empty_state_table",
            Self::DuplicateState(_) => "duplicate_state",
            Self::DuplicateRegion(_) => "duplicate_region",
            Self::UnknownStartState(_) => "unknown_start_state",
            Self::UnknownRoom { .. } => "unknown_room",
            Self::UnknownState { .. } => "unknown_state",
            Self::UnknownRegion { .. } => "unknown_region",
            Self::UnknownProp { .. } => "unknown_prop",
            Self::EmptyInputSymbol { .. } => "empty_input_symbol",
            Self::ReservedSymbol { .. } => "reserved_symbol",
            Self::AmbiguousTransition { .. } => "ambiguous_transition",
            Self::NarrateWithoutOverlap { .. } => "narrate_without_overlap",
        }
    }
}
