//! Interaction table: `(state, trigger) → effect` rules.

use crate::ids::{KeySymbol, PropId, RegionId, StateId};
use crate::overlay::Narration;

/// What happened in the current state.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Trigger {
    Key(KeySymbol),
    Click(RegionId),
    /// The player overlaps a trigger prop of the current room.
    Overlap(PropId),
}

impl std::fmt::Display for Trigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trigger::Key(key) => write!(f, "key '{key}'"),
            Trigger::Click(region) => write!(f, "click on '{region}'"),
            Trigger::Overlap(prop) => write!(f, "overlap with '{prop}'"),
        }
    }
}

/// What the rule does when it fires.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effect {
    /// Transition to another state.
    Goto(StateId),
    /// Replace the prop's narration. Only meaningful for overlap triggers.
    Narrate(Narration),
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InteractionRule {
    pub state: StateId,
    pub trigger: Trigger,
    pub effect: Effect,
}

impl InteractionRule {
    pub fn new(state: impl Into<StateId>, trigger: Trigger, effect: Effect) -> Self {
        Self {
            state: state.into(),
            trigger,
            effect,
        }
    }

    pub fn goto(state: impl Into<StateId>, trigger: Trigger, target: impl Into<StateId>) -> Self {
        Self::new(state, trigger, Effect::Goto(target.into()))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InteractionTable {
    pub rules: Vec<InteractionRule>,
}

impl InteractionTable {
    pub fn new(rules: Vec<InteractionRule>) -> Self {
        Self { rules }
    }

    pub fn iter(&self) -> impl Iterator<Item = &InteractionRule> {
        self.rules.iter()
    }

    /// First rule matching the pair. Validation guarantees there is at most
    /// one.
    pub fn find(&self, state: &StateId, trigger: &Trigger) -> Option<&Effect> {
        self.rules
            .iter()
            .find(|r| &r.state == state && &r.trigger == trigger)
            .map(|r| &r.effect)
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
