//! Configuration tables consumed by the adventure manager.
//!
//! Tables are plain data. They are read-only after
//! [`AdventureManager::initialize`](crate::engine::AdventureManager::initialize)
//! has validated every cross-reference.

mod clickables;
mod interactions;
mod states;

pub use clickables::{ClickableLayout, ClickableRegion, RegionScope};
pub use interactions::{Effect, InteractionRule, InteractionTable, Trigger};
pub use states::{Exits, StateDefinition, StateTable};

/// The three tables that describe an adventure.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdventureTables {
    pub states: StateTable,
    pub interactions: InteractionTable,
    pub clickables: ClickableLayout,
}

impl AdventureTables {
    pub fn new(
        states: StateTable,
        interactions: InteractionTable,
        clickables: ClickableLayout,
    ) -> Self {
        Self {
            states,
            interactions,
            clickables,
        }
    }
}
