//! Room capability and the built-in room variants.
//!
//! A room is anything implementing [`Room`]. The manager stores rooms as
//! trait objects in a [`RoomRegistry`] keyed by [`RoomId`] and drives their
//! lifecycle:
//!
//! ```text
//! preload (once) → load → draw* → unload → load → draw* → unload ...
//! ```
//!
//! Every hook has a no-op default so a variant only implements what it uses.

mod level;
mod narrative;
mod registry;

pub use level::{LevelRoom, LevelSpec, PropSpec};
pub use narrative::{NarrativeRoom, NarrativeSpec};
pub use registry::RoomRegistry;

use crate::asset::AssetSource;
use crate::geometry::Size;
use crate::ids::{PropId, StateId};
use crate::overlay::{NarrativeOverlay, Narration};
use crate::player::Player;
use crate::scene::Scene;
use crate::tables::{Effect, InteractionTable, Trigger};

/// Inputs available to `preload`.
pub struct PreloadContext<'a> {
    pub assets: &'a dyn AssetSource,
    pub canvas: Size,
}

/// Inputs available to `load`, `draw` and `unload`.
///
/// The player is read-only; the overlay is the one piece of shared state a
/// room may change.
pub struct RoomContext<'a> {
    pub state: &'a StateId,
    pub player: &'a Player,
    pub overlay: &'a mut NarrativeOverlay,
    pub interactions: &'a InteractionTable,
    pub canvas: Size,
    overlapping: Vec<PropId>,
}

impl<'a> RoomContext<'a> {
    pub fn new(
        state: &'a StateId,
        player: &'a Player,
        overlay: &'a mut NarrativeOverlay,
        interactions: &'a InteractionTable,
        canvas: Size,
    ) -> Self {
        Self {
            state,
            player,
            overlay,
            interactions,
            canvas,
            overlapping: Vec::new(),
        }
    }

    /// Records that the player overlaps `prop` this frame.
    pub fn report_overlap(&mut self, prop: PropId) {
        self.overlapping.push(prop);
    }

    /// Props reported by the last `draw`, in evaluation order.
    pub fn overlapping(&self) -> &[PropId] {
        &self.overlapping
    }

    pub fn into_overlapping(self) -> Vec<PropId> {
        self.overlapping
    }

    /// Narration set by an interaction rule for overlapping `prop` in the
    /// current state.
    pub fn narration_override(&self, prop: &PropId) -> Option<&'a Narration> {
        match self
            .interactions
            .find(self.state, &Trigger::Overlap(prop.clone()))
        {
            Some(Effect::Narrate(narration)) => Some(narration),
            _ => None,
        }
    }
}

/// Lifecycle hooks of a room.
pub trait Room {
    /// Called once at start-up, before the first `load` of any room.
    fn preload(&mut self, _ctx: &PreloadContext<'_>) {}

    /// Called every time the state machine enters this room.
    fn load(&mut self, _ctx: &mut RoomContext<'_>) {}

    /// Called once per frame while the room is current.
    fn draw(&mut self, _ctx: &mut RoomContext<'_>, _scene: &mut Scene) {}

    /// Called once when the state machine leaves this room.
    fn unload(&mut self, _ctx: &mut RoomContext<'_>) {}

    /// Ids of the trigger props this room can report, used to validate
    /// overlap rules.
    fn trigger_props(&self) -> Vec<PropId> {
        Vec::new()
    }
}

/// Data description of a built-in room, as written in `rooms.ron`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoomSpec {
    Narrative(NarrativeSpec),
    Level(LevelSpec),
}

impl RoomSpec {
    pub fn into_room(self) -> Box<dyn Room> {
        match self {
            RoomSpec::Narrative(spec) => Box::new(NarrativeRoom::new(spec)),
            RoomSpec::Level(spec) => Box::new(LevelRoom::new(spec)),
        }
    }
}
