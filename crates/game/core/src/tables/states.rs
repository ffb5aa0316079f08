//! State table: the nodes of the room graph.

use crate::ids::{KeySymbol, RoomId, StateId};
use crate::player::Edge;

/// Target states reached by walking off each canvas edge.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Exits {
    pub north: Option<StateId>,
    pub south: Option<StateId>,
    pub east: Option<StateId>,
    pub west: Option<StateId>,
}

impl Exits {
    pub fn get(&self, edge: Edge) -> Option<&StateId> {
        match edge {
            Edge::North => self.north.as_ref(),
            Edge::South => self.south.as_ref(),
            Edge::East => self.east.as_ref(),
            Edge::West => self.west.as_ref(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Edge, &StateId)> {
        [Edge::North, Edge::South, Edge::East, Edge::West]
            .into_iter()
            .filter_map(|edge| self.get(edge).map(|target| (edge, target)))
    }
}

/// One row of the state table.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateDefinition {
    pub id: StateId,
    pub room: RoomId,
    /// Whether the avatar is drawn and can move in this state.
    #[cfg_attr(feature = "serde", serde(default))]
    pub avatar_visible: bool,
    /// Key transitions. Kept as a list so duplicate keys reach validation
    /// instead of being collapsed by a map.
    #[cfg_attr(feature = "serde", serde(default))]
    pub transitions: Vec<(KeySymbol, StateId)>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub exits: Exits,
}

impl StateDefinition {
    pub fn new(id: impl Into<StateId>, room: impl Into<RoomId>) -> Self {
        Self {
            id: id.into(),
            room: room.into(),
            avatar_visible: false,
            transitions: Vec::new(),
            exits: Exits::default(),
        }
    }

    pub fn with_avatar(mut self) -> Self {
        self.avatar_visible = true;
        self
    }

    pub fn on_key(mut self, key: impl Into<KeySymbol>, target: impl Into<StateId>) -> Self {
        self.transitions.push((key.into(), target.into()));
        self
    }

    pub fn exit(mut self, edge: Edge, target: impl Into<StateId>) -> Self {
        let target = Some(target.into());
        match edge {
            Edge::North => self.exits.north = target,
            Edge::South => self.exits.south = target,
            Edge::East => self.exits.east = target,
            Edge::West => self.exits.west = target,
        }
        self
    }
}

/// Ordered list of states; the first row is the default start state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateTable {
    pub states: Vec<StateDefinition>,
}

impl StateTable {
    pub fn new(states: Vec<StateDefinition>) -> Self {
        Self { states }
    }

    pub fn get(&self, id: &StateId) -> Option<&StateDefinition> {
        self.states.iter().find(|s| &s.id == id)
    }

    pub fn contains(&self, id: &StateId) -> bool {
        self.get(id).is_some()
    }

    pub fn first(&self) -> Option<&StateDefinition> {
        self.states.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StateDefinition> {
        self.states.iter()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
