//! Clickable layout: screen-space buttons and where they lead.

use crate::geometry::Rect;
use crate::ids::{RegionId, StateId};

/// Which states a region is shown in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RegionScope {
    #[default]
    Global,
    State(StateId),
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClickableRegion {
    pub id: RegionId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub scope: RegionScope,
    pub rect: Rect,
    #[cfg_attr(feature = "serde", serde(default))]
    pub label: String,
    /// Default destination; an interaction rule for the current state takes
    /// precedence.
    #[cfg_attr(feature = "serde", serde(default))]
    pub target: Option<StateId>,
}

impl ClickableRegion {
    pub fn new(id: impl Into<RegionId>, rect: Rect, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            scope: RegionScope::Global,
            rect,
            label: label.into(),
            target: None,
        }
    }

    pub fn in_state(mut self, state: impl Into<StateId>) -> Self {
        self.scope = RegionScope::State(state.into());
        self
    }

    pub fn leads_to(mut self, target: impl Into<StateId>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn is_visible_in(&self, state: &StateId) -> bool {
        match &self.scope {
            RegionScope::Global => true,
            RegionScope::State(scoped) => scoped == state,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClickableLayout {
    pub regions: Vec<ClickableRegion>,
}

impl ClickableLayout {
    pub fn new(regions: Vec<ClickableRegion>) -> Self {
        Self { regions }
    }

    pub fn get(&self, id: &RegionId) -> Option<&ClickableRegion> {
        self.regions.iter().find(|r| &r.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClickableRegion> {
        self.regions.iter()
    }
}
