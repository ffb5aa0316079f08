//! Room catalog loader.

use std::collections::BTreeMap;
use std::path::Path;

use adventure_core::{RoomId, RoomRegistry, RoomSpec};

use crate::loaders::{LoadResult, read_ron};

/// Room descriptions keyed by room id, as written in `rooms.ron`.
///
/// ```ron
/// {
///     "splash": Narrative((background: "splash")),
///     "level_one": Level((
///         background: "level_one",
///         props: [(id: "food", center: (x: 200.0, y: 550.0),
///                  size: (width: 100.0, height: 53.0), sprite: "props/food")],
///     )),
/// }
/// ```
#[derive(Clone, Debug, Default)]
pub struct RoomCatalog {
    specs: BTreeMap<RoomId, RoomSpec>,
}

impl RoomCatalog {
    pub fn new(specs: BTreeMap<RoomId, RoomSpec>) -> Self {
        Self { specs }
    }

    pub fn get(&self, id: &RoomId) -> Option<&RoomSpec> {
        self.specs.get(id)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Builds one room per entry.
    pub fn into_registry(self) -> RoomRegistry {
        self.specs
            .into_iter()
            .fold(RoomRegistry::new(), |registry, (id, spec)| {
                registry.with(id, spec.into_room())
            })
    }
}

/// Loader for the room catalog from RON files.
pub struct RoomsLoader;

impl RoomsLoader {
    pub fn load(path: &Path) -> LoadResult<RoomCatalog> {
        let specs: BTreeMap<RoomId, RoomSpec> = read_ron(path, "rooms")?;
        tracing::debug!(path = %path.display(), rooms = specs.len(), "loaded room catalog");
        Ok(RoomCatalog::new(specs))
    }
}
