//! Room registry keyed by room id.

use std::collections::BTreeMap;

use crate::ids::RoomId;

use super::{PreloadContext, Room};

/// Owns every room for the life of the process.
///
/// Rooms are kept in id order so preloading (and its log output) is
/// deterministic.
#[derive(Default)]
pub struct RoomRegistry {
    rooms: BTreeMap<RoomId, Box<dyn Room>>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a room, returning the one it replaced.
    pub fn register(
        &mut self,
        id: impl Into<RoomId>,
        room: Box<dyn Room>,
    ) -> Option<Box<dyn Room>> {
        self.rooms.insert(id.into(), room)
    }

    pub fn with(mut self, id: impl Into<RoomId>, room: Box<dyn Room>) -> Self {
        self.register(id, room);
        self
    }

    pub fn contains(&self, id: &RoomId) -> bool {
        self.rooms.contains_key(id)
    }

    pub fn get(&self, id: &RoomId) -> Option<&dyn Room> {
        self.rooms.get(id).map(|r| r.as_ref())
    }

    pub fn get_mut(&mut self, id: &RoomId) -> Option<&mut (dyn Room + 'static)> {
        self.rooms.get_mut(id).map(|r| r.as_mut())
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Runs `preload` on every room exactly once.
    pub(crate) fn preload_all(&mut self, ctx: &PreloadContext<'_>) {
        for (id, room) in self.rooms.iter_mut() {
            tracing::debug!(room = %id, "preloading room");
            room.preload(ctx);
        }
    }
}

impl std::fmt::Debug for RoomRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoomRegistry")
            .field("rooms", &self.rooms.keys().collect::<Vec<_>>())
            .finish()
    }
}
