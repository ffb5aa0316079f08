//! Data-driven adventure content and its loaders.
//!
//! This crate turns the files of a content directory into the inputs of
//! [`adventure_core::AdventureManager::initialize`]:
//! - Game configuration (TOML)
//! - State, interaction and clickable tables (RON)
//! - Room catalog (RON), built into a [`adventure_core::RoomRegistry`]
//! - Text-art assets, resolved lazily from `assets/`
//!
//! All loaders use adventure-core types directly with serde for RON/TOML
//! deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ClickablesLoader, ConfigLoader, Content, ContentFactory, FsAssetSource, InteractionsLoader,
    LoadResult, RoomCatalog, RoomsLoader, StatesLoader,
};
