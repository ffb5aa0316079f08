//! Content loaders for reading adventure data from files.
//!
//! Each loader reads one file and returns adventure-core types. Parse errors
//! carry the file path so a broken content directory is easy to fix.

pub mod assets;
pub mod clickables;
pub mod config;
pub mod factory;
pub mod interactions;
pub mod rooms;
pub mod states;

pub use assets::FsAssetSource;
pub use clickables::ClickablesLoader;
pub use config::ConfigLoader;
pub use factory::{Content, ContentFactory};
pub use interactions::InteractionsLoader;
pub use rooms::{RoomCatalog, RoomsLoader};
pub use states::StatesLoader;

use std::path::Path;

use serde::de::DeserializeOwned;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Reads and parses a RON file.
pub(crate) fn read_ron<T: DeserializeOwned>(path: &Path, what: &str) -> LoadResult<T> {
    let content = read_file(path)?;
    ron::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Failed to parse {} RON {}: {}", what, path.display(), e))
}
