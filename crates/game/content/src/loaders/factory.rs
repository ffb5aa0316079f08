//! Content factory for building adventure inputs from data files.

use std::path::{Path, PathBuf};

use adventure_core::{
    AdventureManager, AdventureTables, ClickableLayout, GameConfig, InteractionTable, RoomRegistry,
    StateTable,
};

use crate::loaders::{
    ClickablesLoader, ConfigLoader, FsAssetSource, InteractionsLoader, LoadResult, RoomCatalog,
    RoomsLoader, StatesLoader,
};

/// Content factory that loads all adventure content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── states.ron
/// ├── interactions.ron
/// ├── clickables.ron
/// ├── rooms.ron
/// └── assets/
///     ├── splash.txt
///     └── props/
///         └── food.txt
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

/// Everything [`AdventureManager::initialize`] needs.
pub struct Content {
    pub config: GameConfig,
    pub tables: AdventureTables,
    pub rooms: RoomRegistry,
    pub assets: FsAssetSource,
}

impl Content {
    /// Validates the content and enters the start state.
    pub fn initialize(self) -> LoadResult<AdventureManager> {
        let Content {
            config,
            tables,
            rooms,
            assets,
        } = self;
        AdventureManager::initialize(tables, rooms, config, &assets)
            .map_err(|e| anyhow::anyhow!("Invalid adventure content ({}): {}", e.code(), e))
    }
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`. A missing file means
    /// defaults.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::info!(path = %path.display(), "no config file, using defaults");
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the state table from `states.ron`.
    pub fn load_states(&self) -> LoadResult<StateTable> {
        StatesLoader::load(&self.data_dir.join("states.ron"))
    }

    /// Load interaction rules from `interactions.ron`. Optional.
    pub fn load_interactions(&self) -> LoadResult<InteractionTable> {
        let path = self.data_dir.join("interactions.ron");
        if !path.exists() {
            return Ok(InteractionTable::default());
        }
        InteractionsLoader::load(&path)
    }

    /// Load clickable regions from `clickables.ron`. Optional.
    pub fn load_clickables(&self) -> LoadResult<ClickableLayout> {
        let path = self.data_dir.join("clickables.ron");
        if !path.exists() {
            return Ok(ClickableLayout::default());
        }
        ClickablesLoader::load(&path)
    }

    /// Load the three adventure tables.
    pub fn load_tables(&self) -> LoadResult<AdventureTables> {
        Ok(AdventureTables::new(
            self.load_states()?,
            self.load_interactions()?,
            self.load_clickables()?,
        ))
    }

    /// Load the room catalog from `rooms.ron`.
    pub fn load_rooms(&self) -> LoadResult<RoomCatalog> {
        RoomsLoader::load(&self.data_dir.join("rooms.ron"))
    }

    /// Asset source rooted at `assets/`.
    pub fn asset_source(&self) -> FsAssetSource {
        FsAssetSource::new(self.data_dir.join("assets"))
    }

    /// Load every file of the content directory.
    pub fn load(&self) -> LoadResult<Content> {
        let config = self.load_config()?;
        let tables = self.load_tables()?;
        let rooms = self.load_rooms()?.into_registry();

        tracing::info!(
            data_dir = %self.data_dir.display(),
            states = tables.states.len(),
            rooms = rooms.len(),
            "content loaded"
        );

        Ok(Content {
            config,
            tables,
            rooms,
            assets: self.asset_source(),
        })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
        assert_eq!(
            factory.asset_source().root(),
            Path::new("/tmp/data/assets")
        );
    }

    #[test]
    fn optional_files_default_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());

        assert_eq!(factory.load_config().unwrap(), GameConfig::default());
        assert!(factory.load_interactions().unwrap().is_empty());
        assert!(factory.load_clickables().unwrap().regions.is_empty());
        assert!(factory.load_states().is_err());
    }
}
