//! Asset references and resolution.
//!
//! The core never reads files. Rooms resolve their [`AssetKey`]s through an
//! [`AssetSource`] during `preload`; a source that cannot find an asset hands
//! back a placeholder so a missing picture degrades the visuals instead of
//! stopping the game.

use std::collections::HashMap;
use std::sync::Arc;

use crate::ids::AssetKey;

/// A resolved asset. `art` is `None` for placeholders.
#[derive(Clone, Debug, PartialEq)]
pub struct Asset {
    pub key: AssetKey,
    pub art: Option<Arc<str>>,
}

impl Asset {
    pub fn loaded(key: AssetKey, art: impl Into<Arc<str>>) -> Self {
        Self {
            key,
            art: Some(art.into()),
        }
    }

    pub fn placeholder(key: AssetKey) -> Self {
        Self { key, art: None }
    }

    pub fn is_placeholder(&self) -> bool {
        self.art.is_none()
    }
}

/// Resolves asset keys to content.
///
/// Implementations report missing assets themselves (logging) and must
/// always return something drawable.
pub trait AssetSource {
    fn resolve(&self, key: &AssetKey) -> Asset;
}

/// In-memory source, mostly for tests and tools.
#[derive(Clone, Debug, Default)]
pub struct StaticAssets {
    entries: HashMap<AssetKey, Arc<str>>,
}

impl StaticAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<AssetKey>, art: impl Into<Arc<str>>) -> Self {
        self.entries.insert(key.into(), art.into());
        self
    }
}

impl AssetSource for StaticAssets {
    fn resolve(&self, key: &AssetKey) -> Asset {
        match self.entries.get(key) {
            Some(art) => Asset::loaded(key.clone(), Arc::clone(art)),
            None => {
                tracing::warn!(asset = %key, "asset missing, using placeholder");
                Asset::placeholder(key.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_assets_fall_back_to_placeholders() {
        let assets = StaticAssets::new().with("splash", "~~ art ~~");
        assert!(!assets.resolve(&AssetKey::new("splash")).is_placeholder());
        assert!(assets.resolve(&AssetKey::new("nope")).is_placeholder());
    }
}
