//! File-system asset source.

use std::path::{Path, PathBuf};

use adventure_core::{Asset, AssetKey, AssetSource};

/// Resolves `key` to `<root>/<key>.txt`, a block of text art.
///
/// Missing or unreadable files are logged and become placeholders; they
/// never stop the game.
#[derive(Clone, Debug)]
pub struct FsAssetSource {
    root: PathBuf,
}

impl FsAssetSource {
    pub const EXTENSION: &'static str = "txt";

    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, key: &AssetKey) -> PathBuf {
        self.root.join(format!("{}.{}", key.as_str(), Self::EXTENSION))
    }
}

impl AssetSource for FsAssetSource {
    fn resolve(&self, key: &AssetKey) -> Asset {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(art) => {
                tracing::trace!(asset = %key, path = %path.display(), "asset loaded");
                Asset::loaded(key.clone(), art.trim_end_matches('\n'))
            }
            Err(error) => {
                tracing::warn!(
                    asset = %key,
                    path = %path.display(),
                    %error,
                    "asset missing, using placeholder"
                );
                Asset::placeholder(key.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_nested_keys_and_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("props")).unwrap();
        std::fs::write(dir.path().join("props/food.txt"), "[=]\n").unwrap();

        let assets = FsAssetSource::new(dir.path());

        let food = assets.resolve(&AssetKey::new("props/food"));
        assert_eq!(food.art.as_deref(), Some("[=]"));

        let missing = assets.resolve(&AssetKey::new("props/mask"));
        assert!(missing.is_placeholder());
        assert_eq!(missing.key, AssetKey::new("props/mask"));
    }
}
