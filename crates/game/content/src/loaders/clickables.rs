//! Clickable layout loader.

use std::path::Path;

use adventure_core::{ClickableLayout, ClickableRegion};

use crate::loaders::{LoadResult, read_ron};

/// Loader for clickable regions from RON files. Later entries are drawn on
/// top and win hit tests.
pub struct ClickablesLoader;

impl ClickablesLoader {
    pub fn load(path: &Path) -> LoadResult<ClickableLayout> {
        let regions: Vec<ClickableRegion> = read_ron(path, "clickables")?;
        tracing::debug!(path = %path.display(), regions = regions.len(), "loaded clickable layout");
        Ok(ClickableLayout::new(regions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adventure_core::{Rect, RegionId, RegionScope, StateId};
    use std::io::Write;

    #[test]
    fn scope_and_target_are_optional() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
    (id: "play", scope: State("splash"), rect: (x: 540.0, y: 600.0, width: 200.0, height: 60.0),
     label: "Play", target: Some("intro")),
    (id: "about", rect: (x: 0.0, y: 0.0, width: 10.0, height: 10.0)),
]"#
        )
        .unwrap();

        let layout = ClickablesLoader::load(file.path()).unwrap();

        let play = layout.get(&RegionId::new("play")).unwrap();
        assert_eq!(play.scope, RegionScope::State(StateId::new("splash")));
        assert_eq!(play.rect, Rect::new(540.0, 600.0, 200.0, 60.0));
        assert_eq!(play.target, Some(StateId::new("intro")));

        let about = layout.get(&RegionId::new("about")).unwrap();
        assert_eq!(about.scope, RegionScope::Global);
        assert!(about.label.is_empty());
        assert!(about.target.is_none());
    }
}
