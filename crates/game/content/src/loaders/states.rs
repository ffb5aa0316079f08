//! State table loader.

use std::path::Path;

use adventure_core::{StateDefinition, StateTable};

use crate::loaders::{LoadResult, read_ron};

/// Loader for the state table from RON files.
///
/// The file is a list of state rows:
///
/// ```ron
/// [
///     (id: "splash", room: "splash", transitions: [("SPACE", "intro")]),
///     (id: "level_one", room: "level_one", avatar_visible: true,
///      exits: (east: Some("level_two"))),
/// ]
/// ```
pub struct StatesLoader;

impl StatesLoader {
    pub fn load(path: &Path) -> LoadResult<StateTable> {
        let rows: Vec<StateDefinition> = read_ron(path, "states")?;
        tracing::debug!(path = %path.display(), states = rows.len(), "loaded state table");
        Ok(StateTable::new(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adventure_core::{Edge, KeySymbol, StateId};
    use std::io::Write;

    #[test]
    fn loads_rows_in_file_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
    (id: "splash", room: "splash", transitions: [(" ", "intro")]),
    (id: "intro", room: "intro", avatar_visible: true, exits: (east: Some("splash"))),
]"#
        )
        .unwrap();

        let table = StatesLoader::load(file.path()).unwrap();

        let splash = table.first().unwrap();
        assert_eq!(splash.id, StateId::new("splash"));
        assert!(!splash.avatar_visible);
        assert_eq!(
            splash.transitions,
            vec![(KeySymbol::space(), StateId::new("intro"))]
        );

        let intro = table.get(&StateId::new("intro")).unwrap();
        assert!(intro.avatar_visible);
        assert_eq!(intro.exits.get(Edge::East), Some(&StateId::new("splash")));
    }

    #[test]
    fn parse_errors_name_the_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[ (id: \"oops\" ]").unwrap();

        let err = StatesLoader::load(file.path()).unwrap_err().to_string();
        assert!(err.contains("states"));
        assert!(err.contains(&file.path().display().to_string()));
    }
}
