//! Interaction table loader.

use std::path::Path;

use adventure_core::{InteractionRule, InteractionTable};

use crate::loaders::{LoadResult, read_ron};

/// Loader for interaction rules from RON files.
///
/// ```ron
/// [
///     (state: "level_two", trigger: Overlap("mask"), effect: Goto("saved")),
///     (state: "level_one", trigger: Overlap("food"),
///      effect: Narrate((label: "Level 1", text: "..."))),
/// ]
/// ```
pub struct InteractionsLoader;

impl InteractionsLoader {
    pub fn load(path: &Path) -> LoadResult<InteractionTable> {
        let rules: Vec<InteractionRule> = read_ron(path, "interactions")?;
        tracing::debug!(path = %path.display(), rules = rules.len(), "loaded interaction table");
        Ok(InteractionTable::new(rules))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adventure_core::{Effect, StateId, Trigger};
    use std::io::Write;

    #[test]
    fn loads_goto_and_narrate_rules() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
    (state: "level_two", trigger: Overlap("mask"), effect: Goto("saved")),
    (state: "level_one", trigger: Overlap("food"),
     effect: Narrate((label: "Level 1", text: "Find food"))),
    (state: "splash", trigger: Click("play"), effect: Goto("intro")),
]"#
        )
        .unwrap();

        let table = InteractionsLoader::load(file.path()).unwrap();

        assert_eq!(
            table.find(&StateId::new("level_two"), &Trigger::Overlap("mask".into())),
            Some(&Effect::Goto(StateId::new("saved")))
        );
        match table.find(&StateId::new("level_one"), &Trigger::Overlap("food".into())) {
            Some(Effect::Narrate(n)) => assert_eq!(n.label, "Level 1"),
            other => panic!("expected narrate, got {other:?}"),
        }
        assert!(
            table
                .find(&StateId::new("splash"), &Trigger::Click("play".into()))
                .is_some()
        );
    }
}
