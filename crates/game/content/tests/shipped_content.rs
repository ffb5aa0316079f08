use std::path::PathBuf;

use adventure_content::ContentFactory;
use adventure_core::{KeySymbol, MovementInput, Point, RegionId, Scene, StateId};

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../../data")
}

#[test]
fn shipped_content_loads_and_initializes() {
    let content = ContentFactory::new(data_dir()).load().unwrap();
    assert_eq!(content.tables.states.len(), 12);
    assert_eq!(content.rooms.len(), 12);

    let manager = content.initialize().unwrap();
    assert_eq!(manager.current_state(), &StateId::new("splash"));
    assert!(!manager.player().visible);
}

#[test]
fn shipped_assets_all_resolve() {
    use adventure_core::AssetSource;

    let factory = ContentFactory::new(data_dir());
    let assets = factory.asset_source();
    for key in [
        "dialogue_box",
        "avatars/felicity_idle",
        "avatars/felicity_walk",
        "props/food",
        "props/mask",
        "backgrounds/splash",
        "backgrounds/level_one",
    ] {
        assert!(
            !assets.resolve(&key.into()).is_placeholder(),
            "missing asset {key}"
        );
    }
}

#[test]
fn play_through_sweetfield() {
    let mut manager = ContentFactory::new(data_dir())
        .load()
        .unwrap()
        .initialize()
        .unwrap();
    let space = KeySymbol::space();
    let mut scene = Scene::new();

    let outcome = manager.on_click(&RegionId::new("play_game"));
    assert!(outcome.transition().is_some());
    assert_eq!(manager.current_state().as_str(), "sacrifice_zone_intro");

    for expected in [
        "narrative_intro_one",
        "sweetfield_map_one",
        "narrative_intro_two",
        "sweetfield_map_two",
        "instructions",
        "level_one",
    ] {
        manager.on_key(&space);
        assert_eq!(manager.current_state().as_str(), expected);
    }
    assert!(manager.player().visible);

    // food sits at (200, 550)
    manager.teleport_player(Point::new(220.0, 540.0));
    manager.on_frame(MovementInput::empty(), &mut scene);
    assert_eq!(manager.overlay().label(), "Level 1");
    assert!(manager.overlay().text().starts_with("Sweetfield City is in DANGER!"));

    manager.teleport_player(Point::new(1278.0, 360.0));
    let report = manager.on_frame(MovementInput::RIGHT, &mut scene);
    assert!(report.transition.is_some());
    assert_eq!(manager.current_state().as_str(), "level_two");
    assert!(!manager.overlay().is_visible());

    // the mask's narration comes from the interaction table
    manager.teleport_player(Point::new(600.0, 550.0));
    manager.on_frame(MovementInput::empty(), &mut scene);
    assert_eq!(manager.overlay().label(), "Level 2");
    assert!(manager.overlay().text().starts_with("The air is too toxic"));

    manager.teleport_player(Point::new(1278.0, 300.0));
    manager.on_frame(MovementInput::RIGHT, &mut scene);
    assert_eq!(manager.current_state().as_str(), "sweetfield_saved_b");
    assert!(!manager.player().visible);
    assert!(scene.dialogue().is_none());

    for expected in ["narrative_ending", "climate_justice_alliance", "splash"] {
        manager.on_key(&space);
        assert_eq!(manager.current_state().as_str(), expected);
    }
}

#[test]
fn dangling_reference_in_a_content_dir_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("states.ron"),
        r#"[(id: "start", room: "start", transitions: [("SPACE", "missing")])]"#,
    )
    .unwrap();
    std::fs::write(
        dir.path().join("rooms.ron"),
        r#"{ "start": Narrative((background: "start")) }"#,
    )
    .unwrap();

    let content = ContentFactory::new(dir.path()).load().unwrap();
    let err = content.initialize().unwrap_err().to_string();

    assert!(err.contains("unknown_state"), "{err}");
    assert!(err.contains("missing"), "{err}");
}
