use mindgarden::{App, Commands, Config, GardenStore};
use tempfile::tempdir;

fn test_config(dir: &std::path::Path) -> Config {
    Config {
        garden_file: dir.join("garden.json"),
        export_dir: dir.join("exports"),
    }
}

#[test]
fn plant_then_uproot_round_trips_the_mirror() {
    let dir = tempdir().expect("tempdir");
    let config = test_config(dir.path());

    let mut store = GardenStore::load(config.clone());
    assert!(store.is_empty());

    let id = store
        .add("Feeling okay today", "calm")
        .map(|plant| plant.id.clone())
        .expect("planted");

    let raw = std::fs::read_to_string(&config.garden_file).expect("mirror");
    let snapshot: serde_json::Value = serde_json::from_str(&raw).expect("snapshot json");
    let entries = snapshot.as_array().expect("array snapshot");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["text"], "Feeling okay today");
    assert_eq!(entries[0]["mood"], "calm");
    assert!(entries[0]["createdAt"].is_i64());

    assert!(store.remove(&id));
    assert_eq!(store.len(), 0);

    let raw = std::fs::read_to_string(&config.garden_file).expect("mirror");
    assert_eq!(raw.trim(), "[]");
}

#[test]
fn a_new_session_sees_the_previous_garden() {
    let dir = tempdir().expect("tempdir");
    let config = test_config(dir.path());

    let mut store = GardenStore::load(config.clone());
    store.add("carry me over", "hopeful").expect("planted");
    drop(store);

    let next_session = GardenStore::load(config);
    assert_eq!(next_session.len(), 1);
    assert_eq!(next_session.all()[0].text, "carry me over");
    assert_eq!(next_session.all()[0].mood, "hopeful");
}

#[test]
fn export_writes_the_scene_and_one_file_per_plant() {
    let dir = tempdir().expect("tempdir");
    let config = test_config(dir.path());

    let mut store = GardenStore::load(config.clone());
    let id = store
        .add("bloom where planted", "grateful")
        .map(|plant| plant.id.clone())
        .expect("planted");

    let out = dir.path().join("svg-out");
    let mut app = App::new(store, config, false);
    app.run(Commands::Export {
        output: Some(out.clone()),
    })
    .expect("export");

    assert!(out.join("garden.svg").exists());
    let plant_svg =
        std::fs::read_to_string(out.join(format!("plant-{}.svg", id))).expect("plant svg");
    // A fresh plant renders as a seed: soil only, no mood color yet.
    assert!(plant_svg.contains("#d4a574"));
    assert!(!plant_svg.contains("#ffb3ba"));
}

#[test]
fn uprooting_an_unknown_id_is_an_error_at_the_cli_surface() {
    let dir = tempdir().expect("tempdir");
    let config = test_config(dir.path());

    let store = GardenStore::load(config.clone());
    let mut app = App::new(store, config, false);

    let result = app.run(Commands::Uproot {
        id: "no-such-plant".to_string(),
    });
    assert!(result.is_err());
}
