//! Configuration file specs

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn config_file_drives_the_stages() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
use_teleport = false
write_coordinates = false
miner_set_name = "DoL Miner"
identified_item_format = ""
"#,
    )
    .unwrap();
    let config = Config::load(&path).unwrap();

    let mut world = World::with_config(config);
    world.gatherer.register_item_name("Rock Salt", None);
    world.run(&["identify", "mapmarker", "gearchange", "teleport"]);

    assert!(world.chat().is_empty());
    assert_eq!(world.host.map.flags(), vec![cape_westwind().map_link()]);
    assert_eq!(
        world.host.commands.commands(),
        vec!["/gearset change \"DoL Miner\""]
    );
    assert!(world.host.teleport.calls().is_empty());
}

#[test]
fn missing_config_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let config = Config::load_or_default(&dir.path().join("absent.toml")).unwrap();

    assert_eq!(config, Config::default());
}
