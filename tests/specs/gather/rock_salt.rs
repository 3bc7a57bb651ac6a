//! Gathering Rock Salt by name

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn identify_then_teleport_with_teleport_disabled() {
    let mut world = World::with_config(Config {
        use_teleport: false,
        ..Config::default()
    });

    world.gatherer.register_item_name("Rock Salt", None);
    world.run(&["identify", "teleport"]);

    assert_eq!(
        world.chat(),
        vec!["Identified [5518: Rock Salt] for \"Rock Salt\"."]
    );
    assert_eq!(
        world.uptime.queries(),
        vec![UptimeQuery::Best { item: rock_salt().id }]
    );
    assert_eq!(world.gatherer.request().location, Some(cape_westwind()));
    assert!(world.host.teleport.calls().is_empty());
    assert!(world.host.commands.commands().is_empty());
    assert!(world.host.chat.errors().is_empty());
}

#[test]
fn full_sequence_as_a_miner() {
    let mut world = World::new();

    world.gatherer.register_item_name("rock salt", Some(GatheringType::Miner));
    world.run(&["identify", "mapmarker", "gearchange", "teleport", "additionalinfo"]);

    assert_eq!(
        world.chat(),
        vec![
            "Identified [5518: Rock Salt] for \"rock salt\".",
            "Cape Westwind (Western Thanalan) x: 23.0, y: 21.5",
        ]
    );
    assert_eq!(
        world.uptime.queries(),
        vec![UptimeQuery::Next {
            item: rock_salt().id,
            kind: GatheringType::Miner,
            now: now(),
        }]
    );
    assert_eq!(world.host.map.flags(), vec![cape_westwind().map_link()]);
    assert_eq!(
        world.host.commands.commands(),
        vec!["/gearset change \"Miner\""]
    );
    assert_eq!(
        world.host.teleport.calls(),
        vec![TeleportCall::Checked(HORIZON)]
    );
}

#[test]
fn standing_next_to_the_node_skips_the_teleport() {
    let mut world = World::new();
    world
        .game
        .place_player(THANALAN, Position::new(70.0, 0.0, 0.0));

    world.gatherer.register_item_name("Rock Salt", None);
    world.run(&["identify", "teleport"]);

    assert!(world.host.teleport.calls().is_empty());
}

#[test]
fn misspelled_name_is_reported_and_later_stages_do_nothing() {
    let mut world = World::new();

    world.gatherer.register_item_name("Rokc Salt", None);
    world.run(&["identify", "mapmarker", "gearchange", "teleport", "additionalinfo"]);

    assert_eq!(
        world.host.chat.errors(),
        vec!["Could not find corresponding item to \"Rokc Salt\"."]
    );
    assert_eq!(world.chat().len(), 1);
    assert!(world.host.map.flags().is_empty());
    assert!(world.host.commands.commands().is_empty());
    assert!(world.host.teleport.calls().is_empty());
}

#[test]
fn botanist_constraint_finds_nothing() {
    let mut world = World::new();

    world.gatherer.register_item_name("Rock Salt", Some(GatheringType::Botanist));
    world.run(&["identify", "teleport"]);

    assert_eq!(
        world.host.chat.errors(),
        vec!["No associated location found for Rock Salt with condition Botanist."]
    );
    assert!(world.gatherer.request().location.is_none());
    assert!(world.host.teleport.calls().is_empty());
}
