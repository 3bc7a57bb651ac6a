//! Stage dispatch specs

use crate::prelude::*;
use chrono::Duration;
use gb_core::UptimeSchedule;
use similar_asserts::assert_eq;

#[test]
fn unknown_token_is_unhandled_and_silent() {
    let mut world = World::new();
    world.gatherer.register_location(cape_westwind());
    let before = world.gatherer.request().clone();

    assert!(!world.gatherer.dispatch("unknown-token"));
    assert!(!world.gatherer.dispatch("Teleport"));

    assert_eq!(world.gatherer.request(), &before);
    assert!(world.chat().is_empty());
    assert!(world.host.teleport.calls().is_empty());
}

#[test]
fn stages_without_a_request_are_handled_quietly() {
    let mut world = World::new();

    world.run(&["identify", "mapmarker", "gearchange", "teleport", "additionalinfo"]);

    assert!(world.chat().is_empty());
    assert!(world.host.map.flags().is_empty());
    assert!(world.host.commands.commands().is_empty());
    assert!(world.host.teleport.calls().is_empty());
}

#[test]
fn stages_may_run_in_any_order_and_repeat() {
    let mut world = World::new();
    world.gatherer.register_location(cape_westwind());

    world.run(&["teleport", "gearchange", "teleport"]);

    assert_eq!(
        world.host.teleport.calls(),
        vec![TeleportCall::Checked(HORIZON), TeleportCall::Checked(HORIZON)]
    );
    assert_eq!(world.host.commands.commands().len(), 1);
}

#[test]
fn scheduled_node_reports_its_next_uptime() {
    let mut world = World::new();
    let hour = gb_core::eorzea::eorzea_hour(now());
    let mut node = cape_westwind();
    node.schedule = Some(UptimeSchedule::from_hours([(hour + 2) % 24]));

    world.gatherer.register_location(node);
    world.run(&["additionalinfo"]);

    let lines = world.chat();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("Next up in "), "{lines:?}");
}

#[test]
fn uptime_report_follows_the_clock() {
    let mut world = World::new();
    let hour = gb_core::eorzea::eorzea_hour(now());
    let mut node = cape_westwind();
    node.schedule = Some(UptimeSchedule::from_hours([hour]));
    world.gatherer.register_location(node);
    let window = world.gatherer.request().window;

    world.clock.set(window.end() - Duration::seconds(20));
    world.run(&["additionalinfo"]);

    assert_eq!(world.chat(), vec!["Currently up for the next 20s."]);
}

#[test]
fn missing_gear_set_is_reported() {
    let mut world = World::with_config(Config {
        miner_set_name: String::new(),
        ..Config::default()
    });
    world.gatherer.register_location(cape_westwind());

    world.run(&["gearchange"]);

    assert_eq!(
        world.host.chat.errors(),
        vec!["No gear set for Mining configured."]
    );
    assert!(world.host.commands.commands().is_empty());
}

#[test]
fn rejected_gear_command_is_reported() {
    let mut world = World::new();
    world.host.commands.reject_with("no such gear set");
    world.gatherer.register_location(cape_westwind());

    world.run(&["gearchange"]);

    assert_eq!(
        world.host.chat.errors(),
        vec!["Could not execute command: command rejected: no such gear set."]
    );
}

#[test]
fn territory_teleport_uses_an_attuned_aetheryte() {
    let world = World::new();
    world.game.attune(HORIZON);

    world.gatherer.teleport_to_territory(&thanalan());

    assert_eq!(
        world.host.teleport.calls(),
        vec![TeleportCall::Unchecked(HORIZON)]
    );
}

#[test]
fn territory_without_aetherytes_is_reported() {
    let world = World::new();
    let empty = Territory {
        aetherytes: Vec::new(),
        ..(*thanalan()).clone()
    };

    world.gatherer.teleport_to_territory(&empty);

    assert_eq!(
        world.host.chat.errors(),
        vec!["Western Thanalan has no valid aetheryte."]
    );
    assert!(world.host.teleport.calls().is_empty());
}
