//! Registration specs
//!
//! Every registration replaces the request completely and fires the
//! action sequence; empty input registers nothing.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn location_registration_replaces_a_pending_name() {
    let mut world = World::new();
    world.gatherer.register_item_name("Rock Salt", Some(GatheringType::Miner));

    assert!(world.gatherer.register_location(cape_westwind()));

    let expected = GatherRequest {
        sequence: 2,
        type_constraint: Some(GatheringType::Miner),
        location: Some(cape_westwind()),
        ..GatherRequest::default()
    };
    assert_eq!(world.gatherer.request(), &expected);
    assert_eq!(world.host.sequence.starts(), 2);
}

#[test]
fn item_registration_replaces_a_location() {
    let mut world = World::new();
    world.gatherer.register_location(cape_westwind());

    assert!(world.gatherer.register_item(Some(goby().into()), Some(GatheringType::Miner)));

    let request = world.gatherer.request();
    assert_eq!(request.identify_kind, IdentifyKind::None);
    assert_eq!(request.target, Some(Gatherable::from(goby())));
    assert_eq!(request.type_constraint, None);
    assert_eq!(request.location, Some(cape_westwind()));
    assert_eq!(
        world.uptime.queries(),
        vec![UptimeQuery::Best { item: goby().id }]
    );
}

#[test]
fn fish_name_registration_clears_the_target() {
    let mut world = World::new();
    world.gatherer.register_item(Some(rock_salt().into()), None);

    assert!(world.gatherer.register_fish_name("Merlthor Goby"));

    let expected = GatherRequest {
        sequence: 2,
        identify_kind: IdentifyKind::ByFishName,
        pending_name: "Merlthor Goby".to_string(),
        ..GatherRequest::default()
    };
    assert_eq!(world.gatherer.request(), &expected);
}

#[test]
fn empty_input_registers_nothing() {
    let mut world = World::new();
    world.gatherer.register_location(cape_westwind());
    let before = world.gatherer.request().clone();

    assert!(!world.gatherer.register_item(None, None));
    assert!(!world.gatherer.register_item_name("", Some(GatheringType::Fisher)));
    assert!(!world.gatherer.register_fish_name(""));

    assert_eq!(world.gatherer.request(), &before);
    assert_eq!(world.host.sequence.starts(), 1);
    assert!(world.chat().is_empty());
}

#[test]
fn names_are_not_resolved_until_identify() {
    let mut world = World::new();

    world.gatherer.register_item_name("Rock Salt", None);

    assert!(world.identificator.queries().is_empty());
    assert!(world.gatherer.request().target.is_none());

    world.run(&["identify"]);

    assert_eq!(
        world.identificator.queries(),
        vec![IdentifyQuery::Gatherable("Rock Salt".to_string())]
    );
    assert_eq!(
        world.gatherer.request().target,
        Some(Gatherable::from(rock_salt()))
    );
}
