use std::time::Duration;

use avian2d::prelude::LinearVelocity;
use bevy::prelude::*;

use crate::common::components::{DestroyIntent, Health};
use crate::common::test_utils::run_system_once;
use crate::common::tunables::Tunables;

use super::{BeamDamage, Saucer, Target};

fn fixed_time_with_delta(dt: f32) -> Time<Fixed> {
    let mut t = Time::<Fixed>::default();
    t.advance_by(Duration::from_secs_f32(dt));
    t
}

#[test]
fn scenario_pairs_each_saucer_with_a_live_target() {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    run_system_once(&mut world, super::spawn_scenario);

    let intents: Vec<DestroyIntent> = world
        .query_filtered::<&DestroyIntent, With<Saucer>>()
        .iter(&world)
        .copied()
        .collect();
    assert_eq!(intents.len(), 2);

    for intent in intents {
        let target = intent.target.expect("saucer spawned without a target");
        assert!(world.get::<Target>(target).is_some());
        assert!(world.get::<Health>(target).unwrap().is_alive());
    }
}

#[test]
fn beam_damage_wears_down_target_per_tick() {
    let mut world = World::new();
    world.insert_resource(fixed_time_with_delta(1.0));

    let target = world.spawn(Health { hp: 5 }).id();
    world.spawn((DestroyIntent::new(target), BeamDamage::every(0.5, 1)));

    run_system_once(&mut world, super::apply_beam_damage);

    // One second of a 0.5s repeating timer is two hits.
    assert_eq!(world.get::<Health>(target).unwrap().hp, 3);
}

#[test]
fn beam_damage_ignores_dead_or_missing_targets() {
    let mut world = World::new();
    world.insert_resource(fixed_time_with_delta(1.0));

    let dead = world.spawn(Health { hp: 0 }).id();
    world.spawn((DestroyIntent::new(dead), BeamDamage::every(0.5, 1)));
    world.spawn((DestroyIntent::default(), BeamDamage::every(0.5, 1)));

    run_system_once(&mut world, super::apply_beam_damage);

    assert_eq!(world.get::<Health>(dead).unwrap().hp, 0);
}

#[test]
fn dead_targets_are_despawned() {
    let mut world = World::new();
    let dead = world.spawn((Target, Health { hp: 0 })).id();
    let alive = world.spawn((Target, Health { hp: 1 })).id();

    run_system_once(&mut world, super::despawn_dead_targets);

    assert!(world.get_entity(dead).is_err());
    assert!(world.get_entity(alive).is_ok());
}

#[test]
fn targets_bounce_off_arena_edges() {
    let mut world = World::new();
    let e = world
        .spawn((
            Target,
            Transform::from_xyz(10_000.0, 0.0, 0.0),
            LinearVelocity(Vec2::new(50.0, 5.0)),
        ))
        .id();

    run_system_once(&mut world, super::bounce_targets);

    assert_eq!(world.get::<LinearVelocity>(e).unwrap().0, Vec2::new(-50.0, 5.0));
}
