use std::time::Duration;

use bevy::prelude::*;

use crate::common::components::{DestroyIntent, Position};
use crate::common::test_utils::run_system_once;

use super::MainCamera;

fn time_with_delta(dt: f32) -> Time {
    let mut t = Time::<()>::default();
    t.advance_by(Duration::from_secs_f32(dt));
    t
}

#[test]
fn spawn_creates_main_camera() {
    let mut world = World::new();
    run_system_once(&mut world, super::spawn_camera);
    assert_eq!(world.query::<&MainCamera>().iter(&world).count(), 1);
}

#[test]
fn camera_eases_towards_attacker_centroid() {
    let mut world = World::new();
    world.insert_resource(time_with_delta(0.5));
    world.spawn((DestroyIntent::default(), Position(Vec2::new(100.0, 0.0))));
    world.spawn((DestroyIntent::default(), Position(Vec2::new(300.0, 200.0))));
    let cam = world
        .spawn((MainCamera { responsiveness: 2.0 }, Transform::default()))
        .id();

    run_system_once(&mut world, super::follow_attackers);

    let t = world.get::<Transform>(cam).unwrap().translation;
    // Moved part of the way towards (200, 100), never past it.
    assert!(t.x > 0.0 && t.x < 200.0);
    assert!(t.y > 0.0 && t.y < 100.0);
    assert!((t.x / t.y - 2.0).abs() < 1e-3);
}

#[test]
fn camera_stays_put_without_attackers() {
    let mut world = World::new();
    world.insert_resource(time_with_delta(0.5));
    let cam = world
        .spawn((MainCamera { responsiveness: 2.0 }, Transform::from_xyz(7.0, 8.0, 999.0)))
        .id();

    run_system_once(&mut world, super::follow_attackers);

    assert_eq!(world.get::<Transform>(cam).unwrap().translation, Vec3::new(7.0, 8.0, 999.0));
}
