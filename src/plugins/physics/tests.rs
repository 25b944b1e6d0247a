use bevy::prelude::*;

use crate::common::components::{Position, Rotation};
use crate::common::test_utils::run_system_once;

use super::{heading_degrees, sync_kinematics, Kinematics};

#[test]
fn unrotated_transform_faces_up() {
    assert!((heading_degrees(Quat::IDENTITY) - 90.0).abs() < 1e-4);
}

#[test]
fn quarter_turn_adds_ninety_degrees() {
    let h = heading_degrees(Quat::from_rotation_z(std::f32::consts::FRAC_PI_2));
    assert!((h - 180.0).abs() < 1e-3, "got {h}");
}

#[test]
fn sync_copies_translation_and_heading() {
    let mut world = World::new();
    let e = world
        .spawn((
            Kinematics,
            Transform::from_xyz(12.0, -4.0, 3.0).with_rotation(Quat::from_rotation_z(-std::f32::consts::FRAC_PI_2)),
            Position::default(),
            Rotation::default(),
        ))
        .id();

    run_system_once(&mut world, sync_kinematics);

    assert_eq!(world.get::<Position>(e).unwrap().0, Vec2::new(12.0, -4.0));
    assert!(world.get::<Rotation>(e).unwrap().degrees.abs() < 1e-3);
}

#[test]
fn sync_ignores_entities_without_marker() {
    let mut world = World::new();
    let e = world
        .spawn((Transform::from_xyz(5.0, 5.0, 0.0), Position::default()))
        .id();

    run_system_once(&mut world, sync_kinematics);

    assert_eq!(world.get::<Position>(e).unwrap().0, Vec2::ZERO);
}
