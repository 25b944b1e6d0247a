//! Physics plugin: avian setup, plus the bridge from `Transform` to the
//! gameplay-facing `Position`/`Rotation` components.

use avian2d::prelude::{Gravity, PhysicsPlugins};
use bevy::prelude::*;

use crate::common::components::{Position, Rotation};
use crate::common::tunables::Tunables;

/// Marker: keep this entity's `Position` (and `Rotation`, if present) in sync
/// with its `Transform`.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Kinematics;

pub fn plugin(app: &mut App) {
    let ppm = app.world().resource::<Tunables>().pixels_per_meter;
    app.add_plugins(PhysicsPlugins::default().with_length_unit(ppm));
    app.insert_resource(Gravity(Vec2::ZERO));
    app.add_systems(PostUpdate, sync_kinematics);
}

/// Heading in degrees for a z-rotation, with the unrotated sprite facing +Y (90°).
#[inline]
pub fn heading_degrees(rotation: Quat) -> f32 {
    let (_, _, z) = rotation.to_euler(EulerRot::XYZ);
    z.to_degrees() + Rotation::UP.degrees
}

pub fn sync_kinematics(
    mut q: Query<(&Transform, &mut Position, Option<&mut Rotation>), With<Kinematics>>,
) {
    for (tf, mut pos, rot) in &mut q {
        pos.0 = tf.translation.truncate();
        if let Some(mut rot) = rot {
            rot.degrees = heading_degrees(tf.rotation);
        }
    }
}

#[cfg(test)]
mod tests;
