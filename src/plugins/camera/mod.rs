//! Camera plugin (render-only).
//!
//! ```text
//! OnEnter(InGame): spawn MainCamera
//! PostUpdate:      ease the camera towards the centroid of all attackers
//! ```
//!
//! The beam system reads the `MainCamera` transform for its batch projection,
//! so the camera moves before both the beam pass and transform propagation.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::components::{DestroyIntent, Position};
use crate::common::state::GameState;
use crate::plugins::beam::system::render_destroy_beams;

#[derive(Component)]
pub struct MainCamera {
    pub responsiveness: f32,
}

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_camera)
        .add_systems(
            PostUpdate,
            follow_attackers
                .before(TransformSystems::Propagate)
                .before(render_destroy_beams)
                .run_if(in_state(GameState::InGame)),
        );
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("MainCamera"),
        Camera2d,
        MainCamera { responsiveness: 2.0 },
        Transform::from_xyz(0.0, 0.0, 999.0),
        DespawnOnExit(GameState::InGame),
    ));
}

fn follow_attackers(
    time: Res<Time>,
    q_attackers: Query<&Position, With<DestroyIntent>>,
    cam: Option<Single<(&mut Transform, &MainCamera)>>,
) {
    let Some(cam) = cam else {
        return;
    };
    let (mut tf_cam, main_cam) = cam.into_inner();

    let (sum, count) = q_attackers
        .iter()
        .fold((Vec2::ZERO, 0u32), |(sum, n), p| (sum + p.0, n + 1));
    if count == 0 {
        return;
    }
    let centroid = sum / count as f32;

    let dt = time.delta_secs();
    let alpha = 1.0 - (-main_cam.responsiveness * dt).exp();

    tf_cam.translation.x += (centroid.x - tf_cam.translation.x) * alpha;
    tf_cam.translation.y += (centroid.y - tf_cam.translation.y) * alpha;
}

#[cfg(test)]
mod tests;
