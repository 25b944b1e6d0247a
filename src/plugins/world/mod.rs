//! World plugin: arena floor and the demo scenario.
//!
//! Two saucers each hold a `DestroyIntent` on a wandering, spinning target.
//! While a target lives, its saucer's `BeamDamage` wears it down; once its
//! `Health` hits zero the beam plugin sees it dead for one frame, then the
//! target is despawned and the intent points at nothing.
//!
//! Intents are fixed at spawn. Picking new targets is not part of this demo.

use avian2d::prelude::{AngularVelocity, LinearVelocity, RigidBody};
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::components::{DestroyIntent, Health, Position, RenderOrder, Rotation};
use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::beam::system::render_destroy_beams;
use crate::plugins::physics::Kinematics;

const TILE: i32 = 64;
const HALF_W: i32 = TILE * 8;
const HALF_H: i32 = TILE * 5;

const TARGET_HP: i32 = 20;

#[derive(Component, Debug, Clone, Copy)]
pub struct Saucer;

#[derive(Component, Debug, Clone, Copy)]
pub struct Target;

/// Damage dealt to the intent's target every time `tick` finishes.
#[derive(Component, Debug, Clone)]
pub struct BeamDamage {
    pub tick: Timer,
    pub amount: i32,
}

impl BeamDamage {
    pub fn every(seconds: f32, amount: i32) -> Self {
        Self { tick: Timer::from_seconds(seconds, TimerMode::Repeating), amount }
    }
}

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), (spawn_floor, spawn_scenario));
    app.add_systems(
        Update,
        bounce_targets.run_if(in_state(GameState::InGame)),
    );
    app.add_systems(
        FixedUpdate,
        apply_beam_damage.run_if(in_state(GameState::InGame)),
    );
    // After the beam pass so it observes the dead target before it disappears.
    app.add_systems(
        PostUpdate,
        despawn_dead_targets
            .after(render_destroy_beams)
            .run_if(in_state(GameState::InGame)),
    );
}

fn spawn_scenario(mut commands: Commands, tunables: Res<Tunables>) {
    let spin = tunables.target_spin_degrees.to_radians();

    let targets = [
        (Vec2::new(-160.0, 140.0), Vec2::new(1.0, 0.4), spin),
        (Vec2::new(220.0, 60.0), Vec2::new(-0.6, 1.0), -spin),
    ];
    let saucers = [Vec2::new(-240.0, -150.0), Vec2::new(260.0, -190.0)];

    for (i, ((pos, dir, spin), saucer_pos)) in targets.into_iter().zip(saucers).enumerate() {
        let target = commands
            .spawn((
                Name::new(format!("Target{i}")),
                Target,
                Health { hp: TARGET_HP },
                Kinematics,
                Position(pos),
                Rotation::UP,
                Sprite {
                    color: Color::srgb(0.35, 0.8, 0.45),
                    custom_size: Some(Vec2::new(14.0, 24.0)),
                    ..default()
                },
                Transform::from_translation(pos.extend(1.0)),
                RigidBody::Kinematic,
                LinearVelocity(dir.normalize() * tunables.target_speed),
                AngularVelocity(spin),
                DespawnOnExit(GameState::InGame),
            ))
            .id();

        commands.spawn((
            Name::new(format!("Saucer{i}")),
            Saucer,
            DestroyIntent::new(target),
            BeamDamage::every(0.5, 1),
            RenderOrder(1),
            Kinematics,
            Position(saucer_pos),
            Sprite {
                color: Color::srgb(0.75, 0.75, 0.85),
                custom_size: Some(Vec2::new(64.0, 20.0)),
                ..default()
            },
            Transform::from_translation(saucer_pos.extend(6.0)),
            DespawnOnExit(GameState::InGame),
        ));
    }
}

/// Keep targets inside the arena by reflecting their velocity at the edges.
fn bounce_targets(mut q: Query<(&Transform, &mut LinearVelocity), With<Target>>) {
    let (max_x, max_y) = (HALF_W as f32, HALF_H as f32);

    for (tf, mut vel) in &mut q {
        let p = tf.translation;
        if (p.x > max_x && vel.x > 0.0) || (p.x < -max_x && vel.x < 0.0) {
            vel.x = -vel.x;
        }
        if (p.y > max_y && vel.y > 0.0) || (p.y < -max_y && vel.y < 0.0) {
            vel.y = -vel.y;
        }
    }
}

fn apply_beam_damage(
    time: Res<Time<Fixed>>,
    mut q_attackers: Query<(&DestroyIntent, &mut BeamDamage)>,
    mut q_health: Query<&mut Health>,
) {
    for (intent, mut damage) in &mut q_attackers {
        let Some(target) = intent.target else {
            continue;
        };
        let Ok(mut health) = q_health.get_mut(target) else {
            continue;
        };
        if !health.is_alive() {
            continue;
        }

        damage.tick.tick(time.delta());
        let hits = damage.tick.times_finished_this_tick() as i32;
        health.hp -= damage.amount * hits;

        if !health.is_alive() {
            info!("target {target} destroyed");
        }
    }
}

fn despawn_dead_targets(mut commands: Commands, q: Query<(Entity, &Health), With<Target>>) {
    for (e, health) in &q {
        if !health.is_alive() {
            commands.entity(e).despawn();
        }
    }
}

/// Spawn a simple floor grid.
fn spawn_floor(mut commands: Commands) {
    (-(HALF_H / TILE)..=HALF_H / TILE)
        .flat_map(|y| (-(HALF_W / TILE)..=HALF_W / TILE).map(move |x| (x, y)))
        .for_each(|(x, y)| {
            let world_pos = Vec3::new(x as f32 * TILE as f32, y as f32 * TILE as f32, 0.0);
            let color = if (x + y) % 2 == 0 {
                Color::srgb(0.08, 0.13, 0.09)
            } else {
                Color::srgb(0.07, 0.11, 0.08)
            };

            commands.spawn((
                Name::new("Floor"),
                Sprite::from_color(color, Vec2::splat(TILE as f32)),
                Transform::from_translation(world_pos),
                DespawnOnExit(GameState::InGame),
            ));
        });
}

#[cfg(test)]
mod tests;
