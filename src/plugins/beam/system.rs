//! Destroy-beam frame pass.
//!
//! ```text
//! begin(projection)
//!   collect  (Entity, DestroyIntent, Position, RenderOrder?)   family match
//!   sort     render_order                                      layer, y desc, entity
//!   process  each candidate exactly once:
//!              target alive + positioned -> quad -> triangles -> draw, play
//!              otherwise                 -> stop
//! end()
//! ```
//!
//! A missing target, a dead target, or a target without a position is not an
//! error: it is the defined "beam off" branch.

use std::cmp::Ordering;

use bevy::prelude::*;

use crate::common::components::{DestroyIntent, Health, Position, RenderOrder, Rotation};
use crate::common::tunables::BeamTunables;
use crate::plugins::camera::MainCamera;

use super::assets::{BeamSound, BeamTexture};
use super::audio::{loop_settings, BeamSounds};
use super::batch::BeamBatch;
use super::geometry::compute_beam_polygon;
use super::triangulate::triangulate;

/// A family member, captured for sorting.
#[derive(Debug, Clone, Copy)]
pub struct BeamCandidate {
    pub entity: Entity,
    pub intent: DestroyIntent,
    pub origin: Vec2,
    pub order: RenderOrder,
}

/// Where the beam should land this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeamTarget {
    pub position: Vec2,
    pub orientation: Option<f32>,
}

/// Draw order: lower layers first, then back-to-front by height, then by entity
/// so equal keys keep a stable order from frame to frame.
pub fn render_order(a: &BeamCandidate, b: &BeamCandidate) -> Ordering {
    a.order
        .cmp(&b.order)
        .then_with(|| b.origin.y.total_cmp(&a.origin.y))
        .then_with(|| a.entity.cmp(&b.entity))
}

/// Resolve the intent's target, or `None` when the beam must be off.
pub fn resolve_target(
    intent: &DestroyIntent,
    q_health: &Query<&Health>,
    q_position: &Query<&Position>,
    q_rotation: &Query<&Rotation>,
) -> Option<BeamTarget> {
    let target = intent.target?;

    let health = q_health.get(target).ok()?;
    if !health.is_alive() {
        return None;
    }

    let position = q_position.get(target).ok()?;
    let orientation = q_rotation.get(target).ok().map(|r| r.degrees);

    Some(BeamTarget { position: position.0, orientation })
}

/// Combined world-to-clip transform of the main camera.
///
/// The view half comes from the camera's local `Transform`, which is current
/// for this frame because the camera is a root entity and moves before this
/// pass. `clip_from_view` is whatever Bevy's camera update last computed; it
/// only changes when the viewport or projection does.
fn camera_projection(camera: Option<Single<(&Camera, &Transform), With<MainCamera>>>) -> Mat4 {
    let Some(camera) = camera else {
        return Mat4::IDENTITY;
    };
    let (camera, camera_tf) = camera.into_inner();
    camera.clip_from_view() * Mat4::from(camera_tf.compute_affine().inverse())
}

#[allow(clippy::too_many_arguments)]
pub fn render_destroy_beams(
    mut commands: Commands,
    tunables: Res<BeamTunables>,
    texture: Res<BeamTexture>,
    sound: Res<BeamSound>,
    mut batch: ResMut<BeamBatch>,
    mut sounds: ResMut<BeamSounds>,
    camera: Option<Single<(&Camera, &Transform), With<MainCamera>>>,
    q_family: Query<(Entity, &DestroyIntent, &Position, Option<&RenderOrder>)>,
    q_health: Query<&Health>,
    q_position: Query<&Position>,
    q_rotation: Query<&Rotation>,
    mut candidates: Local<Vec<BeamCandidate>>,
) {
    batch.begin(camera_projection(camera));
    sounds.begin_frame();

    candidates.clear();
    candidates.extend(q_family.iter().map(|(entity, intent, position, order)| BeamCandidate {
        entity,
        intent: *intent,
        origin: position.0,
        order: order.copied().unwrap_or_default(),
    }));
    candidates.sort_by(render_order);

    let settings = loop_settings(&tunables);

    for candidate in candidates.iter() {
        let key = BeamSounds::key(tunables.audio_mode, candidate.entity);

        let Some(target) = resolve_target(&candidate.intent, &q_health, &q_position, &q_rotation) else {
            trace!("beam off for {}", candidate.entity);
            sounds.stop(&mut commands, key);
            continue;
        };

        if let Some(texture) = texture.handle() {
            let quad = compute_beam_polygon(
                candidate.origin,
                target.position,
                target.orientation,
                &tunables.shape,
            );
            let triangles = triangulate(quad.vertices());
            batch.draw_textured_polygon(texture, quad.vertices(), &triangles);
        }

        sounds.play(&mut commands, key, sound.handle(), settings.clone());
    }

    sounds.end_frame(&mut commands);
    batch.end();
}
