//! Beam presenter (render-only).
//!
//! Turns the closed `BeamBatch` into `Mesh2d` entities. Mesh entities are
//! pooled by slot: slot `i` shows the `i`-th draw of the frame and sits slightly
//! above slot `i - 1`, so layering follows the batch order. Unused slots are
//! hidden rather than despawned.

use bevy::asset::RenderAssetUsages;
use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::prelude::*;

use crate::common::tunables::BeamTunables;

use super::batch::{BeamBatch, PolygonDraw};

const SLOT_Z_STEP: f32 = 0.001;

/// Marker on a pooled beam mesh entity.
#[derive(Component, Debug, Clone, Copy)]
pub struct BeamMesh {
    pub slot: usize,
}

#[derive(Debug, Clone)]
struct BeamSlot {
    entity: Entity,
    mesh: Handle<Mesh>,
    material: Handle<ColorMaterial>,
}

#[derive(Resource, Debug, Default)]
pub struct BeamMeshPool {
    slots: Vec<BeamSlot>,
}

impl BeamMeshPool {
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Build a triangle-list mesh for one draw.
///
/// UVs are world-space positions divided by `texture_world_size`, so the
/// repeat-wrapped texture tiles along the beam instead of stretching.
pub fn build_beam_mesh(draw: &PolygonDraw, texture_world_size: f32) -> Mesh {
    let scale = texture_world_size.max(f32::EPSILON);

    let positions: Vec<[f32; 3]> = draw.vertices.iter().map(|v| [v.x, v.y, 0.0]).collect();
    let uvs: Vec<[f32; 2]> = draw
        .vertices
        .iter()
        .map(|v| [v.x / scale, -v.y / scale])
        .collect();
    let indices: Vec<u16> = draw.triangles.iter().flatten().copied().collect();

    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
        .with_inserted_indices(Indices::U16(indices))
}

pub fn present_beam_batch(
    mut commands: Commands,
    tunables: Res<BeamTunables>,
    batch: Res<BeamBatch>,
    mut pool: ResMut<BeamMeshPool>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut q_slots: Query<(&mut Visibility, &mut Transform), With<BeamMesh>>,
) {
    let draws = batch.draws();

    for (i, draw) in draws.iter().enumerate() {
        let mesh = build_beam_mesh(draw, tunables.texture_world_size);
        let z = tunables.beam_z + i as f32 * SLOT_Z_STEP;

        let Some(slot) = pool.slots.get(i) else {
            let mesh = meshes.add(mesh);
            let material = materials.add(ColorMaterial::from(draw.texture.clone()));
            let entity = commands
                .spawn((
                    Name::new(format!("BeamMesh{i}")),
                    BeamMesh { slot: i },
                    Mesh2d(mesh.clone()),
                    MeshMaterial2d(material.clone()),
                    Transform::from_xyz(0.0, 0.0, z),
                    Visibility::Visible,
                ))
                .id();
            pool.slots.push(BeamSlot { entity, mesh, material });
            continue;
        };

        if let Some(mut slot_mesh) = meshes.get_mut(&slot.mesh) {
            *slot_mesh = mesh;
        }
        if let Some(mut slot_material) = materials.get_mut(&slot.material) {
            if slot_material.texture.as_ref() != Some(&draw.texture) {
                slot_material.texture = Some(draw.texture.clone());
            }
        }
        if let Ok((mut vis, mut tf)) = q_slots.get_mut(slot.entity) {
            *vis = Visibility::Visible;
            tf.translation.z = z;
        }
    }

    for slot in pool.slots.iter().skip(draws.len()) {
        if let Ok((mut vis, _)) = q_slots.get_mut(slot.entity) {
            *vis = Visibility::Hidden;
        }
    }
}
