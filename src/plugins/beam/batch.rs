//! Per-frame beam draw batch.
//!
//! The beam system is the single writer. Every frame it opens the batch with
//! the camera's combined transform, submits textured polygons in draw order,
//! then closes it. The presenter reads the closed batch and uploads meshes.
//!
//! Invariant: draws are only accepted between `begin` and `end`.

use bevy::prelude::*;

/// One textured polygon: vertices plus counter-clockwise index triples.
#[derive(Debug, Clone)]
pub struct PolygonDraw {
    pub texture: Handle<Image>,
    pub vertices: Vec<Vec2>,
    pub triangles: Vec<[u16; 3]>,
}

#[derive(Resource, Debug, Default)]
pub struct BeamBatch {
    drawing: bool,
    projection: Mat4,
    draws: Vec<PolygonDraw>,
    frames: u64,
}

impl BeamBatch {
    pub fn begin(&mut self, projection: Mat4) {
        debug_assert!(!self.drawing, "BeamBatch::begin called twice without end");
        self.drawing = true;
        self.projection = projection;
        self.draws.clear();
    }

    pub fn draw_textured_polygon(
        &mut self,
        texture: &Handle<Image>,
        vertices: &[Vec2],
        triangles: &[[u16; 3]],
    ) {
        if !self.drawing {
            warn!("beam draw submitted outside of a begin/end bracket; ignored");
            return;
        }

        self.draws.push(PolygonDraw {
            texture: texture.clone(),
            vertices: vertices.to_vec(),
            triangles: triangles.to_vec(),
        });
    }

    pub fn end(&mut self) {
        debug_assert!(self.drawing, "BeamBatch::end called without begin");
        self.drawing = false;
        self.frames += 1;
    }

    #[inline]
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Draws submitted in the current (or last closed) bracket, in order.
    #[inline]
    pub fn draws(&self) -> &[PolygonDraw] {
        &self.draws
    }

    #[inline]
    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    /// Number of closed brackets so far.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
