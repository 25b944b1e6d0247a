//! Beam outline from attacker/target anchors.
//!
//! ```text
//!        a == a          attacker emitter point (duplicated)
//!        /    \
//!       /      \
//!     t0 ------ t1       target anchors, rotated with the target
//! ```

use bevy::prelude::*;

use crate::common::tunables::BeamShape;

/// The four beam vertices, in drawing order:
/// left target anchor, attacker point, attacker point, right target anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeamQuad(pub [Vec2; 4]);

impl BeamQuad {
    #[inline]
    pub fn vertices(&self) -> &[Vec2] {
        &self.0
    }
}

/// Rotate `point` around `center` by `radians` (counter-clockwise).
#[inline]
pub fn rotate_around(point: Vec2, center: Vec2, radians: f32) -> Vec2 {
    Vec2::from_angle(radians).rotate(point - center) + center
}

/// Build the beam outline.
///
/// `orientation` is the target's heading in degrees. The anchors are laid out
/// for a target facing up (90°), so the applied rotation is `orientation - 90°`.
/// With no orientation the anchors stay horizontal.
pub fn compute_beam_polygon(
    attacker: Vec2,
    target: Vec2,
    orientation: Option<f32>,
    shape: &BeamShape,
) -> BeamQuad {
    let mut left = Vec2::new(target.x - shape.half_width, target.y);
    let mut right = Vec2::new(target.x + shape.half_width, target.y);

    if let Some(degrees) = orientation {
        let radians = (degrees - 90.0).to_radians();
        left = rotate_around(left, target, radians);
        right = rotate_around(right, target, radians);
    }

    let emitter = Vec2::new(attacker.x, attacker.y - shape.emitter_drop);

    BeamQuad([left, emitter, emitter, right])
}
