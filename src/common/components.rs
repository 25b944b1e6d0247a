//! Gameplay facts shared between plugins.
//!
//! Movement writes `Position`/`Rotation`, combat writes `Health`, and gameplay
//! decides who is attacking whom through `DestroyIntent`. The beam plugin only
//! ever reads these.

use bevy::prelude::*;

/// World-space position in the gameplay plane.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Deref, DerefMut)]
pub struct Position(pub Vec2);

/// Orientation in degrees. `90.0` faces +Y.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct Rotation {
    pub degrees: f32,
}

impl Rotation {
    pub const UP: Self = Self { degrees: 90.0 };
}

#[derive(Component, Debug, Clone)]
pub struct Health {
    pub hp: i32,
}

impl Health {
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }
}

/// Attack relation: the holder is trying to destroy `target`.
///
/// `target: None` is a valid, idle intent.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct DestroyIntent {
    pub target: Option<Entity>,
}

impl DestroyIntent {
    pub fn new(target: Entity) -> Self {
        Self { target: Some(target) }
    }
}

/// Draw layer; lower layers are drawn first.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct RenderOrder(pub i32);
