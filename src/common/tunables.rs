//! Tunable gameplay constants.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub pixels_per_meter: f32,
    pub target_speed: f32,
    pub target_spin_degrees: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self { pixels_per_meter: 20.0, target_speed: 60.0, target_spin_degrees: 45.0 }
    }
}

/// Beam outline parameters, in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeamShape {
    /// Horizontal offset of the two target-side anchors.
    pub half_width: f32,
    /// How far below the attacker's position the beam leaves the attacker.
    pub emitter_drop: f32,
}

impl Default for BeamShape {
    fn default() -> Self {
        Self { half_width: 10.0, emitter_drop: 50.0 }
    }
}

/// Who owns the looping beam sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BeamAudioMode {
    /// Every attacker has its own loop.
    #[default]
    PerBeam,
    /// One loop for the whole system, toggled by whichever beam was processed last.
    Shared,
}

#[derive(Resource, Debug, Clone)]
pub struct BeamTunables {
    pub shape: BeamShape,
    pub texture_path: String,
    pub sound_path: String,
    pub volume: f32,
    pub speed: f32,
    /// World size covered by one repetition of the beam texture.
    pub texture_world_size: f32,
    pub beam_z: f32,
    pub audio_mode: BeamAudioMode,
}

impl Default for BeamTunables {
    fn default() -> Self {
        Self {
            shape: BeamShape::default(),
            texture_path: "textures/death_beam.png".into(),
            sound_path: "audio/sounds/beam.mp3".into(),
            volume: 1.0,
            speed: 0.5,
            texture_world_size: 64.0,
            beam_z: 5.0,
            audio_mode: BeamAudioMode::default(),
        }
    }
}
