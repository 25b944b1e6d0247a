//! Beam loop sound lifecycle.
//!
//! Each key (an attacker, or one shared key) is either `Idle` or
//! `Playing(emitter)`, where the emitter is an entity carrying an
//! `AudioPlayer` with looping playback.
//!
//! ```text
//!   Idle --play()--> Playing(e)      spawn emitter
//!   Playing(e) --stop()--> Idle      despawn emitter
//!   play() while Playing, stop() while Idle: no-op
//! ```
//!
//! Keys not touched during a frame are stopped and forgotten in `end_frame`,
//! so an attacker that loses its intent (or is despawned) cannot leave a loop
//! running.

use bevy::audio::{AudioSource, Volume};
use bevy::platform::collections::{HashMap, HashSet};
use bevy::prelude::*;

use crate::common::tunables::{BeamAudioMode, BeamTunables};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SoundState {
    #[default]
    Idle,
    Playing(Entity),
}

/// Marker on a spawned loop emitter.
#[derive(Component, Debug, Clone, Copy)]
pub struct BeamLoop {
    pub owner: Entity,
}

/// Looping playback at the configured volume and speed.
pub fn loop_settings(tunables: &BeamTunables) -> PlaybackSettings {
    PlaybackSettings::LOOP
        .with_volume(Volume::Linear(tunables.volume))
        .with_speed(tunables.speed)
}

#[derive(Resource, Debug, Default)]
pub struct BeamSounds {
    states: HashMap<Entity, SoundState>,
    visited: HashSet<Entity>,
}

impl BeamSounds {
    /// Sound key for `attacker` under `mode`.
    #[inline]
    pub fn key(mode: BeamAudioMode, attacker: Entity) -> Entity {
        match mode {
            BeamAudioMode::PerBeam => attacker,
            BeamAudioMode::Shared => Entity::PLACEHOLDER,
        }
    }

    pub fn state(&self, key: Entity) -> SoundState {
        self.states.get(&key).copied().unwrap_or_default()
    }

    pub fn playing_count(&self) -> usize {
        self.states
            .values()
            .filter(|s| matches!(s, SoundState::Playing(_)))
            .count()
    }

    pub fn begin_frame(&mut self) {
        self.visited.clear();
    }

    /// Start the loop for `key` unless it is already playing.
    ///
    /// With no sound available this is a no-op. Returns `true` if a loop was started.
    pub fn play(
        &mut self,
        commands: &mut Commands,
        key: Entity,
        sound: Option<&Handle<AudioSource>>,
        settings: PlaybackSettings,
    ) -> bool {
        self.visited.insert(key);

        let Some(sound) = sound else {
            return false;
        };

        let state = self.states.entry(key).or_default();
        if matches!(state, SoundState::Playing(_)) {
            return false;
        }

        let emitter = commands
            .spawn((
                Name::new("BeamLoop"),
                BeamLoop { owner: key },
                AudioPlayer::new(sound.clone()),
                settings,
            ))
            .id();
        *state = SoundState::Playing(emitter);

        debug!("beam loop started for {key}");
        true
    }

    /// Stop the loop for `key` if it is playing. Returns `true` if a loop was stopped.
    pub fn stop(&mut self, commands: &mut Commands, key: Entity) -> bool {
        self.visited.insert(key);
        self.silence(commands, key)
    }

    /// Stop and forget every key that was not played or stopped since `begin_frame`.
    pub fn end_frame(&mut self, commands: &mut Commands) {
        let stale: Vec<Entity> = self
            .states
            .keys()
            .filter(|k| !self.visited.contains(*k))
            .copied()
            .collect();

        for key in stale {
            self.silence(commands, key);
            self.states.remove(&key);
        }
    }

    fn silence(&mut self, commands: &mut Commands, key: Entity) -> bool {
        let Some(state) = self.states.get_mut(&key) else {
            return false;
        };
        let SoundState::Playing(emitter) = *state else {
            return false;
        };

        if let Ok(mut emitter_commands) = commands.get_entity(emitter) {
            emitter_commands.despawn();
        }
        *state = SoundState::Idle;

        debug!("beam loop stopped for {key}");
        true
    }
}
