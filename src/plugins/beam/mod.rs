//! Destroy-beam plugin: draws a textured beam from every attacker to its target
//! and keeps a looping sound running while the beam is on.
//!
//! # Data flow
//! ```text
//!   Startup
//!     load_beam_texture            BeamTexture: Unloaded -> Loaded | Unavailable
//!
//!   PostUpdate (InGame), after kinematics sync
//!     watch_beam_asset_failures    Loaded -> Unavailable on LoadState::Failed
//!     ensure_beam_sound            BeamSound: Unloaded -> Loaded once audio is ready
//!     render_destroy_beams         BeamBatch begin/draw*/end, BeamSounds play/stop
//!     present_beam_batch           BeamBatch -> pooled Mesh2d slots   (render-only)
//! ```
//!
//! Nothing in here creates or removes `DestroyIntent`, `Health` or `Position`;
//! gameplay owns those and this plugin only reads them.

pub mod assets;
pub mod audio;
pub mod batch;
pub mod geometry;
pub mod present;
pub mod system;
pub mod triangulate;

use bevy::prelude::*;

use crate::common::state::GameState;
use crate::plugins::physics::sync_kinematics;

/// Register the headless-safe part: asset slots, batch, audio, frame pass.
pub fn plugin(app: &mut App) {
    app.init_resource::<batch::BeamBatch>()
        .init_resource::<audio::BeamSounds>()
        .init_resource::<assets::BeamTexture>()
        .init_resource::<assets::BeamSound>()
        .add_systems(Startup, assets::load_beam_texture);

    app.add_systems(
        PostUpdate,
        (
            assets::watch_beam_asset_failures,
            assets::ensure_beam_sound,
            system::render_destroy_beams,
        )
            .chain()
            .after(sync_kinematics)
            .run_if(in_state(GameState::InGame)),
    );
}

/// Register the mesh presenter (requires render infra).
pub fn render_plugin(app: &mut App) {
    app.init_resource::<present::BeamMeshPool>().add_systems(
        PostUpdate,
        present::present_beam_batch
            .after(system::render_destroy_beams)
            .run_if(in_state(GameState::InGame)),
    );
}
