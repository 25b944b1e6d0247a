//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - `AssetPlugin` gives the beam plugin an asset server, but no image or
//!   audio backend, so tests seed the beam assets themselves.
//! - we then call `biosphere::game::configure_headless` to install gameplay plugins.

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;

use biosphere::plugins::beam::assets::{BeamSound, BeamTexture, LazyAsset};

pub fn app_headless() -> App {
    let mut app = App::new();

    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));

    biosphere::game::configure_headless(&mut app);
    app
}

/// Headless app whose beam texture and sound count as loaded.
#[allow(dead_code)]
pub fn app_with_beam_assets() -> App {
    let mut app = app_headless();
    app.insert_resource(BeamTexture(LazyAsset::Loaded(Handle::default())))
        .insert_resource(BeamSound(LazyAsset::Loaded(Handle::default())));
    app
}
