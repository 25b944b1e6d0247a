//! Beam texture and loop sound.
//!
//! Both assets live in a `LazyAsset` slot:
//!
//! ```text
//! Unloaded --(backend ready, load issued)--> Loaded(handle)
//!    |                                            |
//!    +--(no backend at startup: texture only)     +--(LoadState::Failed)--> Unavailable
//!                         \-------------------------------------------------^
//! ```
//!
//! Only `Unloaded` ever triggers a load, so each asset is requested at most once.
//! `Unavailable` is terminal: consumers treat it as "no visual" / "no audio".

use bevy::asset::LoadState;
use bevy::audio::AudioSource;
use bevy::image::{ImageAddressMode, ImageLoaderSettings, ImageSampler, ImageSamplerDescriptor};
use bevy::prelude::*;

use crate::common::tunables::BeamTunables;

pub enum LazyAsset<A: Asset> {
    Unloaded,
    Loaded(Handle<A>),
    Unavailable,
}

// Hand-written so `A` needs no `Default`/`Debug` bound.
impl<A: Asset> Default for LazyAsset<A> {
    fn default() -> Self {
        Self::Unloaded
    }
}

impl<A: Asset> std::fmt::Debug for LazyAsset<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unloaded => f.write_str("Unloaded"),
            Self::Loaded(h) => f.debug_tuple("Loaded").field(&h.id()).finish(),
            Self::Unavailable => f.write_str("Unavailable"),
        }
    }
}

impl<A: Asset> LazyAsset<A> {
    #[inline]
    pub fn handle(&self) -> Option<&Handle<A>> {
        match self {
            Self::Loaded(h) => Some(h),
            _ => None,
        }
    }

    #[inline]
    pub fn is_unloaded(&self) -> bool {
        matches!(self, Self::Unloaded)
    }

    /// Demote to `Unavailable` if the asset server reports a failed load.
    /// Returns `true` on the transition.
    fn demote_if_failed(&mut self, server: &AssetServer) -> bool {
        let Self::Loaded(handle) = self else {
            return false;
        };
        if !matches!(server.load_state(handle.id()), LoadState::Failed(_)) {
            return false;
        }
        *self = Self::Unavailable;
        true
    }
}

/// Repeat-wrapped beam texture, loaded once at startup.
#[derive(Resource, Debug, Default, Deref, DerefMut)]
pub struct BeamTexture(pub LazyAsset<Image>);

/// Loop sound, loaded lazily on the first frame the audio backend is ready.
#[derive(Resource, Debug, Default, Deref, DerefMut)]
pub struct BeamSound(pub LazyAsset<AudioSource>);

/// Startup: request the beam texture with a repeating sampler.
///
/// Without an asset backend for images (headless runs) the texture becomes
/// `Unavailable` and beams are simply not drawn.
pub fn load_beam_texture(
    tunables: Res<BeamTunables>,
    server: Option<Res<AssetServer>>,
    images: Option<Res<Assets<Image>>>,
    mut texture: ResMut<BeamTexture>,
) {
    if !texture.is_unloaded() {
        return;
    }

    let (Some(server), Some(_)) = (server, images) else {
        info!("no image asset backend; beam visuals disabled");
        texture.0 = LazyAsset::Unavailable;
        return;
    };

    let handle: Handle<Image> = server.load_with_settings(
        tunables.texture_path.clone(),
        |settings: &mut ImageLoaderSettings| {
            settings.sampler = ImageSampler::Descriptor(ImageSamplerDescriptor {
                address_mode_u: ImageAddressMode::Repeat,
                address_mode_v: ImageAddressMode::Repeat,
                ..default()
            });
        },
    );
    debug!("requested beam texture {}", tunables.texture_path);
    texture.0 = LazyAsset::Loaded(handle);
}

/// Every frame before beams are processed: request the loop sound once the
/// audio backend exists. Retries on later frames while it does not.
pub fn ensure_beam_sound(
    tunables: Res<BeamTunables>,
    server: Option<Res<AssetServer>>,
    sources: Option<Res<Assets<AudioSource>>>,
    mut sound: ResMut<BeamSound>,
) {
    if !sound.is_unloaded() {
        return;
    }
    let (Some(server), Some(_)) = (server, sources) else {
        return;
    };

    let handle: Handle<AudioSource> = server.load(tunables.sound_path.clone());
    debug!("requested beam sound {}", tunables.sound_path);
    sound.0 = LazyAsset::Loaded(handle);
}

/// Demote assets whose load failed (missing file, decoder error, broken
/// platform audio) so the rest of the pipeline degrades to no-ops.
pub fn watch_beam_asset_failures(
    tunables: Res<BeamTunables>,
    server: Option<Res<AssetServer>>,
    mut texture: ResMut<BeamTexture>,
    mut sound: ResMut<BeamSound>,
) {
    let Some(server) = server else {
        return;
    };

    if texture.demote_if_failed(&server) {
        warn!("beam texture {} failed to load; beams will not be drawn", tunables.texture_path);
    }
    if sound.demote_if_failed(&server) {
        warn!("beam sound {} failed to load; beams will be silent", tunables.sound_path);
    }
}
