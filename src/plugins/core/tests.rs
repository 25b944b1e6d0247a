use bevy::prelude::*;
use crate::plugins::core;
use crate::common::tunables::{BeamAudioMode, BeamTunables, Tunables};

#[test]
fn inserts_resources() {
    let mut app = App::new();
    core::plugin(&mut app);
    assert!(app.world().get_resource::<Tunables>().is_some());
    assert!(app.world().get_resource::<BeamTunables>().is_some());
    assert!(app.world().get_resource::<ClearColor>().is_some());
}

#[test]
fn beam_defaults_match_reference_layout() {
    let t = BeamTunables::default();
    assert_eq!(t.shape.half_width, 10.0);
    assert_eq!(t.shape.emitter_drop, 50.0);
    assert_eq!(t.audio_mode, BeamAudioMode::PerBeam);
    assert!(t.texture_path.ends_with(".png"));
}
