mod common;

use bevy::prelude::*;
use biosphere::common::components::{DestroyIntent, Health};
use biosphere::plugins::beam::assets::BeamTexture;
use biosphere::plugins::beam::batch::BeamBatch;
use biosphere::plugins::world::Saucer;

#[test]
fn boots_and_ticks() {
    let mut app = common::app_headless();

    for _ in 0..3 {
        app.update();
    }

    // The frame pass ran every tick even though nothing can be drawn.
    assert_eq!(app.world().resource::<BeamBatch>().frames(), 3);
    assert!(app.world().resource::<BeamTexture>().handle().is_none());
}

#[test]
fn scenario_spawns_saucers_aimed_at_live_targets() {
    let mut app = common::app_headless();

    for _ in 0..2 {
        app.update();
    }

    let targets: Vec<Entity> = app
        .world_mut()
        .query_filtered::<&DestroyIntent, With<Saucer>>()
        .iter(app.world())
        .filter_map(|intent| intent.target)
        .collect();
    assert_eq!(targets.len(), 2);

    for target in targets {
        let health = app.world().get::<Health>(target);
        assert!(health.is_some_and(Health::is_alive));
    }
}
