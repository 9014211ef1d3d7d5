//! Integration tests using the `TestScene` harness.
//!
//! These spin up a headless Bevy App with `SimulationPlugin` and check the
//! behavior that only shows up when the drivers, events and resources run
//! together.


use crate::test_harness::TestScene;
use crate::visual_params::{PhaseParams, VisualParams};

/// Scene with a compressed phase timeline so cycles finish in a few hundred
/// frames.
pub(crate) fn fast_scene(orbital_secs: Option<f32>) -> TestScene {
    TestScene::with_params(VisualParams {
        phases: PhaseParams {
            intro_secs: 0.05,
            reveal_interval_secs: 0.1,
            orbital_secs,
            finale_secs: 0.2,
        },
        ..Default::default()
    })
}
