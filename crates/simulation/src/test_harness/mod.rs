//! # TestScene: headless harness for core integration tests
//!
//! Wraps `bevy::app::App` + `SimulationPlugin` without a window or renderer.
//! Time is driven manually: `frames(n)` runs `n` full updates of a fixed
//! frame length, `tick_seconds(n)` runs the 1 Hz `FixedUpdate` schedule `n`
//! times directly, and `fixed_main(n)` runs the whole `FixedMain` pass
//! including the signal that lets the next frame expire old events.

mod assertions;
mod queries;

use std::time::Duration;

use bevy::app::App;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use crate::visual_params::VisualParams;
use crate::visual_rng::VisualRng;
use crate::SimulationPlugin;

/// Default frame length for `frames()`.
pub const FRAME_SECS: f32 = 1.0 / 60.0;

pub struct TestScene {
    app: App,
}

impl TestScene {
    /// Scene with default params and the built-in catalog.
    pub fn new() -> Self {
        Self::with_params(VisualParams::default())
    }

    pub fn with_params(params: VisualParams) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(StatesPlugin);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f32(
            FRAME_SECS,
        )));
        app.insert_resource(params);
        app.insert_resource(VisualRng::from_seed_u64(1234));
        app.add_plugins(SimulationPlugin);
        // Frame time never accumulates a fixed step; only `tick_seconds`
        // and `fixed_main` advance the clock.
        app.insert_resource(Time::<Fixed>::from_seconds(1.0e9));

        // Run one update so Startup systems execute.
        app.update();
        Self { app }
    }

    pub fn app(&mut self) -> &mut App {
        &mut self.app
    }
}

impl Default for TestScene {
    fn default() -> Self {
        Self::new()
    }
}
