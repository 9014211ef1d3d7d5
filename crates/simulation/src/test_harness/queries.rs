//! Driving and query methods for `TestScene`.

use bevy::app::FixedMain;
use bevy::ecs::event::Events;
use bevy::prelude::*;

use crate::orbital::{ItemHoverChanged, OrbitalLayout};
use crate::particles::ParticleField;
use crate::phase::ExperiencePhase;
use crate::rate_counter::StreamCounters;
use crate::reset::ResetAllEvent;
use crate::sim_clock::{DriverControl, SimulationClock};

use super::TestScene;

impl TestScene {
    // -----------------------------------------------------------------------
    // Drivers
    // -----------------------------------------------------------------------

    /// Run N one-second ticks by directly executing the `FixedUpdate`
    /// schedule, bypassing Bevy's time accumulation.
    pub fn tick_seconds(&mut self, n: u32) {
        for _ in 0..n {
            self.app.world_mut().run_schedule(FixedUpdate);
        }
    }

    /// Run N complete `FixedMain` passes, as the fixed-step loop does. Each
    /// pass marks events for expiry on the next frame, so events survive at
    /// most two frames as in a running app.
    pub fn fixed_main(&mut self, n: u32) {
        for _ in 0..n {
            self.app.world_mut().run_schedule(FixedMain);
        }
    }

    /// Run N full frame updates.
    pub fn frames(&mut self, n: u32) {
        for _ in 0..n {
            self.app.update();
        }
    }

    /// Tick once and run one frame, so frame-side consumers see the events
    /// the tick produced.
    pub fn tick_and_frame(&mut self) {
        self.tick_seconds(1);
        self.frames(1);
    }

    // -----------------------------------------------------------------------
    // Input
    // -----------------------------------------------------------------------

    pub fn hover(&mut self, stream_index: usize, hovered: bool) {
        self.app.world_mut().send_event(ItemHoverChanged {
            stream_index,
            hovered,
        });
    }

    pub fn request_reset(&mut self) {
        self.app.world_mut().send_event(ResetAllEvent);
    }

    pub fn set_drivers(&mut self, running: bool) {
        let mut control = self.app.world_mut().resource_mut::<DriverControl>();
        control.clock_running = running;
        control.frames_running = running;
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn resource<R: Resource>(&self) -> &R {
        self.app.world().resource::<R>()
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.resource::<SimulationClock>().elapsed_seconds()
    }

    pub fn counters(&self) -> &StreamCounters {
        self.resource::<StreamCounters>()
    }

    pub fn layout(&self) -> &OrbitalLayout {
        self.resource::<OrbitalLayout>()
    }

    pub fn field(&self) -> &ParticleField {
        self.resource::<ParticleField>()
    }

    pub fn phase(&self) -> ExperiencePhase {
        *self.resource::<State<ExperiencePhase>>().get()
    }

    /// Number of pending events of type `E` not yet cleared.
    pub fn pending_events<E: Event>(&self) -> usize {
        self.resource::<Events<E>>().len()
    }
}
