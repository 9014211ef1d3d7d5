use bevy::prelude::*;

/// Whole seconds elapsed since the last reset.
///
/// Only the 1 Hz driver (`tick_simulation_clock`) and `reset_all` mutate
/// this. The value never decreases between resets.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationClock {
    elapsed_seconds: u64,
}

impl SimulationClock {
    pub fn tick(&mut self) {
        self.elapsed_seconds = self.elapsed_seconds.saturating_add(1);
    }

    pub fn reset(&mut self) {
        self.elapsed_seconds = 0;
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    /// `HH:MM:SS` rendering of the elapsed time.
    pub fn formatted(&self) -> String {
        let s = self.elapsed_seconds;
        format!("{:02}:{:02}:{:02}", s / 3600, (s % 3600) / 60, s % 60)
    }
}

/// Start/stop switches for the two periodic drivers.
///
/// A stopped driver skips its whole schedule set, so a stop never leaves a
/// half-applied update behind.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverControl {
    pub clock_running: bool,
    pub frames_running: bool,
}

impl Default for DriverControl {
    fn default() -> Self {
        Self {
            clock_running: true,
            frames_running: true,
        }
    }
}

impl DriverControl {
    /// Stop both drivers if either is running, otherwise start both.
    pub fn toggle_all(&mut self) {
        let running = self.clock_running || self.frames_running;
        self.clock_running = !running;
        self.frames_running = !running;
    }
}

pub fn clock_driver_running(control: Res<DriverControl>) -> bool {
    control.clock_running
}

pub fn frame_driver_running(control: Res<DriverControl>) -> bool {
    control.frames_running
}

pub fn tick_simulation_clock(mut clock: ResMut<SimulationClock>) {
    clock.tick();
}
