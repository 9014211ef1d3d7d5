//! Return every piece of core state to its initial conditions.

use bevy::ecs::event::Events;
use bevy::prelude::*;

use crate::orbital::OrbitalLayout;
use crate::particles::ParticleField;
use crate::phase::{ExperiencePhase, PhaseTimer};
use crate::rate_counter::{AggregateIncreased, StreamCountIncreased, StreamCounters};
use crate::sim_clock::SimulationClock;
use crate::visual_params::VisualParams;
use crate::visual_rng::VisualRng;

/// Request a full reset. Any number of requests in one frame reset once.
#[derive(Event, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResetAllEvent;

/// Zero the clock and counters, clear the orbital layout and re-seed the
/// particle field. Calling it twice equals calling it once.
pub fn reset_all(
    clock: &mut SimulationClock,
    counters: &mut StreamCounters,
    layout: &mut OrbitalLayout,
    field: &mut ParticleField,
    params: &VisualParams,
    rng: &mut VisualRng,
) {
    clock.reset();
    counters.reset();
    layout.clear();
    field.seed(&params.particles, &mut rng.0);
}

#[allow(clippy::too_many_arguments)]
pub fn handle_reset_requests(
    mut events: EventReader<ResetAllEvent>,
    mut clock: ResMut<SimulationClock>,
    mut counters: ResMut<StreamCounters>,
    mut layout: ResMut<OrbitalLayout>,
    mut field: ResMut<ParticleField>,
    params: Res<VisualParams>,
    mut rng: ResMut<VisualRng>,
    mut timer: ResMut<PhaseTimer>,
    mut next_phase: ResMut<NextState<ExperiencePhase>>,
    mut aggregate_events: ResMut<Events<AggregateIncreased>>,
    mut stream_events: ResMut<Events<StreamCountIncreased>>,
) {
    if events.read().count() == 0 {
        return;
    }
    info!(
        "Reset requested at {} (aggregate {})",
        clock.formatted(),
        counters.aggregate()
    );
    reset_all(
        &mut clock,
        &mut counters,
        &mut layout,
        &mut field,
        &params,
        &mut rng,
    );
    // Increases from ticks before the reset must not reach the fresh field.
    aggregate_events.clear();
    stream_events.clear();
    timer.restart();
    next_phase.set(ExperiencePhase::Intro);
}
