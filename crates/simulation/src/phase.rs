//! Experience phases: intro, orbital reveal, finale.
//!
//! `ExperiencePhase` is a Bevy state advanced on the frame driver by
//! `advance_phase`. During `Orbital` one stream is revealed every
//! `reveal_interval_secs` until the catalog is exhausted. At the end of
//! `Finale` a `ResetAllEvent` starts the cycle over.

use bevy::prelude::*;

use crate::catalog::RateCatalog;
use crate::orbital::{OrbitalLayout, RevealNextItem};
use crate::reset::ResetAllEvent;
use crate::visual_params::{PhaseParams, VisualParams};

#[derive(States, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ExperiencePhase {
    #[default]
    Intro,
    Orbital,
    Finale,
}

/// Seconds spent in the current phase and since the last reveal.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct PhaseTimer {
    pub phase_secs: f32,
    pub since_reveal_secs: f32,
}

impl PhaseTimer {
    pub fn restart(&mut self) {
        *self = Self::default();
    }
}

/// What the phase controller wants done this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhaseStep {
    pub next_phase: Option<ExperiencePhase>,
    pub reveal: bool,
    pub reset: bool,
}

/// Pure phase transition for one frame of `dt_secs`.
pub fn step_phase(
    phase: ExperiencePhase,
    timer: &mut PhaseTimer,
    dt_secs: f32,
    visible_items: usize,
    catalog_len: usize,
    params: &PhaseParams,
) -> PhaseStep {
    let mut step = PhaseStep::default();
    timer.phase_secs += dt_secs;
    match phase {
        ExperiencePhase::Intro => {
            if timer.phase_secs >= params.intro_secs {
                step.next_phase = Some(ExperiencePhase::Orbital);
                // First item appears as soon as the orbital phase starts.
                timer.phase_secs = 0.0;
                timer.since_reveal_secs = params.reveal_interval_secs;
            }
        }
        ExperiencePhase::Orbital => {
            if visible_items < catalog_len {
                timer.since_reveal_secs += dt_secs;
                if timer.since_reveal_secs >= params.reveal_interval_secs {
                    timer.since_reveal_secs -= params.reveal_interval_secs;
                    step.reveal = true;
                }
            }
            if params.orbital_secs.is_some_and(|limit| timer.phase_secs >= limit) {
                step.next_phase = Some(ExperiencePhase::Finale);
                timer.restart();
            }
        }
        ExperiencePhase::Finale => {
            if timer.phase_secs >= params.finale_secs {
                step.reset = true;
            }
        }
    }
    step
}

#[allow(clippy::too_many_arguments)]
pub fn advance_phase(
    time: Res<Time>,
    params: Res<VisualParams>,
    catalog: Res<RateCatalog>,
    layout: Res<OrbitalLayout>,
    phase: Res<State<ExperiencePhase>>,
    mut next_phase: ResMut<NextState<ExperiencePhase>>,
    mut timer: ResMut<PhaseTimer>,
    mut reveals: EventWriter<RevealNextItem>,
    mut resets: EventWriter<ResetAllEvent>,
) {
    let step = step_phase(
        *phase.get(),
        &mut timer,
        time.delta_secs(),
        layout.len(),
        catalog.len(),
        &params.phases,
    );
    if step.reveal {
        reveals.send(RevealNextItem);
    }
    if let Some(next) = step.next_phase {
        info!("Phase {:?} -> {:?}", phase.get(), next);
        next_phase.set(next);
    }
    if step.reset {
        resets.send(ResetAllEvent);
    }
}
