use bevy::prelude::*;

pub mod catalog;
pub mod config;
pub mod orbital;
pub mod particles;
pub mod phase;
pub mod rate_counter;
pub mod reset;
pub mod sim_clock;
pub mod simulation_sets;
pub mod text_fit;
pub mod visual_params;
pub mod visual_rng;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
pub mod test_harness;

use catalog::RateCatalog;
use config::{CLOCK_TICK_SECS, DEFAULT_VIEW_HEIGHT, DEFAULT_VIEW_WIDTH};
use orbital::{ItemHoverChanged, OrbitalLayout, RevealNextItem};
use particles::ParticleField;
use phase::{ExperiencePhase, PhaseTimer};
use rate_counter::{AggregateIncreased, StreamCountIncreased, StreamCounters};
use reset::ResetAllEvent;
use sim_clock::{clock_driver_running, frame_driver_running, DriverControl, SimulationClock};
pub use simulation_sets::{FrameSet, SimulationSet};
use visual_params::VisualParams;
use visual_rng::VisualRng;

/// Core state and both drivers.
///
/// Resources inserted before the plugin is added (`VisualParams`,
/// `VisualRng`, `RateCatalog`) are kept, which is how the app applies
/// overrides.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<RateCatalog>() {
            let catalog = match RateCatalog::builtin() {
                Ok(catalog) => catalog,
                Err(e) => {
                    error!("Built-in catalog failed to load, continuing without streams: {e}");
                    RateCatalog::default()
                }
            };
            app.insert_resource(catalog);
        }
        let counters = StreamCounters::for_catalog(app.world().resource::<RateCatalog>());

        app.init_resource::<VisualParams>()
            .init_resource::<VisualRng>()
            .init_resource::<SimulationClock>()
            .init_resource::<DriverControl>()
            .init_resource::<OrbitalLayout>()
            .init_resource::<PhaseTimer>()
            .insert_resource(counters)
            .insert_resource(ParticleField::new(Vec2::new(
                DEFAULT_VIEW_WIDTH,
                DEFAULT_VIEW_HEIGHT,
            )))
            .insert_resource(Time::<Fixed>::from_seconds(CLOCK_TICK_SECS))
            .init_state::<ExperiencePhase>()
            .add_event::<AggregateIncreased>()
            .add_event::<StreamCountIncreased>()
            .add_event::<ItemHoverChanged>()
            .add_event::<RevealNextItem>()
            .add_event::<ResetAllEvent>();

        app.configure_sets(
            FixedUpdate,
            (SimulationSet::Clock, SimulationSet::Counters)
                .chain()
                .run_if(clock_driver_running),
        )
        .configure_sets(
            Update,
            (
                FrameSet::Pointer,
                FrameSet::Input,
                FrameSet::Motion,
                FrameSet::Visual,
            )
                .chain(),
        )
        .configure_sets(
            Update,
            (FrameSet::Input, FrameSet::Motion).run_if(frame_driver_running),
        );

        app.add_systems(Startup, (log_catalog, seed_particle_field))
            .add_systems(
                FixedUpdate,
                (
                    sim_clock::tick_simulation_clock.in_set(SimulationSet::Clock),
                    rate_counter::update_counters.in_set(SimulationSet::Counters),
                ),
            )
            .add_systems(
                Update,
                reset::handle_reset_requests.before(FrameSet::Input),
            )
            .add_systems(
                Update,
                orbital::apply_hover_changes.in_set(FrameSet::Pointer),
            )
            .add_systems(
                Update,
                (phase::advance_phase, orbital::apply_reveals)
                    .chain()
                    .in_set(FrameSet::Input),
            )
            .add_systems(
                Update,
                (
                    orbital::advance_orbits,
                    particles::advance_particle_field,
                    particles::apply_particle_triggers,
                )
                    .chain()
                    .in_set(FrameSet::Motion),
            );
    }
}

fn log_catalog(catalog: Res<RateCatalog>) {
    let (min, max) = catalog.daily_rate_range();
    info!(
        "Catalog: {} event streams, {:.4} events/s aggregate (daily {}..{})",
        catalog.len(),
        catalog.aggregate_rate_per_second(),
        min,
        max
    );
}

fn seed_particle_field(
    mut field: ResMut<ParticleField>,
    params: Res<VisualParams>,
    mut rng: ResMut<VisualRng>,
) {
    field.seed(&params.particles, &mut rng.0);
    debug!("Seeded {} particles", field.len());
}
