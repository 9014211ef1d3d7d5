//! Ambient particle field.
//!
//! Hundreds of faint stars that fade in, live for a bounded number of frames
//! and are recycled. Each rise of the aggregate counter sacrifices exactly one
//! star: it flares and fades out, however far the count jumped that tick.

mod field;

#[cfg(test)]
mod tests;

pub use field::{Particle, ParticleField, ParticleId, ParticleState, StateCounts};

use bevy::prelude::*;

use crate::rate_counter::AggregateIncreased;
use crate::visual_params::VisualParams;
use crate::visual_rng::VisualRng;

pub fn advance_particle_field(
    mut field: ResMut<ParticleField>,
    params: Res<VisualParams>,
    mut rng: ResMut<VisualRng>,
) {
    field.advance(&params.particles, &mut rng.0);
}

/// One trigger per `AggregateIncreased` event, applied after the frame
/// update so a flared particle is visible for at least one frame.
pub fn apply_particle_triggers(
    mut events: EventReader<AggregateIncreased>,
    mut field: ResMut<ParticleField>,
    mut rng: ResMut<VisualRng>,
) {
    for event in events.read() {
        match field.trigger(&mut rng.0) {
            Some(id) => debug!("Aggregate rose to {}, particle {id} flares", event.current),
            None => debug!(
                "Aggregate rose to {} with no eligible particle",
                event.current
            ),
        }
    }
}
