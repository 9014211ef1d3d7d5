//! Orbital layout engine.
//!
//! Places one circular item per visible event stream on concentric rings and
//! moves it along its orbit on the frame clock:
//! - `layout`: entry-time slot assignment (ring, radius, angle, velocity, size)
//! - `motion`: per-frame angle advance, hover pause, screen-space position
//!
//! Layout space is centred on the aggregate counter with +y pointing down,
//! matching screen coordinates.

mod layout;
mod motion;


pub use layout::{
    item_size_px, plan_slot, planned_extent_px, ring_buffer_px, LayoutError, OrbitalSlot,
};
pub use motion::{depth_variance, OrbitalItem, OrbitalLayout};

use bevy::prelude::*;

use crate::catalog::RateCatalog;
use crate::visual_params::VisualParams;

/// Sent by input handling when the pointer enters or leaves an item.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemHoverChanged {
    pub stream_index: usize,
    pub hovered: bool,
}

/// Sent by the reveal schedule to place the next item.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct RevealNextItem;

pub fn apply_hover_changes(
    mut events: EventReader<ItemHoverChanged>,
    mut layout: ResMut<OrbitalLayout>,
) {
    for event in events.read() {
        if !layout.set_paused(event.stream_index, event.hovered) {
            debug!(
                "Hover change for stream {} ignored: item not visible",
                event.stream_index
            );
        }
    }
}

pub fn apply_reveals(
    mut events: EventReader<RevealNextItem>,
    mut layout: ResMut<OrbitalLayout>,
    catalog: Res<RateCatalog>,
    params: Res<VisualParams>,
) {
    for _ in events.read() {
        match layout.insert(&catalog, &params.orbit) {
            Ok(index) => {
                let item = &layout.items()[index];
                debug!(
                    "Revealed stream {} on ring {} (r={:.0}px, angle={:.1}deg, size={:.0}px)",
                    item.stream_index,
                    item.ring_index,
                    item.orbit_radius_px,
                    item.base_angle_deg,
                    item.size_px
                );
            }
            Err(e) => warn!("Reveal rejected: {e}"),
        }
    }
}

pub fn advance_orbits(
    time: Res<Time>,
    mut layout: ResMut<OrbitalLayout>,
    params: Res<VisualParams>,
) {
    layout.advance(time.delta_secs_f64(), &params.orbit);
}
