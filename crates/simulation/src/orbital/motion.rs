use bevy::prelude::*;

use super::layout::{plan_slot, LayoutError, OrbitalSlot};
use crate::catalog::RateCatalog;
use crate::visual_params::OrbitParams;

/// Radial drift factor at `motion_secs` on the item's own clock.
pub fn depth_variance(motion_secs: f64, base_angle_deg: f32, params: &OrbitParams) -> f32 {
    let phase = motion_secs * params.depth_variance_frequency as f64
        + (base_angle_deg as f64).to_radians();
    params.depth_variance_amplitude * phase.sin() as f32
}

/// One visible item orbiting the center.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitalItem {
    pub stream_index: usize,
    pub ring_index: usize,
    pub base_angle_deg: f32,
    pub orbit_radius_px: f32,
    pub angular_velocity_deg_per_sec: f32,
    pub size_px: f32,
    /// Layout frame clock reading when the item was placed.
    pub entry_timestamp_secs: f64,
    paused: bool,
    /// Seconds of unpaused motion since entry.
    motion_secs: f64,
    /// Last computed angle, kept in `[0, 360)`.
    angle_deg: f32,
    position: Vec2,
}

impl OrbitalItem {
    fn new(
        stream_index: usize,
        slot: OrbitalSlot,
        entry_timestamp_secs: f64,
        params: &OrbitParams,
    ) -> Self {
        let mut item = Self {
            stream_index,
            ring_index: slot.ring_index,
            base_angle_deg: slot.base_angle_deg,
            orbit_radius_px: slot.orbit_radius_px,
            angular_velocity_deg_per_sec: slot.angular_velocity_deg_per_sec,
            size_px: slot.size_px,
            entry_timestamp_secs,
            paused: false,
            motion_secs: 0.0,
            angle_deg: slot.base_angle_deg,
            position: Vec2::ZERO,
        };
        item.update_position(params);
        item
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn angle_deg(&self) -> f32 {
        self.angle_deg
    }

    pub fn motion_secs(&self) -> f64 {
        self.motion_secs
    }

    /// Center of the item in layout space (origin at the counter, +y down).
    pub fn position(&self) -> Vec2 {
        self.position
    }

    fn advance(&mut self, dt_secs: f64, params: &OrbitParams) {
        if self.paused {
            return;
        }
        self.motion_secs += dt_secs;
        let angle = self.base_angle_deg as f64
            + self.motion_secs * self.angular_velocity_deg_per_sec as f64;
        self.angle_deg = angle.rem_euclid(360.0) as f32;
        self.update_position(params);
    }

    fn update_position(&mut self, params: &OrbitParams) {
        let drift = depth_variance(self.motion_secs, self.base_angle_deg, params);
        let r = self.orbit_radius_px * (1.0 + drift);
        let theta = self.angle_deg.to_radians();
        self.position = Vec2::new(theta.cos() * r, theta.sin() * r);
    }
}

/// Items currently visible, in insertion order, plus the frame clock that
/// drives their motion.
#[derive(Resource, Debug, Clone, Default)]
pub struct OrbitalLayout {
    items: Vec<OrbitalItem>,
    frame_clock_secs: f64,
}

impl OrbitalLayout {
    pub fn items(&self) -> &[OrbitalItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn frame_clock_secs(&self) -> f64 {
        self.frame_clock_secs
    }

    pub fn item_for_stream(&self, stream_index: usize) -> Option<&OrbitalItem> {
        self.items.iter().find(|i| i.stream_index == stream_index)
    }

    /// Place the next catalog stream. The insertion index is the number of
    /// items already visible; returns the index of the new item.
    pub fn insert(
        &mut self,
        catalog: &RateCatalog,
        params: &OrbitParams,
    ) -> Result<usize, LayoutError> {
        let index = self.items.len();
        let slot = plan_slot(index, catalog, params)?;
        self.items
            .push(OrbitalItem::new(index, slot, self.frame_clock_secs, params));
        Ok(index)
    }

    /// Advance the frame clock and every unpaused item by `dt_secs`.
    pub fn advance(&mut self, dt_secs: f64, params: &OrbitParams) {
        if !dt_secs.is_finite() || dt_secs <= 0.0 {
            return;
        }
        self.frame_clock_secs += dt_secs;
        for item in &mut self.items {
            item.advance(dt_secs, params);
        }
    }

    /// Freeze or resume one item. Returns `false` if the stream is not visible.
    pub fn set_paused(&mut self, stream_index: usize, paused: bool) -> bool {
        match self.items.iter_mut().find(|i| i.stream_index == stream_index) {
            Some(item) => {
                item.paused = paused;
                true
            }
            None => false,
        }
    }

    /// Remove every item and restart the frame clock.
    pub fn clear(&mut self) {
        self.items.clear();
        self.frame_clock_secs = 0.0;
    }
}
