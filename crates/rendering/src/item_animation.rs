//! Per-item display scale: hover zoom and count pulses.

use bevy::prelude::*;

use simulation::rate_counter::StreamCountIncreased;

use crate::hover::HoveredItem;

pub const HOVER_SCALE: f32 = 1.25;
pub const PULSE_SCALE: f32 = 1.05;
pub const PULSE_SECS: f32 = 0.3;

/// Exponential approach rate of the hover zoom, per second.
const HOVER_EASE_RATE: f32 = 8.0;

/// Indexed by stream index; grows on demand.
#[derive(Resource, Debug, Clone, Default)]
pub struct ItemAnimations {
    hover_scale: Vec<f32>,
    pulse_remaining_secs: Vec<f32>,
}

impl ItemAnimations {
    /// Combined multiplier applied to the item's base diameter.
    pub fn display_scale(&self, stream_index: usize) -> f32 {
        let hover = self.hover_scale.get(stream_index).copied().unwrap_or(1.0);
        let pulsing = self
            .pulse_remaining_secs
            .get(stream_index)
            .is_some_and(|&t| t > 0.0);
        hover * if pulsing { PULSE_SCALE } else { 1.0 }
    }

    pub fn start_pulse(&mut self, stream_index: usize) {
        self.ensure_len(stream_index + 1);
        self.pulse_remaining_secs[stream_index] = PULSE_SECS;
    }

    pub fn step(&mut self, dt_secs: f32, hovered: Option<usize>) {
        let ease = 1.0 - (-dt_secs * HOVER_EASE_RATE).exp();
        if let Some(i) = hovered {
            self.ensure_len(i + 1);
        }
        for (i, scale) in self.hover_scale.iter_mut().enumerate() {
            let target = if hovered == Some(i) { HOVER_SCALE } else { 1.0 };
            *scale += (target - *scale) * ease;
        }
        for t in &mut self.pulse_remaining_secs {
            *t = (*t - dt_secs).max(0.0);
        }
    }

    fn ensure_len(&mut self, len: usize) {
        if self.hover_scale.len() < len {
            self.hover_scale.resize(len, 1.0);
            self.pulse_remaining_secs.resize(len, 0.0);
        }
    }
}

pub fn start_count_pulses(
    mut events: EventReader<StreamCountIncreased>,
    mut animations: ResMut<ItemAnimations>,
) {
    for event in events.read() {
        animations.start_pulse(event.stream_index);
    }
}

pub fn step_item_animations(
    time: Res<Time>,
    hovered: Res<HoveredItem>,
    mut animations: ResMut<ItemAnimations>,
) {
    animations.step(time.delta_secs(), hovered.0);
}
