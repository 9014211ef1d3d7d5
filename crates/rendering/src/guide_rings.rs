//! Decorative guide rings behind the orbit.

use std::f32::consts::TAU;

use bevy::prelude::*;

use crate::view::ViewTransform;

const RING_COUNT: usize = 4;
const BASE_DIAMETER_PX: f32 = 400.0;
const DIAMETER_STEP_PX: f32 = 120.0;
const BASE_PERIOD_SECS: f32 = 20.0;
const PERIOD_STEP_SECS: f32 = 5.0;
const DASHES_PER_RING: usize = 36;
/// Fraction of each dash slot that is drawn.
const DASH_FILL: f32 = 0.5;

const RING_COLOR: Color = Color::srgba(0.4, 0.4, 0.45, 0.12);

/// Rotation of ring `index` at `elapsed_secs`, counter-clockwise on screen.
pub fn ring_rotation(index: usize, elapsed_secs: f32) -> f32 {
    let period = BASE_PERIOD_SECS + PERIOD_STEP_SECS * index as f32;
    (elapsed_secs / period * TAU).rem_euclid(TAU)
}

pub fn draw_guide_rings(time: Res<Time>, view: Res<ViewTransform>, mut gizmos: Gizmos) {
    let slot = TAU / DASHES_PER_RING as f32;
    for i in 0..RING_COUNT {
        let radius = (BASE_DIAMETER_PX + DIAMETER_STEP_PX * i as f32) * 0.5 * view.scale;
        let rotation = ring_rotation(i, time.elapsed_secs());
        for dash in 0..DASHES_PER_RING {
            let start = rotation + dash as f32 * slot;
            gizmos.arc_2d(
                Isometry2d::new(Vec2::ZERO, Rot2::radians(start)),
                slot * DASH_FILL,
                radius,
                RING_COLOR,
            );
        }
    }
}
