//! Star field painting.
//!
//! Stars are tiny, so each is drawn as a gizmo circle of radius
//! `size * brightness`. Flaring stars get an extra halo at 1.5x.

use bevy::prelude::*;

use simulation::particles::ParticleField;

use crate::palette::{star_color, star_halo_color};
use crate::view::ViewTransform;

const MIN_STAR_RADIUS: f32 = 0.35;
const HALO_BRIGHTNESS_THRESHOLD: f32 = 1.5;
const HALO_RADIUS_FACTOR: f32 = 1.5;
const STAR_SEGMENTS: u32 = 8;

pub fn draw_starfield(field: Res<ParticleField>, mut gizmos: Gizmos) {
    for star in field.particles() {
        if star.opacity <= 0.0 {
            continue;
        }
        let center = ViewTransform::field_to_world(star.position);
        let radius = (star.size_px * star.brightness).max(MIN_STAR_RADIUS);
        let color = star_color(star.brightness, star.opacity);
        gizmos
            .circle_2d(center, radius, color)
            .resolution(STAR_SEGMENTS);
        // Inner ring so small stars read as filled dots.
        gizmos
            .circle_2d(center, radius * 0.5, color)
            .resolution(STAR_SEGMENTS);

        if star.brightness > HALO_BRIGHTNESS_THRESHOLD {
            gizmos
                .circle_2d(
                    center,
                    radius * HALO_RADIUS_FACTOR,
                    star_halo_color(star.opacity),
                )
                .resolution(STAR_SEGMENTS * 2);
        }
    }
}
