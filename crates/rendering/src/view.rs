//! Mapping between layout space and the window.
//!
//! Layout space is centered on the counter with +y down. Bevy world space is
//! centered with +y up, and egui screen space has its origin top-left. The
//! layout is scaled down uniformly (never up) so every ring the catalog can
//! fill stays on screen.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use simulation::catalog::RateCatalog;
use simulation::config::{DEFAULT_VIEW_HEIGHT, DEFAULT_VIEW_WIDTH};
use simulation::orbital::planned_extent_px;
use simulation::particles::ParticleField;
use simulation::visual_params::VisualParams;

/// Screen space kept free for the header and footer.
const VERTICAL_MARGIN_PX: f32 = 56.0;

/// Smallest scale the layout is ever drawn at.
const MIN_SCALE: f32 = 0.2;

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub window_size: Vec2,
    pub scale: f32,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            window_size: Vec2::new(DEFAULT_VIEW_WIDTH, DEFAULT_VIEW_HEIGHT),
            scale: 1.0,
        }
    }
}

impl ViewTransform {
    /// Uniform scale at which a layout of radius `extent_px` fits the window.
    pub fn fit_scale(window_size: Vec2, extent_px: f32) -> f32 {
        if extent_px <= 0.0 {
            return 1.0;
        }
        let half = (window_size.x * 0.5).min(window_size.y * 0.5 - VERTICAL_MARGIN_PX);
        (half / extent_px).clamp(MIN_SCALE, 1.0)
    }

    pub fn center(&self) -> Vec2 {
        self.window_size * 0.5
    }

    pub fn layout_to_world(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x, -p.y) * self.scale
    }

    pub fn layout_to_screen(&self, p: Vec2) -> Vec2 {
        self.center() + p * self.scale
    }

    pub fn screen_to_layout(&self, s: Vec2) -> Vec2 {
        (s - self.center()) / self.scale
    }

    /// Particle field coordinates are unscaled window pixels.
    pub fn field_to_world(p: Vec2) -> Vec2 {
        Vec2::new(p.x, -p.y)
    }
}

/// Track the window size and resize the particle field's spawn area with it.
pub fn update_view_transform(
    windows: Query<&Window, With<PrimaryWindow>>,
    catalog: Res<RateCatalog>,
    params: Res<VisualParams>,
    mut view: ResMut<ViewTransform>,
    mut field: ResMut<ParticleField>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let size = Vec2::new(window.width(), window.height());
    if size.x <= 0.0 || size.y <= 0.0 {
        return;
    }
    let scale = ViewTransform::fit_scale(size, planned_extent_px(&catalog, &params.orbit));
    let next = ViewTransform {
        window_size: size,
        scale,
    };
    if *view != next {
        debug!("View {}x{} at scale {:.3}", size.x, size.y, scale);
        *view = next;
        field.set_bounds(size);
    }
}
