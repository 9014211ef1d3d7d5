use std::fmt;

use crate::catalog::RateCatalog;
use crate::visual_params::OrbitParams;

/// Placement decided once when an item enters the layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalSlot {
    pub ring_index: usize,
    pub orbit_radius_px: f32,
    pub base_angle_deg: f32,
    pub angular_velocity_deg_per_sec: f32,
    pub size_px: f32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The requested insertion index has no stream in the catalog.
    InsertionOutOfRange { index: usize, catalog_len: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::InsertionOutOfRange { index, catalog_len } => write!(
                f,
                "Insertion index {index} is outside the catalog ({catalog_len} streams)"
            ),
        }
    }
}

impl std::error::Error for LayoutError {}

/// Item diameter interpolated linearly between the catalog's lowest and
/// highest daily rate. A flat catalog maps everything to `max_item_px`.
pub fn item_size_px(daily_rate: f64, rate_range: (f64, f64), params: &OrbitParams) -> f32 {
    let (min_rate, max_rate) = rate_range;
    let span = max_rate - min_rate;
    if span <= f64::EPSILON {
        return params.max_item_px;
    }
    let t = ((daily_rate - min_rate) / span).clamp(0.0, 1.0) as f32;
    params.min_item_px + t * (params.max_item_px - params.min_item_px)
}

/// Clearance reserved per ring step: the largest item in rings `0..=ring`,
/// never below `min_buffer_px`.
///
/// Taking the running maximum keeps radii strictly increasing with the ring
/// index even though item sizes shrink along the catalog.
pub fn ring_buffer_px(catalog: &RateCatalog, ring_index: usize, params: &OrbitParams) -> f32 {
    let per_ring = params.items_per_ring.max(1);
    let end = ((ring_index + 1) * per_ring).min(catalog.len());
    let range = catalog.daily_rate_range();
    catalog.streams()[..end]
        .iter()
        .map(|s| item_size_px(s.daily_rate, range, params))
        .fold(params.min_buffer_px, f32::max)
}

/// Compute the slot for the item at `insertion_index`.
pub fn plan_slot(
    insertion_index: usize,
    catalog: &RateCatalog,
    params: &OrbitParams,
) -> Result<OrbitalSlot, LayoutError> {
    let stream = catalog
        .get(insertion_index)
        .ok_or(LayoutError::InsertionOutOfRange {
            index: insertion_index,
            catalog_len: catalog.len(),
        })?;

    let per_ring = params.items_per_ring.max(1);
    let ring_index = insertion_index / per_ring;
    let position_in_ring = insertion_index % per_ring;

    let buffer = ring_buffer_px(catalog, ring_index, params);
    let orbit_radius_px = params.base_radius_px + ring_index as f32 * (buffer + params.ring_gap_px);

    let base_angle_deg = (position_in_ring as f32 * (360.0 / per_ring as f32)
        + ring_index as f32 * params.ring_angle_offset_deg)
        .rem_euclid(360.0);

    let angular_velocity_deg_per_sec =
        params.base_angular_velocity_deg / (1.0 + params.ring_velocity_falloff * ring_index as f32);

    Ok(OrbitalSlot {
        ring_index,
        orbit_radius_px,
        base_angle_deg,
        angular_velocity_deg_per_sec,
        size_px: item_size_px(stream.daily_rate, catalog.daily_rate_range(), params),
    })
}

/// Radius of the smallest circle that holds every item the catalog can
/// reveal, including the radial drift and half of each item's diameter.
pub fn planned_extent_px(catalog: &RateCatalog, params: &OrbitParams) -> f32 {
    (0..catalog.len())
        .filter_map(|i| plan_slot(i, catalog, params).ok())
        .map(|slot| {
            slot.orbit_radius_px * (1.0 + params.depth_variance_amplitude.abs())
                + slot.size_px * 0.5
        })
        .fold(0.0, f32::max)
}
