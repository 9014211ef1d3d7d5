//! Data-driven visual parameters.
//!
//! Collects the tunables of the orbital layout, the particle field, the text
//! fitter and the phase controller into a single [`VisualParams`] resource so
//! they can be overridden from a JSON file without recompilation. Every group
//! is `#[serde(default)]`, so an override file only needs the keys it changes.

use std::fmt;
use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{ITEMS_PER_RING, MIN_FONT_PX};

// ---------------------------------------------------------------------------
// Orbit parameters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitParams {
    pub items_per_ring: usize,
    /// Radius of ring 0 in layout pixels.
    pub base_radius_px: f32,
    /// Extra clearance between consecutive rings.
    pub ring_gap_px: f32,
    /// Lower bound on the per-ring size buffer.
    pub min_buffer_px: f32,
    /// Angular stagger applied per ring so rings don't line up radially.
    pub ring_angle_offset_deg: f32,
    /// Angular velocity of ring 0.
    pub base_angular_velocity_deg: f32,
    /// Outer rings rotate at `base / (1 + falloff * ring)`.
    pub ring_velocity_falloff: f32,
    /// Item diameter for the lowest-rate stream.
    pub min_item_px: f32,
    /// Item diameter for the highest-rate stream.
    pub max_item_px: f32,
    /// Relative amplitude of the radial drift (0.01 = 1% of the radius).
    pub depth_variance_amplitude: f32,
    /// Angular frequency of the radial drift in radians per second.
    pub depth_variance_frequency: f32,
}

impl Default for OrbitParams {
    fn default() -> Self {
        Self {
            items_per_ring: ITEMS_PER_RING,
            base_radius_px: 200.0,
            ring_gap_px: 16.0,
            min_buffer_px: 72.0,
            ring_angle_offset_deg: 22.5,
            base_angular_velocity_deg: 3.0,
            ring_velocity_falloff: 0.15,
            min_item_px: 72.0,
            max_item_px: 128.0,
            depth_variance_amplitude: 0.008,
            depth_variance_frequency: 0.8,
        }
    }
}

// ---------------------------------------------------------------------------
// Particle parameters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleParams {
    pub initial_population: usize,
    pub min_population: usize,
    pub max_population: usize,
    /// Probability of each spawn roll succeeding while below `max_population`.
    pub spawn_probability: f32,
    /// Spawns per frame allowed while below `min_population`.
    pub refill_per_frame: usize,
    /// Lifespan range of the initial population, in frames.
    pub initial_lifespan_frames: (u32, u32),
    /// Lifespan range of replacement particles, in frames.
    pub lifespan_frames: (u32, u32),
    pub size_px: (f32, f32),
    pub target_opacity: (f32, f32),
    /// Opacity gained per frame while growing.
    pub fade_in_step: f32,
    /// Opacity lost per frame while disappearing.
    pub fade_out_step: f32,
    /// Brightness lost per frame while disappearing.
    pub brightness_decay: f32,
}

impl Default for ParticleParams {
    fn default() -> Self {
        Self {
            initial_population: 200,
            min_population: 150,
            max_population: 300,
            spawn_probability: 0.02,
            refill_per_frame: 2,
            initial_lifespan_frames: (100, 400),
            lifespan_frames: (200, 600),
            size_px: (0.3, 1.5),
            target_opacity: (0.2, 0.8),
            fade_in_step: 0.005,
            fade_out_step: 0.03,
            brightness_decay: 0.15,
        }
    }
}

// ---------------------------------------------------------------------------
// Text fit parameters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitParams {
    /// Line height as a multiple of the font size.
    pub line_height_factor: f32,
    /// Font size decrement per shrink step.
    pub shrink_step_px: f32,
    /// Absolute font size floor.
    pub min_font_px: f32,
    /// Relative floor: the fitter never goes below `base * floor_ratio`.
    pub floor_ratio: f32,
    pub max_lines: usize,
}

impl Default for FitParams {
    fn default() -> Self {
        Self {
            line_height_factor: 1.2,
            shrink_step_px: 1.0,
            min_font_px: MIN_FONT_PX,
            floor_ratio: 0.5,
            max_lines: 2,
        }
    }
}

// ---------------------------------------------------------------------------
// Phase parameters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhaseParams {
    pub intro_secs: f32,
    /// Delay between successive item reveals during the orbital phase.
    pub reveal_interval_secs: f32,
    /// Length of the orbital phase; `None` keeps it running indefinitely.
    pub orbital_secs: Option<f32>,
    pub finale_secs: f32,
}

impl Default for PhaseParams {
    fn default() -> Self {
        Self {
            intro_secs: 6.0,
            reveal_interval_secs: 1.0,
            orbital_secs: Some(300.0),
            finale_secs: 10.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur while loading a params override.
#[derive(Debug)]
pub enum ParamsError {
    /// The override file could not be read.
    Io(std::io::Error),
    /// The override file is not valid JSON for [`VisualParams`].
    Parse(String),
    /// The values parsed but are inconsistent with each other.
    Invalid(String),
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamsError::Io(e) => write!(f, "I/O error: {e}"),
            ParamsError::Parse(msg) => write!(f, "Parse error: {msg}"),
            ParamsError::Invalid(msg) => write!(f, "Invalid params: {msg}"),
        }
    }
}

impl std::error::Error for ParamsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParamsError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ParamsError {
    fn from(e: std::io::Error) -> Self {
        ParamsError::Io(e)
    }
}

impl From<serde_json::Error> for ParamsError {
    fn from(e: serde_json::Error) -> Self {
        ParamsError::Parse(e.to_string())
    }
}

// ---------------------------------------------------------------------------
// Resource
// ---------------------------------------------------------------------------

/// All visual tunables, read by the core systems via `Res<VisualParams>`.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualParams {
    pub orbit: OrbitParams,
    pub particles: ParticleParams,
    pub fit: FitParams,
    pub phases: PhaseParams,
}

impl VisualParams {
    pub fn from_json_str(json: &str) -> Result<Self, ParamsError> {
        let params: VisualParams = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ParamsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Reject combinations the engine cannot honor.
    pub fn validate(&self) -> Result<(), ParamsError> {
        let o = &self.orbit;
        if o.items_per_ring == 0 {
            return Err(ParamsError::Invalid("items_per_ring must be > 0".into()));
        }
        if o.min_item_px <= 0.0 || o.max_item_px < o.min_item_px {
            return Err(ParamsError::Invalid(format!(
                "item size range {}..{} is empty",
                o.min_item_px, o.max_item_px
            )));
        }

        let p = &self.particles;
        if p.min_population > p.max_population {
            return Err(ParamsError::Invalid(format!(
                "min_population {} exceeds max_population {}",
                p.min_population, p.max_population
            )));
        }
        if p.initial_population > p.max_population {
            return Err(ParamsError::Invalid(format!(
                "initial_population {} exceeds max_population {}",
                p.initial_population, p.max_population
            )));
        }
        if !(0.0..=1.0).contains(&p.spawn_probability) {
            return Err(ParamsError::Invalid(
                "spawn_probability must be within [0, 1]".into(),
            ));
        }
        if p.fade_out_step <= 0.0 || p.fade_in_step <= 0.0 {
            return Err(ParamsError::Invalid("fade steps must be > 0".into()));
        }
        let ranges_ok = p.initial_lifespan_frames.0 <= p.initial_lifespan_frames.1
            && p.lifespan_frames.0 <= p.lifespan_frames.1
            && p.size_px.0 <= p.size_px.1
            && p.target_opacity.0 <= p.target_opacity.1
            && p.target_opacity.1 <= 1.0;
        if !ranges_ok {
            return Err(ParamsError::Invalid(
                "particle ranges must be ordered (min <= max, opacity <= 1)".into(),
            ));
        }

        let f = &self.fit;
        if f.shrink_step_px <= 0.0 || f.line_height_factor <= 0.0 || f.max_lines == 0 {
            return Err(ParamsError::Invalid(
                "fit params need a positive shrink step, line height and line count".into(),
            ));
        }

        let ph = &self.phases;
        if ph.reveal_interval_secs <= 0.0 {
            return Err(ParamsError::Invalid(
                "reveal_interval_secs must be > 0".into(),
            ));
        }
        Ok(())
    }
}
