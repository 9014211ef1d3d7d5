use bevy::prelude::*;
use rand::Rng;

use crate::config::{BRIGHTNESS_FLOOR, TRIGGER_BRIGHTNESS};
use crate::visual_params::ParticleParams;

pub type ParticleId = u64;

/// Lifecycle of a particle. Natural expiry removes a particle from
/// `Growing` or `Steady` directly; only a trigger moves it to `Disappearing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticleState {
    Growing,
    Steady,
    Disappearing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub id: ParticleId,
    /// Field-space position (origin at the center, +y down).
    pub position: Vec2,
    pub size_px: f32,
    pub opacity: f32,
    pub target_opacity: f32,
    pub brightness: f32,
    pub age_frames: u32,
    pub lifespan_frames: u32,
    pub state: ParticleState,
}

impl Particle {
    pub fn is_eligible_for_trigger(&self) -> bool {
        self.state != ParticleState::Disappearing
    }
}

/// Per-state population counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StateCounts {
    pub growing: usize,
    pub steady: usize,
    pub disappearing: usize,
}

/// Ambient star field. Population stays within `[0, max_population]` after
/// every operation.
#[derive(Resource, Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    /// Width and height of the area particles spawn in.
    bounds: Vec2,
    next_id: ParticleId,
}

impl ParticleField {
    pub fn new(bounds: Vec2) -> Self {
        Self {
            particles: Vec::new(),
            bounds: sanitize_bounds(bounds),
            next_id: 0,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// New spawns use the new bounds; live particles keep their position.
    pub fn set_bounds(&mut self, bounds: Vec2) {
        self.bounds = sanitize_bounds(bounds);
    }

    pub fn state_counts(&self) -> StateCounts {
        let mut counts = StateCounts::default();
        for p in &self.particles {
            match p.state {
                ParticleState::Growing => counts.growing += 1,
                ParticleState::Steady => counts.steady += 1,
                ParticleState::Disappearing => counts.disappearing += 1,
            }
        }
        counts
    }

    /// Replace the population with a fresh initial one.
    ///
    /// Initial particles start visible at their target opacity. Lifespans
    /// come from `initial_lifespan_frames` so expiry is staggered.
    pub fn seed<R: Rng + ?Sized>(&mut self, params: &ParticleParams, rng: &mut R) {
        self.particles.clear();
        let count = params.initial_population.min(params.max_population);
        for _ in 0..count {
            let lifespan = sample_u32(rng, params.initial_lifespan_frames);
            let mut particle = self.spawn_particle(params, lifespan, rng);
            particle.opacity = particle.target_opacity;
            particle.state = ParticleState::Steady;
            self.particles.push(particle);
        }
    }

    /// One frame of lifecycle update followed by population maintenance.
    pub fn advance<R: Rng + ?Sized>(&mut self, params: &ParticleParams, rng: &mut R) {
        self.particles.retain_mut(|p| {
            p.age_frames = p.age_frames.saturating_add(1);
            match p.state {
                ParticleState::Disappearing => {
                    p.opacity -= params.fade_out_step;
                    p.brightness = (p.brightness - params.brightness_decay).max(BRIGHTNESS_FLOOR);
                    p.opacity > 0.0
                }
                _ if p.age_frames >= p.lifespan_frames => false,
                ParticleState::Growing => {
                    p.opacity = (p.opacity + params.fade_in_step).min(p.target_opacity);
                    if p.opacity >= p.target_opacity {
                        p.state = ParticleState::Steady;
                    }
                    true
                }
                ParticleState::Steady => true,
            }
        });

        let mut refills = 0;
        while self.particles.len() < params.min_population.min(params.max_population)
            && refills < params.refill_per_frame
        {
            self.spawn_replacement(params, rng);
            refills += 1;
        }

        if self.particles.len() < params.max_population
            && rng.gen_bool(f64::from(params.spawn_probability.clamp(0.0, 1.0)))
        {
            self.spawn_replacement(params, rng);
        }
    }

    /// Mark one random `Growing` or `Steady` particle as `Disappearing` and
    /// spike its brightness. Returns `None` when nothing is eligible.
    pub fn trigger<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<ParticleId> {
        let eligible = self
            .particles
            .iter()
            .filter(|p| p.is_eligible_for_trigger())
            .count();
        if eligible == 0 {
            return None;
        }
        let pick = rng.gen_range(0..eligible);
        let particle = self
            .particles
            .iter_mut()
            .filter(|p| p.is_eligible_for_trigger())
            .nth(pick)?;
        particle.state = ParticleState::Disappearing;
        particle.brightness = TRIGGER_BRIGHTNESS;
        Some(particle.id)
    }

    fn spawn_replacement<R: Rng + ?Sized>(&mut self, params: &ParticleParams, rng: &mut R) {
        let lifespan = sample_u32(rng, params.lifespan_frames);
        let particle = self.spawn_particle(params, lifespan, rng);
        self.particles.push(particle);
    }

    fn spawn_particle<R: Rng + ?Sized>(
        &mut self,
        params: &ParticleParams,
        lifespan_frames: u32,
        rng: &mut R,
    ) -> Particle {
        let half = self.bounds * 0.5;
        let id = self.next_id;
        self.next_id += 1;
        Particle {
            id,
            position: Vec2::new(
                rng.gen_range(-half.x..=half.x),
                rng.gen_range(-half.y..=half.y),
            ),
            size_px: sample_f32(rng, params.size_px),
            opacity: 0.0,
            target_opacity: sample_f32(rng, params.target_opacity),
            brightness: BRIGHTNESS_FLOOR,
            age_frames: 0,
            lifespan_frames: lifespan_frames.max(1),
            state: ParticleState::Growing,
        }
    }
}

fn sanitize_bounds(bounds: Vec2) -> Vec2 {
    Vec2::new(
        if bounds.x.is_finite() { bounds.x.max(1.0) } else { 1.0 },
        if bounds.y.is_finite() { bounds.y.max(1.0) } else { 1.0 },
    )
}

fn sample_u32<R: Rng + ?Sized>(rng: &mut R, (lo, hi): (u32, u32)) -> u32 {
    if hi <= lo {
        lo
    } else {
        rng.gen_range(lo..=hi)
    }
}

fn sample_f32<R: Rng + ?Sized>(rng: &mut R, (lo, hi): (f32, f32)) -> f32 {
    if hi <= lo {
        lo
    } else {
        rng.gen_range(lo..=hi)
    }
}
