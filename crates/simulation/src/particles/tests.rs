use bevy::math::Vec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::*;
use crate::config::{BRIGHTNESS_FLOOR, TRIGGER_BRIGHTNESS};
use crate::visual_params::ParticleParams;

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(7)
}

fn seeded_field(params: &ParticleParams, rng: &mut ChaCha8Rng) -> ParticleField {
    let mut field = ParticleField::new(Vec2::new(1280.0, 720.0));
    field.seed(params, rng);
    field
}

#[test]
fn test_seed_spawns_initial_population_inside_bounds() {
    let params = ParticleParams::default();
    let mut rng = rng();
    let field = seeded_field(&params, &mut rng);
    assert_eq!(field.len(), params.initial_population);
    for p in field.particles() {
        assert!(p.position.x.abs() <= 640.0 && p.position.y.abs() <= 360.0);
        assert!(p.size_px >= params.size_px.0 && p.size_px <= params.size_px.1);
        assert_eq!(p.state, ParticleState::Steady);
        assert_eq!(p.opacity, p.target_opacity);
        assert!(
            p.lifespan_frames >= params.initial_lifespan_frames.0
                && p.lifespan_frames <= params.initial_lifespan_frames.1
        );
    }
}

#[test]
fn test_initial_lifespans_are_staggered() {
    let params = ParticleParams::default();
    let mut rng = rng();
    let field = seeded_field(&params, &mut rng);
    let first = field.particles()[0].lifespan_frames;
    assert!(field.particles().iter().any(|p| p.lifespan_frames != first));
}

#[test]
fn test_population_never_exceeds_max() {
    let params = ParticleParams {
        spawn_probability: 1.0,
        refill_per_frame: 50,
        ..Default::default()
    };
    let mut rng = rng();
    let mut field = seeded_field(&params, &mut rng);
    for frame in 0..2_000 {
        field.advance(&params, &mut rng);
        if frame % 3 == 0 {
            field.trigger(&mut rng);
        }
        assert!(field.len() <= params.max_population, "frame {frame}");
    }
}

#[test]
fn test_population_recovers_toward_band() {
    let params = ParticleParams::default();
    let mut rng = rng();
    let mut field = seeded_field(&params, &mut rng);
    // Long enough for the whole initial population to expire.
    for _ in 0..1_000 {
        field.advance(&params, &mut rng);
    }
    assert!(field.len() >= params.min_population - 10);
}

#[test]
fn test_trigger_marks_exactly_one() {
    let params = ParticleParams::default();
    let mut rng = rng();
    let mut field = seeded_field(&params, &mut rng);
    let before = field.state_counts().disappearing;
    let id = field.trigger(&mut rng).expect("eligible particles exist");
    assert_eq!(field.state_counts().disappearing, before + 1);

    let flared = field.particles().iter().find(|p| p.id == id).unwrap();
    assert_eq!(flared.state, ParticleState::Disappearing);
    assert_eq!(flared.brightness, TRIGGER_BRIGHTNESS);
}

#[test]
fn test_trigger_on_empty_field_is_noop() {
    let mut rng = rng();
    let mut field = ParticleField::new(Vec2::new(100.0, 100.0));
    assert_eq!(field.trigger(&mut rng), None);
    assert!(field.is_empty());
}

#[test]
fn test_trigger_skips_when_all_disappearing() {
    let params = ParticleParams {
        initial_population: 3,
        ..Default::default()
    };
    let mut rng = rng();
    let mut field = seeded_field(&params, &mut rng);
    for _ in 0..3 {
        assert!(field.trigger(&mut rng).is_some());
    }
    assert_eq!(field.trigger(&mut rng), None);
    assert_eq!(field.state_counts().disappearing, 3);
}

#[test]
fn test_disappearing_fades_and_is_removed() {
    let params = ParticleParams {
        initial_population: 1,
        min_population: 0,
        spawn_probability: 0.0,
        ..Default::default()
    };
    let mut rng = rng();
    let mut field = seeded_field(&params, &mut rng);
    let id = field.trigger(&mut rng).unwrap();

    field.advance(&params, &mut rng);
    let p = &field.particles()[0];
    assert_eq!(p.id, id);
    assert!(p.brightness < TRIGGER_BRIGHTNESS);
    assert!(p.opacity < p.target_opacity);

    // Target opacity is at most 0.8, fade-out is 0.03 per frame.
    for _ in 0..40 {
        field.advance(&params, &mut rng);
    }
    assert!(field.is_empty());
}

#[test]
fn test_brightness_decays_to_floor() {
    let params = ParticleParams {
        initial_population: 1,
        min_population: 0,
        spawn_probability: 0.0,
        target_opacity: (0.8, 0.8),
        ..Default::default()
    };
    let mut rng = rng();
    let mut field = seeded_field(&params, &mut rng);
    field.trigger(&mut rng);
    for _ in 0..25 {
        field.advance(&params, &mut rng);
    }
    assert_eq!(field.particles()[0].brightness, BRIGHTNESS_FLOOR);
}

#[test]
fn test_natural_expiry_has_no_flare() {
    let params = ParticleParams {
        initial_population: 1,
        min_population: 0,
        spawn_probability: 0.0,
        initial_lifespan_frames: (5, 5),
        ..Default::default()
    };
    let mut rng = rng();
    let mut field = seeded_field(&params, &mut rng);
    for _ in 0..4 {
        field.advance(&params, &mut rng);
        assert_eq!(field.particles()[0].brightness, BRIGHTNESS_FLOOR);
    }
    field.advance(&params, &mut rng);
    assert!(field.is_empty());
}

#[test]
fn test_replacements_fade_in_from_zero() {
    let params = ParticleParams {
        initial_population: 0,
        min_population: 1,
        refill_per_frame: 1,
        spawn_probability: 0.0,
        target_opacity: (0.5, 0.5),
        ..Default::default()
    };
    let mut rng = rng();
    let mut field = seeded_field(&params, &mut rng);
    field.advance(&params, &mut rng);
    assert_eq!(field.len(), 1);
    assert_eq!(field.particles()[0].opacity, 0.0);
    assert_eq!(field.particles()[0].state, ParticleState::Growing);

    field.advance(&params, &mut rng);
    let p = &field.particles()[0];
    assert!(p.opacity > 0.0 && p.opacity <= 0.5);
}

#[test]
fn test_growing_becomes_steady_at_target() {
    let params = ParticleParams {
        initial_population: 0,
        min_population: 1,
        spawn_probability: 0.0,
        target_opacity: (0.02, 0.02),
        ..Default::default()
    };
    let mut rng = rng();
    let mut field = seeded_field(&params, &mut rng);
    for _ in 0..10 {
        field.advance(&params, &mut rng);
    }
    let p = &field.particles()[0];
    assert_eq!(p.state, ParticleState::Steady);
    assert_eq!(p.opacity, 0.02);
}

#[test]
fn test_same_seed_same_field() {
    let params = ParticleParams::default();
    let mut a = rng();
    let mut b = rng();
    let mut fa = seeded_field(&params, &mut a);
    let mut fb = seeded_field(&params, &mut b);
    for _ in 0..100 {
        fa.advance(&params, &mut a);
        fb.advance(&params, &mut b);
        assert_eq!(fa.trigger(&mut a), fb.trigger(&mut b));
    }
    assert_eq!(fa.particles(), fb.particles());
}

#[test]
fn test_degenerate_bounds_are_clamped() {
    let field = ParticleField::new(Vec2::new(0.0, f32::NAN));
    assert_eq!(field.bounds(), Vec2::ONE);
}
