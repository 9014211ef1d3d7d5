//! Assertion helpers for `TestScene` integration tests.

use crate::visual_params::VisualParams;

use super::TestScene;

impl TestScene {
    /// Assert the particle population is inside `[0, max_population]`.
    pub fn assert_population_within_bounds(&self) {
        let max = self.resource::<VisualParams>().particles.max_population;
        let len = self.field().len();
        assert!(len <= max, "Expected population <= {max}, got {len}");
    }

    /// Assert the scene is in its post-reset state, at most one frame after
    /// the reset ran.
    pub fn assert_initial_state(&self) {
        let initial = self.resource::<VisualParams>().particles.initial_population;
        assert_eq!(self.elapsed_seconds(), 0, "clock not reset");
        assert_eq!(self.counters().aggregate(), 0, "aggregate not reset");
        assert!(
            self.counters().counts().iter().all(|&c| c == 0),
            "stream counters not reset"
        );
        assert!(self.layout().is_empty(), "orbital items still visible");
        let field = self.field();
        assert!(
            field.len() >= initial,
            "Expected at least {initial} particles, got {}",
            field.len()
        );
        assert!(
            field.particles().iter().all(|p| p.age_frames <= 1),
            "particle field not re-seeded"
        );
    }
}
