//! Cache of fitted labels.
//!
//! Fitting is deterministic in `(text, box, base size)`, so a result is reused
//! until the box changes, e.g. when the view scale or hover zoom changes the
//! disc diameter.

use std::collections::HashMap;

use bevy::prelude::*;

use simulation::text_fit::{FitResult, TextFitter, TextMeasure};

/// Entries beyond this are dropped wholesale; hover zoom produces many
/// transient sizes.
const MAX_ENTRIES: usize = 512;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct FitKey {
    text: String,
    width_bits: u32,
    height_bits: u32,
    base_bits: u32,
}

impl FitKey {
    fn new(text: &str, width: f32, height: f32, base: f32) -> Self {
        // Quantize to a tenth of a pixel so animation jitter still hits.
        let q = |v: f32| ((v * 10.0).round() / 10.0).to_bits();
        Self {
            text: text.to_string(),
            width_bits: q(width),
            height_bits: q(height),
            base_bits: q(base),
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct LabelFitCache {
    entries: HashMap<FitKey, FitResult>,
}

impl LabelFitCache {
    pub fn fit<M: TextMeasure>(
        &mut self,
        fitter: &TextFitter<M>,
        text: &str,
        max_width_px: f32,
        max_height_px: f32,
        base_font_px: f32,
    ) -> FitResult {
        let key = FitKey::new(text, max_width_px, max_height_px, base_font_px);
        if let Some(hit) = self.entries.get(&key) {
            return hit.clone();
        }
        let result = fitter.fit(text, max_width_px, max_height_px, base_font_px);
        if self.entries.len() >= MAX_ENTRIES {
            self.entries.clear();
        }
        self.entries.insert(key, result.clone());
        result
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use simulation::text_fit::GlyphAdvanceEstimate;
    use simulation::visual_params::FitParams;

    struct CountingMeasure<'a> {
        calls: &'a Cell<usize>,
    }

    impl TextMeasure for CountingMeasure<'_> {
        fn line_width(&self, text: &str, font_px: f32) -> Option<f32> {
            self.calls.set(self.calls.get() + 1);
            GlyphAdvanceEstimate::default().line_width(text, font_px)
        }
    }

    #[test]
    fn test_repeat_fit_hits_cache() {
        let calls = Cell::new(0);
        let fitter = TextFitter::new(FitParams::default(), CountingMeasure { calls: &calls });
        let mut cache = LabelFitCache::default();

        let a = cache.fit(&fitter, "Cardiovascular diseases", 60.0, 40.0, 20.0);
        let after_first = calls.get();
        assert!(after_first > 0);
        let b = cache.fit(&fitter, "Cardiovascular diseases", 60.0, 40.0, 20.0);
        assert_eq!(a, b);
        assert_eq!(calls.get(), after_first);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_changed_box_refits() {
        let fitter = TextFitter::new(FitParams::default(), GlyphAdvanceEstimate::default());
        let mut cache = LabelFitCache::default();
        cache.fit(&fitter, "Cancer", 60.0, 40.0, 20.0);
        cache.fit(&fitter, "Cancer", 80.0, 40.0, 20.0);
        assert_eq!(cache.len(), 2);
        cache.clear();
        assert!(cache.is_empty());
    }
}
