/// Width measurement of a single line of text.
///
/// Implementations must be synchronous, bounded-cost and deterministic.
/// `None` means metrics are unavailable (e.g. the font atlas isn't ready);
/// the fitter then degrades instead of failing.
pub trait TextMeasure {
    fn line_width(&self, text: &str, font_px: f32) -> Option<f32>;
}

/// Fixed per-character advance in ems.
///
/// Used headless and as the fallback before real font metrics exist.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphAdvanceEstimate {
    pub advance_em: f32,
}

impl Default for GlyphAdvanceEstimate {
    fn default() -> Self {
        Self { advance_em: 0.42 }
    }
}

impl TextMeasure for GlyphAdvanceEstimate {
    fn line_width(&self, text: &str, font_px: f32) -> Option<f32> {
        Some(text.chars().count() as f32 * self.advance_em * font_px)
    }
}

impl<M: TextMeasure + ?Sized> TextMeasure for &M {
    fn line_width(&self, text: &str, font_px: f32) -> Option<f32> {
        (**self).line_width(text, font_px)
    }
}
