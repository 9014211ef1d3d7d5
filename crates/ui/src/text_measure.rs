//! Font metrics from egui for the label fitter.

use bevy_egui::egui;

use simulation::text_fit::TextMeasure;

/// Measures single-line widths with egui's proportional font.
pub struct EguiTextMeasure<'a> {
    ctx: &'a egui::Context,
}

impl<'a> EguiTextMeasure<'a> {
    pub fn new(ctx: &'a egui::Context) -> Self {
        Self { ctx }
    }
}

impl TextMeasure for EguiTextMeasure<'_> {
    fn line_width(&self, text: &str, font_px: f32) -> Option<f32> {
        // The font atlas only exists once a pass has completed.
        if self.ctx.cumulative_pass_nr() == 0 || !font_px.is_finite() || font_px <= 0.0 {
            return None;
        }
        let font = egui::FontId::proportional(font_px);
        let width = self.ctx.fonts(|fonts| {
            fonts
                .layout_no_wrap(text.to_owned(), font, egui::Color32::WHITE)
                .size()
                .x
        });
        Some(width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_metrics_before_first_pass() {
        let ctx = egui::Context::default();
        assert_eq!(EguiTextMeasure::new(&ctx).line_width("Cancer", 12.0), None);
    }
}
