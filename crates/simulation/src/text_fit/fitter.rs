use crate::visual_params::FitParams;

use super::measure::TextMeasure;

/// Lines and font size chosen for a label.
#[derive(Debug, Clone, PartialEq)]
pub struct FitResult {
    pub lines: Vec<String>,
    pub font_size_px: f32,
    pub line_height_px: f32,
    /// `false` when the result is the best-effort floor-size layout.
    pub fits: bool,
}

impl FitResult {
    pub fn block_height_px(&self) -> f32 {
        self.lines.len() as f32 * self.line_height_px
    }
}

#[derive(Debug, Clone)]
pub struct TextFitter<M> {
    params: FitParams,
    measure: M,
}

impl<M: TextMeasure> TextFitter<M> {
    pub fn new(params: FitParams, measure: M) -> Self {
        Self { params, measure }
    }

    pub fn params(&self) -> &FitParams {
        &self.params
    }

    /// Smallest size the fitter will shrink to for `base_font_px`.
    pub fn floor_px(&self, base_font_px: f32) -> f32 {
        let base = self.sanitize_base(base_font_px);
        self.params
            .min_font_px
            .max(base * self.params.floor_ratio)
            .min(base)
    }

    /// Fit `text` into a `max_width_px` x `max_height_px` box, starting at
    /// `base_font_px` and shrinking until both dimensions fit or the floor is
    /// reached. Never fails.
    pub fn fit(
        &self,
        text: &str,
        max_width_px: f32,
        max_height_px: f32,
        base_font_px: f32,
    ) -> FitResult {
        let base = self.sanitize_base(base_font_px);
        let floor = self.floor_px(base);
        let text = text.trim();
        if text.is_empty() {
            return self.result(Vec::new(), base, true);
        }

        let step = self.params.shrink_step_px.max(0.1);
        let mut size = base;
        loop {
            let Some(lines) = self.layout_at(text, max_width_px, size) else {
                return self.degraded(text, floor);
            };
            let Some(fits) = self.block_fits(&lines, max_width_px, max_height_px, size) else {
                return self.degraded(text, floor);
            };
            if fits {
                return self.result(lines, size, true);
            }
            if size <= floor {
                return self.result(lines, floor, false);
            }
            size = (size - step).max(floor);
        }
    }

    fn sanitize_base(&self, base_font_px: f32) -> f32 {
        if base_font_px.is_finite() && base_font_px > 0.0 {
            base_font_px
        } else {
            self.params.min_font_px
        }
    }

    /// Unbroken line if it fits the width, otherwise greedy word wrap
    /// capped at `max_lines`. Words wider than the box stay unbroken.
    fn layout_at(&self, text: &str, max_width_px: f32, size: f32) -> Option<Vec<String>> {
        if self.measure.line_width(text, size)? <= max_width_px {
            return Some(vec![text.to_string()]);
        }

        let mut lines: Vec<String> = Vec::new();
        let mut current = String::new();
        for word in text.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
                continue;
            }
            let candidate = format!("{current} {word}");
            if self.measure.line_width(&candidate, size)? <= max_width_px {
                current = candidate;
            } else {
                lines.push(std::mem::replace(&mut current, word.to_string()));
                if lines.len() == self.params.max_lines {
                    return Some(lines);
                }
            }
        }
        if !current.is_empty() && lines.len() < self.params.max_lines {
            lines.push(current);
        }
        Some(lines)
    }

    fn block_fits(
        &self,
        lines: &[String],
        max_width_px: f32,
        max_height_px: f32,
        size: f32,
    ) -> Option<bool> {
        let height = lines.len() as f32 * size * self.params.line_height_factor;
        if height > max_height_px {
            return Some(false);
        }
        for line in lines {
            if self.measure.line_width(line, size)? > max_width_px {
                return Some(false);
            }
        }
        Some(true)
    }

    /// Metrics unavailable: the whole text on one line at the floor size.
    fn degraded(&self, text: &str, floor: f32) -> FitResult {
        self.result(vec![text.to_string()], floor, false)
    }

    fn result(&self, lines: Vec<String>, size: f32, fits: bool) -> FitResult {
        FitResult {
            lines,
            font_size_px: size,
            line_height_px: size * self.params.line_height_factor,
            fits,
        }
    }
}
