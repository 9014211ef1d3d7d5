use super::*;
use crate::visual_params::FitParams;

fn fitter() -> TextFitter<GlyphAdvanceEstimate> {
    TextFitter::new(FitParams::default(), GlyphAdvanceEstimate::default())
}

/// Metrics that are never available.
struct NotReady;

impl TextMeasure for NotReady {
    fn line_width(&self, _text: &str, _font_px: f32) -> Option<f32> {
        None
    }
}

#[test]
fn test_short_text_in_large_box_is_unchanged() {
    let result = fitter().fit("A", 1000.0, 1000.0, 20.0);
    assert_eq!(result.lines, vec!["A".to_string()]);
    assert_eq!(result.font_size_px, 20.0);
    assert!(result.fits);
}

#[test]
fn test_long_label_wraps_and_shrinks() {
    let f = fitter();
    let result = f.fit("Cardiovascular diseases", 60.0, 40.0, 20.0);
    assert!(!result.lines.is_empty() && result.lines.len() <= 2);
    assert!(result.font_size_px >= f.floor_px(20.0));
    assert!(result.font_size_px < 20.0);
    let measure = GlyphAdvanceEstimate::default();
    for line in &result.lines {
        let w = measure.line_width(line, result.font_size_px).unwrap();
        assert!(w <= 60.0, "{line:?} is {w}px at {}px", result.font_size_px);
    }
    assert_eq!(result.lines, vec!["Cardiovascular", "diseases"]);
}

#[test]
fn test_floor_is_max_of_absolute_and_relative() {
    let f = fitter();
    assert_eq!(f.floor_px(20.0), 10.0);
    assert_eq!(f.floor_px(12.0), 8.0);
    // Never above the base size itself.
    assert_eq!(f.floor_px(6.0), 6.0);
}

#[test]
fn test_lines_capped_at_two() {
    let result = fitter().fit("one two three four five six", 10.0, 1000.0, 20.0);
    assert_eq!(result.lines.len(), 2);
    assert_eq!(result.lines[0], "one");
    assert_eq!(result.lines[1], "two");
}

#[test]
fn test_oversized_word_stays_unbroken() {
    let result = fitter().fit("Pneumonoultramicroscopic", 20.0, 100.0, 16.0);
    assert_eq!(result.lines, vec!["Pneumonoultramicroscopic".to_string()]);
    assert!(!result.fits);
    assert_eq!(result.font_size_px, 8.0);
}

#[test]
fn test_height_alone_forces_shrink() {
    // One line needs 1.2x the font size; a 15px box allows at most 12.5px.
    let result = fitter().fit("A", 1000.0, 15.0, 20.0);
    assert!(result.fits);
    assert_eq!(result.font_size_px, 12.0);
    assert!(result.block_height_px() <= 15.0);
}

#[test]
fn test_shrinking_can_unwrap_to_single_line() {
    // Wrapped onto two lines the block is too tall; at 15px it fits unbroken.
    let result = fitter().fit("Road accidents", 90.0, 30.0, 20.0);
    assert!(result.fits);
    assert_eq!(result.font_size_px, 15.0);
    assert_eq!(result.lines, vec!["Road accidents".to_string()]);
}

#[test]
fn test_best_effort_returns_floor() {
    let result = fitter().fit("Cardiovascular diseases", 5.0, 5.0, 20.0);
    assert!(!result.fits);
    assert_eq!(result.font_size_px, 10.0);
    assert!(result.lines.len() <= 2);
}

#[test]
fn test_deterministic() {
    let f = fitter();
    let a = f.fit("Lower respiratory infections", 80.0, 50.0, 18.0);
    let b = f.fit("Lower respiratory infections", 80.0, 50.0, 18.0);
    assert_eq!(a, b);
}

#[test]
fn test_missing_metrics_degrade_to_single_line_at_floor() {
    let f = TextFitter::new(FitParams::default(), NotReady);
    let result = f.fit("Cardiovascular diseases", 60.0, 40.0, 20.0);
    assert_eq!(result.lines, vec!["Cardiovascular diseases".to_string()]);
    assert_eq!(result.font_size_px, 10.0);
    assert!(!result.fits);
}

#[test]
fn test_empty_text() {
    let result = fitter().fit("   ", 60.0, 40.0, 20.0);
    assert!(result.lines.is_empty());
    assert!(result.fits);
}

#[test]
fn test_invalid_base_uses_min_font() {
    let result = fitter().fit("A", 100.0, 100.0, f32::NAN);
    assert_eq!(result.font_size_px, 8.0);
}
