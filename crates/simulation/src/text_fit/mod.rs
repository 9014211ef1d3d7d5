//! Label fitting for fixed-size boxes.
//!
//! Given a box and a base font size, choose the largest font size (down to a
//! floor) at which a label fits on at most two word-wrapped lines. Results
//! depend only on the inputs and the measurer, so callers can cache them.

mod fitter;
mod measure;

#[cfg(test)]
mod tests;

pub use fitter::{FitResult, TextFitter};
pub use measure::{GlyphAdvanceEstimate, TextMeasure};
