//! Color lookup for stream color tags and star tinting.

use bevy::prelude::*;

use simulation::catalog::ColorTag;

/// Border colors indexed by `ColorTag::index()`.
const BORDER_COLORS: [Color; ColorTag::COUNT] = [
    Color::srgb(0.937, 0.267, 0.267), // red     #ef4444
    Color::srgb(0.231, 0.510, 0.965), // blue    #3b82f6
    Color::srgb(0.545, 0.361, 0.965), // purple  #8b5cf6
    Color::srgb(0.063, 0.725, 0.506), // green   #10b981
    Color::srgb(0.976, 0.451, 0.086), // orange  #f97316
    Color::srgb(0.925, 0.282, 0.600), // pink    #ec4899
    Color::srgb(0.024, 0.714, 0.831), // cyan    #06b6d4
    Color::srgb(0.961, 0.620, 0.043), // amber   #f59e0b
    Color::srgb(0.078, 0.722, 0.651), // teal    #14b8a6
    Color::srgb(0.518, 0.800, 0.086), // lime    #84cc16
    Color::srgb(0.420, 0.447, 0.502), // gray    #6b7280
    Color::srgb(0.443, 0.443, 0.478), // zinc    #71717a
    Color::srgb(0.957, 0.247, 0.369), // rose    #f43f5e
    Color::srgb(0.216, 0.255, 0.318), // black   #374151
];

/// Glow opacity relative to the border color.
const GLOW_ALPHA: f32 = 0.15;

pub fn border_color(tag: ColorTag) -> Color {
    BORDER_COLORS[tag.index()]
}

pub fn glow_color(tag: ColorTag) -> Color {
    border_color(tag).with_alpha(GLOW_ALPHA)
}

/// Disc fill behind the label text.
pub const DISC_FILL: Color = Color::srgba(0.07, 0.09, 0.11, 0.95);

/// Star tint: white-blue, warming toward white as brightness rises.
pub fn star_color(brightness: f32, opacity: f32) -> Color {
    let c = ((220.0 + brightness * 35.0) / 255.0).min(1.0);
    Color::srgba(c, c, 1.0, opacity.clamp(0.0, 1.0))
}

/// Halo drawn around flaring stars.
pub fn star_halo_color(opacity: f32) -> Color {
    Color::srgba(220.0 / 255.0, 220.0 / 255.0, 1.0, (opacity * 0.8).clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tag_has_distinct_slot() {
        let red = border_color(ColorTag::Red).to_srgba();
        let black = border_color(ColorTag::Black).to_srgba();
        assert_ne!(red, black);
        assert!(red.red > 0.9);
    }

    #[test]
    fn test_glow_is_translucent_border() {
        let glow = glow_color(ColorTag::Teal).to_srgba();
        let border = border_color(ColorTag::Teal).to_srgba();
        assert_eq!(glow.alpha, GLOW_ALPHA);
        assert_eq!(glow.green, border.green);
    }

    #[test]
    fn test_star_color_clamps_at_white() {
        let dim = star_color(1.0, 0.5).to_srgba();
        assert!((dim.red - 1.0).abs() < 1e-6);
        let flare = star_color(4.0, 1.0).to_srgba();
        assert_eq!(flare.red, 1.0);
        assert_eq!(flare.blue, 1.0);
        // Brightness 0 is the dimmest tint.
        let min = star_color(0.0, 1.0).to_srgba();
        assert!((min.red - 220.0 / 255.0).abs() < 1e-6);
    }
}
