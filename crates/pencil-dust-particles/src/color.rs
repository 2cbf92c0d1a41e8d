//! Colour compositing for terminal output.

use pencil_dust_core::{Rgb, Rgba};
use ratatui::style::Color;

/// Composite `fg` over an opaque `bg` and convert to a terminal colour.
///
/// Terminal cells have no alpha channel, so translucent strokes are
/// pre-blended against the paper they sit on.
pub fn blend(fg: Rgba, bg: Rgb) -> Color {
    let a = fg.alpha.clamp(0.0, 1.0);
    let mix = |f: u8, b: u8| (b as f32 + (f as f32 - b as f32) * a).round() as u8;
    Color::Rgb(mix(fg.rgb.0, bg.0), mix(fg.rgb.1, bg.1), mix(fg.rgb.2, bg.2))
}

/// Convert an opaque colour to a terminal colour.
pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_extremes() {
        let paper = Rgb(250, 247, 240);
        let ink = Rgb(60, 55, 50);
        assert_eq!(blend(Rgba::new(ink, 0.0), paper), Color::Rgb(250, 247, 240));
        assert_eq!(blend(Rgba::new(ink, 1.0), paper), Color::Rgb(60, 55, 50));
    }

    #[test]
    fn test_blend_half() {
        let out = blend(Rgba::new(Rgb(200, 100, 0), 0.5), Rgb(0, 100, 200));
        assert_eq!(out, Color::Rgb(100, 100, 100));
    }
}
