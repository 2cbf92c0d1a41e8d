//! Light/dark presentation modes and their palettes.

use serde::Deserialize;

/// An opaque RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// An RGB colour with a straight (non-premultiplied) alpha in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f32,
}

impl Rgba {
    pub fn new(rgb: Rgb, alpha: f32) -> Self {
        Self {
            rgb,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }
}

/// Current presentation mode of the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Flip between light and dark.
    pub fn toggle(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Graphite stroke tone: warm dark gray on light paper, light warm gray on dark.
    pub fn stroke_rgb(&self) -> Rgb {
        match self {
            Theme::Light => Rgb(60, 55, 50),
            Theme::Dark => Rgb(200, 195, 185),
        }
    }

    /// Page background the particle layer is composited over.
    pub fn paper_rgb(&self) -> Rgb {
        match self {
            Theme::Light => Rgb(250, 247, 240),
            Theme::Dark => Rgb(22, 21, 19),
        }
    }

    /// Foreground text colour for content drawn above the particles.
    pub fn ink_rgb(&self) -> Rgb {
        match self {
            Theme::Light => Rgb(40, 36, 32),
            Theme::Dark => Rgb(232, 228, 220),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Theme selection as written in the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    /// Follow the terminal's reported background.
    #[default]
    System,
}

impl ThemePreference {
    /// Resolve to a concrete theme, consulting `COLORFGBG` for `System`.
    pub fn resolve(self) -> Theme {
        match self {
            ThemePreference::Light => Theme::Light,
            ThemePreference::Dark => Theme::Dark,
            ThemePreference::System => {
                theme_from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref())
            }
        }
    }
}

/// Interpret a `COLORFGBG` value such as `"15;0"` or `"0;default;15"`.
///
/// The last field is the background palette index. Indices 0-6 and 8 are the
/// dark ANSI colours; anything else, or no value at all, falls back to light.
pub fn theme_from_colorfgbg(value: Option<&str>) -> Theme {
    let Some(bg) = value
        .and_then(|v| v.rsplit(';').next())
        .and_then(|bg| bg.trim().parse::<u8>().ok())
    else {
        return Theme::Light;
    };

    match bg {
        0..=6 | 8 => Theme::Dark,
        _ => Theme::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
    }

    #[test]
    fn test_stroke_palettes() {
        assert_eq!(Theme::Light.stroke_rgb(), Rgb(60, 55, 50));
        assert_eq!(Theme::Dark.stroke_rgb(), Rgb(200, 195, 185));
    }

    #[test]
    fn test_rgba_clamps_alpha() {
        assert_eq!(Rgba::new(Rgb(0, 0, 0), 1.5).alpha, 1.0);
        assert_eq!(Rgba::new(Rgb(0, 0, 0), -0.2).alpha, 0.0);
    }

    #[test]
    fn test_theme_from_colorfgbg() {
        assert_eq!(theme_from_colorfgbg(Some("15;0")), Theme::Dark);
        assert_eq!(theme_from_colorfgbg(Some("0;default;8")), Theme::Dark);
        assert_eq!(theme_from_colorfgbg(Some("0;15")), Theme::Light);
        assert_eq!(theme_from_colorfgbg(Some("0;7")), Theme::Light);
        assert_eq!(theme_from_colorfgbg(Some("garbage")), Theme::Light);
        assert_eq!(theme_from_colorfgbg(None), Theme::Light);
    }

    #[test]
    fn test_preference_explicit() {
        assert_eq!(ThemePreference::Dark.resolve(), Theme::Dark);
        assert_eq!(ThemePreference::Light.resolve(), Theme::Light);
    }
}
