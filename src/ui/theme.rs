//! Light and dark palettes. Controllers never pick colors; they flip the
//! one-bit theme and every surface repaints itself from the palette for
//! that theme.

use fltk::enums::Color;

use crate::app::domain::{Severity, Theme};

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub window_bg: Color,
    pub surface: Color,
    pub card: Color,
    pub text: Color,
    pub text_muted: Color,
    pub accent: Color,
    pub border: Color,
    pub input_bg: Color,
    pub input_error_bg: Color,
    pub success: Color,
    pub error: Color,
    pub info: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::dark(),
            Theme::Light => Self::light(),
        }
    }

    fn dark() -> Self {
        Self {
            window_bg: Color::from_rgb(10, 10, 10),
            surface: Color::from_rgb(26, 26, 26),
            card: Color::from_rgb(42, 42, 42),
            text: Color::from_rgb(255, 255, 255),
            text_muted: Color::from_rgb(160, 160, 160),
            accent: Color::from_rgb(102, 126, 234),
            border: Color::from_rgb(51, 51, 51),
            input_bg: Color::from_rgb(32, 32, 32),
            input_error_bg: Color::from_rgb(58, 32, 32),
            success: Color::from_rgb(72, 187, 120),
            error: Color::from_rgb(245, 101, 101),
            info: Color::from_rgb(102, 126, 234),
        }
    }

    fn light() -> Self {
        Self {
            window_bg: Color::from_rgb(255, 255, 255),
            surface: Color::from_rgb(248, 249, 250),
            card: Color::from_rgb(255, 255, 255),
            text: Color::from_rgb(45, 55, 72),
            text_muted: Color::from_rgb(113, 128, 150),
            accent: Color::from_rgb(102, 126, 234),
            border: Color::from_rgb(226, 232, 240),
            input_bg: Color::from_rgb(248, 249, 250),
            input_error_bg: Color::from_rgb(254, 226, 226),
            success: Color::from_rgb(56, 161, 105),
            error: Color::from_rgb(229, 62, 62),
            info: Color::from_rgb(102, 126, 234),
        }
    }

    pub fn severity_color(&self, severity: Severity) -> Color {
        match severity {
            Severity::Success => self.success,
            Severity::Error => self.error,
            Severity::Info => self.info,
        }
    }
}

/// Glyph on the theme toggle: the action it offers, not the current state.
pub fn toggle_glyph(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "\u{263e}", // moon: switch to dark
        Theme::Dark => "\u{2600}",  // sun: switch to light
    }
}

pub fn severity_glyph(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "\u{2713}",
        Severity::Error => "\u{26a0}",
        Severity::Info => "\u{2139}",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_glyph_offers_the_other_theme() {
        assert_eq!(toggle_glyph(Theme::Dark), "\u{2600}");
        assert_eq!(toggle_glyph(Theme::Light), "\u{263e}");
    }

    #[test]
    fn test_palettes_differ() {
        let dark = Palette::for_theme(Theme::Dark);
        let light = Palette::for_theme(Theme::Light);
        assert_ne!(dark.window_bg, light.window_bg);
        assert_ne!(dark.text, light.text);
    }
}
