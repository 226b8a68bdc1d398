//! Colour palettes for the two UI themes.
//!
//! The active [`Theme`] lives in app state only; toggling flips it for the
//! running session and nothing is persisted.

use kanora_types::Theme;
use ratatui::style::Color;

/// Resolved colours for the active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub dim: Color,
    pub accent: Color,
    pub accent_text: Color,
    pub border: Color,
    pub error: Color,
}

/// Palette for the given theme.
pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => Palette {
            background: Color::Rgb(16, 18, 24),
            text: Color::Rgb(225, 228, 235),
            dim: Color::Rgb(120, 126, 140),
            accent: Color::Rgb(94, 155, 255),
            accent_text: Color::Rgb(10, 12, 16),
            border: Color::Rgb(70, 76, 90),
            error: Color::Rgb(235, 100, 100),
        },
        Theme::Light => Palette {
            background: Color::Rgb(245, 246, 248),
            text: Color::Rgb(28, 32, 40),
            dim: Color::Rgb(130, 136, 148),
            accent: Color::Rgb(30, 90, 210),
            accent_text: Color::Rgb(250, 250, 252),
            border: Color::Rgb(180, 185, 195),
            error: Color::Rgb(190, 40, 40),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_differ_between_themes() {
        assert_ne!(palette(Theme::Dark), palette(Theme::Light));
    }

    #[test]
    fn toggling_twice_restores_the_palette() {
        let start = Theme::Light;
        assert_eq!(palette(start.toggle().toggle()), palette(start));
    }
}
