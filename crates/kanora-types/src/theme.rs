//! Colour theme selection shared by the UI layer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Two-valued colour theme held in ephemeral UI state.
///
/// The selection lives in the running client only; it is not persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light backgrounds with dark text.
    Light,
    /// Dark backgrounds with light text.
    #[default]
    Dark,
}

impl Theme {
    /// The other theme: `Light` becomes `Dark` and vice versa.
    ///
    /// Two consecutive toggles return the original value.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => f.write_str("light"),
            Self::Dark => f.write_str("dark"),
        }
    }
}

/// Error returned when parsing an unrecognised theme name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseThemeError;

impl fmt::Display for ParseThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("theme must be light or dark")
    }
}

impl std::error::Error for ParseThemeError {}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(ParseThemeError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Theme::Light, Theme::Dark)]
    #[case(Theme::Dark, Theme::Light)]
    fn toggle_flips_the_theme(#[case] start: Theme, #[case] expected: Theme) {
        assert_eq!(start.toggle(), expected);
    }

    #[rstest]
    #[case(Theme::Light)]
    #[case(Theme::Dark)]
    fn toggle_twice_restores_the_original(#[case] start: Theme) {
        assert_eq!(start.toggle().toggle(), start);
    }

    #[rstest]
    #[case("light", Theme::Light)]
    #[case("dark", Theme::Dark)]
    fn parses_known_names(#[case] name: &str, #[case] expected: Theme) {
        assert_eq!(name.parse::<Theme>().expect("known theme"), expected);
    }

    #[rstest]
    fn rejects_unknown_names() {
        assert!("sepia".parse::<Theme>().is_err());
    }
}
