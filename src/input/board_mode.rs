//! Board/canvas mode selection.

use crate::config::BoardConfig;
use crate::draw::Color;

/// Board rendering mode
///
/// Determines the background the canvas is filled with. Switching modes
/// re-initializes the surface, so each mode starts from an empty board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoardMode {
    /// Light background (default)
    #[default]
    Light,
    /// Dark background
    Dark,
}

impl BoardMode {
    /// Returns the background color for this mode from config.
    pub fn background_color(&self, config: &BoardConfig) -> Color {
        match self {
            Self::Light => config.light_color.to_color(),
            Self::Dark => config.dark_color.to_color(),
        }
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl std::str::FromStr for BoardMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_default_mode_is_light() {
        assert_eq!(BoardMode::default(), BoardMode::Light);
    }

    #[test]
    fn test_background_color() {
        let config = BoardConfig::default();

        let light = BoardMode::Light.background_color(&config);
        assert!((light.r - 248.0 / 255.0).abs() < 0.001);
        assert_eq!(light.a, 1.0);

        let dark = BoardMode::Dark.background_color(&config);
        assert!((dark.r - 0.2).abs() < 0.001);
        assert_eq!(dark.a, 1.0);
    }

    #[test]
    fn test_toggled() {
        assert_eq!(BoardMode::Light.toggled(), BoardMode::Dark);
        assert_eq!(BoardMode::Dark.toggled().toggled(), BoardMode::Dark);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(BoardMode::from_str("light").unwrap(), BoardMode::Light);
        assert_eq!(BoardMode::from_str("DARK").unwrap(), BoardMode::Dark);
        assert!(BoardMode::from_str("blackboard").is_err());
    }
}
