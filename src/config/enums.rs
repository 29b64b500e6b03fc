//! Configuration enum types.

use crate::draw::{Color, color::BLACK};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - either a color string or RGB values.
///
/// # Examples
/// ```toml
/// # Named color or CSS hex
/// stroke_color = "black"
/// grid_color = "#ccc"
///
/// # Custom RGB color (0-255 per component)
/// stroke_color = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (black, white, red, green, blue, yellow, orange, pink, gray,
    /// transparent) or hex notation (#rgb, #rrggbb, #rrggbbaa)
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Unknown names fall back to black with a warning.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => Color::parse(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using black", name);
                BLACK
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }

    /// True when the spec parses to a known color.
    pub fn is_valid(&self) -> bool {
        match self {
            ColorSpec::Name(name) => Color::parse(name).is_some(),
            ColorSpec::Rgb(_) => true,
        }
    }
}

impl From<&str> for ColorSpec {
    fn from(name: &str) -> Self {
        ColorSpec::Name(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{TRANSPARENT, WHITE};

    #[test]
    fn names_and_hex_resolve() {
        assert_eq!(ColorSpec::from("white").to_color(), WHITE);
        assert_eq!(ColorSpec::from("#ffffff").to_color(), WHITE);
        assert_eq!(ColorSpec::from("transparent").to_color(), TRANSPARENT);
        assert_eq!(ColorSpec::Rgb([255, 255, 255]).to_color(), WHITE);
    }

    #[test]
    fn unknown_names_fall_back_to_black() {
        let spec = ColorSpec::from("mauve-ish");
        assert!(!spec.is_valid());
        assert_eq!(spec.to_color(), BLACK);
    }

    #[test]
    fn untagged_toml_forms_deserialize() {
        #[derive(Deserialize)]
        struct Probe {
            a: ColorSpec,
            b: ColorSpec,
        }
        let probe: Probe = toml::from_str("a = \"#333\"\nb = [1, 2, 3]").unwrap();
        assert_eq!(probe.a, ColorSpec::Name("#333".to_string()));
        assert_eq!(probe.b, ColorSpec::Rgb([1, 2, 3]));
    }
}
