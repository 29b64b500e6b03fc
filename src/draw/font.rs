//! Font descriptor for text insertion.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Font configuration for text rendering.
///
/// Family names are resolved by fontconfig; unknown families fall back to the
/// system sans-serif face.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FontDescriptor {
    /// Font family name (e.g. "Arial", "Times New Roman", "Courier New", "Verdana")
    pub family: String,

    /// Font weight (e.g. "normal", "bold", "light" or numeric 100-900)
    #[serde(default = "normal")]
    pub weight: String,

    /// Font style ("normal", "italic", "oblique")
    #[serde(default = "normal")]
    pub style: String,
}

fn normal() -> String {
    "normal".to_string()
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self::family("Arial")
    }
}

impl FontDescriptor {
    /// Regular-weight, upright font of the given family.
    pub fn family(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            weight: normal(),
            style: normal(),
        }
    }

    /// Converts this descriptor to a Pango font description string.
    ///
    /// Format: "Family [Style] [Weight] Size", e.g. "Verdana Bold 24".
    /// Sizes are given in pixels, matching the `px` sizes of the text controls.
    pub fn to_pango_string(&self, size: f64) -> String {
        let mut parts = vec![self.family.clone()];

        for attr in [&self.style, &self.weight] {
            if !attr.eq_ignore_ascii_case("normal") {
                parts.push(capitalize_first(attr));
            }
        }

        parts.push(format!("{}px", size.round() as i32));
        parts.join(" ")
    }

    /// Builds the Pango description for `size` pixels.
    pub fn to_pango(&self, size: f64) -> pango::FontDescription {
        pango::FontDescription::from_string(&self.to_pango_string(size))
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_font_is_plain_arial() {
        assert_eq!(FontDescriptor::default().to_pango_string(16.0), "Arial 16px");
    }

    #[test]
    fn style_and_weight_are_capitalized() {
        let font = FontDescriptor {
            family: "Courier New".to_string(),
            weight: "bold".to_string(),
            style: "italic".to_string(),
        };
        assert_eq!(font.to_pango_string(24.4), "Courier New Italic Bold 24px");
    }

    #[test]
    fn pango_description_carries_family() {
        let desc = FontDescriptor::family("Verdana").to_pango(20.0);
        assert_eq!(desc.family().as_deref(), Some("Verdana"));
    }
}
