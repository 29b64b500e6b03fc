//! Stroke styling: color, fill, width, dash pattern, caps, joins and opacity.

use super::color::{BLACK, Color};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Dash pattern applied to strokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DashStyle {
    #[default]
    Solid,
    /// 10px on, 5px off
    Dashed,
    /// 2px on, 5px off
    Dotted,
}

impl DashStyle {
    /// On/off lengths handed to Cairo. Empty means a continuous line.
    pub fn pattern(&self) -> &'static [f64] {
        match self {
            DashStyle::Solid => &[],
            DashStyle::Dashed => &[10.0, 5.0],
            DashStyle::Dotted => &[2.0, 5.0],
        }
    }
}

/// Shape drawn at the open ends of a stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    #[default]
    Round,
    Square,
    Butt,
}

impl From<LineCap> for cairo::LineCap {
    fn from(cap: LineCap) -> Self {
        match cap {
            LineCap::Round => cairo::LineCap::Round,
            LineCap::Square => cairo::LineCap::Square,
            LineCap::Butt => cairo::LineCap::Butt,
        }
    }
}

/// Shape drawn where two stroke segments meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum LineJoin {
    #[default]
    Round,
    Bevel,
    Miter,
}

impl From<LineJoin> for cairo::LineJoin {
    fn from(join: LineJoin) -> Self {
        match join {
            LineJoin::Round => cairo::LineJoin::Round,
            LineJoin::Bevel => cairo::LineJoin::Bevel,
            LineJoin::Miter => cairo::LineJoin::Miter,
        }
    }
}

/// Complete description of how a stroke is painted.
///
/// A copy is taken when a stroke starts, so changing the global style mid-drag
/// never alters a stroke in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Outline color
    pub color: Color,
    /// Interior color for closed shapes; `None` leaves them hollow
    pub fill: Option<Color>,
    /// Line width in pixels
    pub width: f64,
    pub dash: DashStyle,
    pub cap: LineCap,
    pub join: LineJoin,
    /// Global alpha multiplier applied to both outline and fill (0.0-1.0)
    pub opacity: f64,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: BLACK,
            fill: None,
            width: 3.0,
            dash: DashStyle::Solid,
            cap: LineCap::Round,
            join: LineJoin::Round,
            opacity: 1.0,
        }
    }
}

impl StrokeStyle {
    /// Sets the fill from a color, treating fully transparent colors as "no fill".
    pub fn set_fill(&mut self, fill: Color) {
        self.fill = (!fill.is_transparent()).then_some(fill);
    }

    /// Loads line width, dash, caps, joins and the outline source into `ctx`.
    pub fn apply_stroke(&self, ctx: &cairo::Context) {
        self.color.with_opacity(self.opacity).apply(ctx);
        ctx.set_line_width(self.width);
        ctx.set_dash(self.dash.pattern(), 0.0);
        ctx.set_line_cap(self.cap.into());
        ctx.set_line_join(self.join.into());
    }

    /// Sets the fill source for `ctx`. Returns `false` when there is nothing to fill.
    pub fn apply_fill(&self, ctx: &cairo::Context) -> bool {
        match self.fill {
            Some(fill) => {
                fill.with_opacity(self.opacity).apply(ctx);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{RED, TRANSPARENT};

    #[test]
    fn dash_patterns_match_brush_styles() {
        assert!(DashStyle::Solid.pattern().is_empty());
        assert_eq!(DashStyle::Dashed.pattern(), &[10.0, 5.0]);
        assert_eq!(DashStyle::Dotted.pattern(), &[2.0, 5.0]);
    }

    #[test]
    fn transparent_fill_means_no_fill() {
        let mut style = StrokeStyle::default();
        style.set_fill(TRANSPARENT);
        assert_eq!(style.fill, None);

        style.set_fill(RED);
        assert_eq!(style.fill, Some(RED));
    }

    #[test]
    fn style_enums_use_lowercase_names() {
        let dash: DashStyle = serde_json::from_str("\"dotted\"").unwrap();
        assert_eq!(dash, DashStyle::Dotted);
        let cap: LineCap = serde_json::from_str("\"butt\"").unwrap();
        assert_eq!(cap, LineCap::Butt);
        let join: LineJoin = serde_json::from_str("\"miter\"").unwrap();
        assert_eq!(join, LineJoin::Miter);
    }
}
