//! Drawing tool selection.

use crate::draw::ShapeKind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing tool selection.
///
/// The active tool determines what a pointer drag produces. It is chosen
/// before a stroke begins and cannot change while the stroke is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Freehand drawing - follows the pointer (default)
    Pencil,
    /// Straight line from press point to release point
    Line,
    /// Rectangle from corner to corner
    Rectangle,
    /// Circle centered on the press point
    Circle,
    /// Isosceles triangle with its apex at the press point
    Triangle,
    /// Fixed-size five-pointed star stamped at the press point
    Star,
    /// Fixed-size hexagon stamped at the press point
    Polygon,
    /// Ellipse centered on the press point
    Ellipse,
    /// Line with an arrowhead at the release point
    Arrow,
    /// Clicking sets where the next text insertion goes
    Text,
    /// Clears a brush-sized square back to the board background
    Eraser,
}

impl Tool {
    /// All tools in the order the tool picker lists them.
    pub const ALL: [Tool; 11] = [
        Tool::Pencil,
        Tool::Line,
        Tool::Rectangle,
        Tool::Circle,
        Tool::Triangle,
        Tool::Star,
        Tool::Polygon,
        Tool::Ellipse,
        Tool::Arrow,
        Tool::Text,
        Tool::Eraser,
    ];

    /// Shape produced by a drag with this tool; `None` for text and eraser.
    pub fn shape_kind(&self) -> Option<ShapeKind> {
        match self {
            Tool::Pencil => Some(ShapeKind::Freehand),
            Tool::Line => Some(ShapeKind::Line),
            Tool::Rectangle => Some(ShapeKind::Rectangle),
            Tool::Circle => Some(ShapeKind::Circle),
            Tool::Triangle => Some(ShapeKind::Triangle),
            Tool::Star => Some(ShapeKind::Star),
            Tool::Polygon => Some(ShapeKind::Polygon),
            Tool::Ellipse => Some(ShapeKind::Ellipse),
            Tool::Arrow => Some(ShapeKind::Arrow),
            Tool::Text | Tool::Eraser => None,
        }
    }

    /// Lowercase name as used in config files and event scripts.
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Pencil => "pencil",
            Tool::Line => "line",
            Tool::Rectangle => "rectangle",
            Tool::Circle => "circle",
            Tool::Triangle => "triangle",
            Tool::Star => "star",
            Tool::Polygon => "polygon",
            Tool::Ellipse => "ellipse",
            Tool::Arrow => "arrow",
            Tool::Text => "text",
            Tool::Eraser => "eraser",
        }
    }
}

impl std::str::FromStr for Tool {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Tool::ALL
            .into_iter()
            .find(|tool| tool.name() == wanted)
            .ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn from_str_accepts_picker_labels() {
        assert_eq!(Tool::from_str("Pencil"), Ok(Tool::Pencil));
        assert_eq!(Tool::from_str("ELLIPSE"), Ok(Tool::Ellipse));
        assert!(Tool::from_str("lasso").is_err());
    }

    #[test]
    fn names_round_trip_through_serde() {
        for tool in Tool::ALL {
            let json = serde_json::to_string(&tool).unwrap();
            assert_eq!(json, format!("\"{}\"", tool.name()));
            assert_eq!(serde_json::from_str::<Tool>(&json).unwrap(), tool);
        }
    }

    #[test]
    fn only_drawing_tools_have_shapes() {
        assert_eq!(Tool::Pencil.shape_kind(), Some(ShapeKind::Freehand));
        assert_eq!(Tool::Star.shape_kind(), Some(ShapeKind::Star));
        assert_eq!(Tool::Text.shape_kind(), None);
        assert_eq!(Tool::Eraser.shape_kind(), None);
    }
}
