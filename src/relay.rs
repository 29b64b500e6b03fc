//! Remote echo relay: line segments drawn by other participants.
//!
//! Peers exchange freehand strokes already broken into point pairs. Each inbound
//! segment is painted onto the local committed layer with the sender's style; it
//! never touches the local tool, style or undo history. Transport is left to the
//! caller: this module only defines the wire format and converts to and from it.

use crate::draw::color::BLACK;
use crate::draw::{Color, DashStyle, LineCap, LineJoin, Point, StrokeStyle};
use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while decoding relay messages.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Malformed relay message: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Relay message has no \"event\" field")]
    MissingEvent,

    #[error("Unsupported relay event '{0}'")]
    UnknownEvent(String),
}

/// One segment of a remote freehand stroke.
///
/// Field names follow the wire format (`prevX`, `currentY`, ...). Caps and
/// joins are not transmitted; peers always draw segments with round ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteSegment {
    pub prev_x: f64,
    pub prev_y: f64,
    pub current_x: f64,
    pub current_y: f64,
    /// CSS-style color string
    pub color: String,
    /// Line width in pixels
    pub size: f64,
    /// "solid", "dashed" or "dotted"; anything else draws solid
    #[serde(default)]
    pub style: String,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
}

fn default_opacity() -> f64 {
    1.0
}

impl RemoteSegment {
    /// Describes a local segment for broadcasting.
    pub fn from_local(from: Point, to: Point, style: &StrokeStyle) -> Self {
        Self {
            prev_x: from.x,
            prev_y: from.y,
            current_x: to.x,
            current_y: to.y,
            color: style.color.to_hex(),
            size: style.width,
            style: dash_name(style.dash).to_string(),
            opacity: style.opacity,
        }
    }

    pub fn from_point(&self) -> Point {
        Point::new(self.prev_x, self.prev_y)
    }

    pub fn to_point(&self) -> Point {
        Point::new(self.current_x, self.current_y)
    }

    /// Style the segment is painted with.
    ///
    /// Caps and joins are always round; an unparseable color paints black.
    pub fn stroke_style(&self) -> StrokeStyle {
        let color = Color::parse(&self.color).unwrap_or_else(|| {
            warn!("Remote segment has unknown color '{}', using black", self.color);
            BLACK
        });
        StrokeStyle {
            color,
            fill: None,
            width: self.size,
            dash: dash_from_name(&self.style),
            cap: LineCap::Round,
            join: LineJoin::Round,
            opacity: self.opacity,
        }
    }
}

fn dash_from_name(name: &str) -> DashStyle {
    match name {
        "dashed" => DashStyle::Dashed,
        "dotted" => DashStyle::Dotted,
        _ => DashStyle::Solid,
    }
}

fn dash_name(dash: DashStyle) -> &'static str {
    match dash {
        DashStyle::Solid => "solid",
        DashStyle::Dashed => "dashed",
        DashStyle::Dotted => "dotted",
    }
}

/// Messages exchanged between participants, tagged by their `event` name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RelayMessage {
    Draw(RemoteSegment),
}

/// Decodes one relay message.
pub fn parse_message(json: &str) -> Result<RelayMessage, RelayError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let event = value
        .get("event")
        .and_then(|event| event.as_str())
        .ok_or(RelayError::MissingEvent)?;
    match event {
        "draw" => Ok(serde_json::from_value(value)?),
        other => Err(RelayError::UnknownEvent(other.to_string())),
    }
}

/// Encodes one relay message.
pub fn encode_message(message: &RelayMessage) -> Result<String, RelayError> {
    Ok(serde_json::to_string(message)?)
}
