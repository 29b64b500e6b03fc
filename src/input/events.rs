//! Input events fed to the canvas state machine.
//!
//! Local pointer input, control changes and remote segments all arrive as
//! [`InputEvent`]s. They serialize as JSON objects tagged by `type`, which is
//! also the line format of replay scripts:
//!
//! ```json
//! {"type":"select_tool","tool":"rectangle"}
//! {"type":"pointer_down","x":10,"y":10}
//! {"type":"pointer_move","x":50,"y":40}
//! {"type":"pointer_up"}
//! ```

use super::tool::Tool;
use crate::draw::{DashStyle, LineCap, LineJoin};
use crate::relay::RemoteSegment;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// Primary button pressed at a surface position
    PointerDown { x: f64, y: f64 },
    /// Pointer moved, with or without a button held
    PointerMove { x: f64, y: f64 },
    /// Primary button released
    PointerUp,
    /// Pointer left the surface; ends a stroke like a release
    PointerLeave,

    SelectTool { tool: Tool },
    /// Color strings use the same notation as the config file
    SetStrokeColor { color: String },
    /// "transparent" disables filling
    SetFillColor { color: String },
    SetBrushSize { size: f64 },
    SetBrushStyle { style: DashStyle },
    SetLineCap { cap: LineCap },
    SetLineJoin { join: LineJoin },
    SetOpacity { opacity: f64 },
    /// Font family for text insertion
    SetFont { family: String },
    SetTextSize { size: f64 },

    /// Places text at `(x, y)`, or at the last text-tool click when omitted.
    /// A missing coordinate is taken from that click.
    AddText {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        x: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        y: Option<f64>,
    },
    Undo,
    Redo,
    /// Switches between the light and dark board (clears the canvas)
    ToggleMode,

    ToggleGrid,
    ToggleSnap,
    SetGridSize { size: f64 },
    SetGridColor { color: String },

    /// Segment drawn by another participant
    Draw(RemoteSegment),

    /// Requests a PNG export, to `path` or a generated file name
    Export {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        path: Option<PathBuf>,
    },
}

impl InputEvent {
    /// Whether the event originates from the pointer.
    pub fn is_pointer(&self) -> bool {
        matches!(
            self,
            InputEvent::PointerDown { .. }
                | InputEvent::PointerMove { .. }
                | InputEvent::PointerUp
                | InputEvent::PointerLeave
        )
    }
}
