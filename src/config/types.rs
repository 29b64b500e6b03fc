//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::{DashStyle, FontDescriptor, LineCap, LineJoin, Point, StrokeStyle};
use crate::input::Tool;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the tool and brush the board starts with. The replayed event stream
/// can change all of these at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Tool selected at startup (pencil, line, rectangle, circle, triangle, star,
    /// polygon, ellipse, arrow, text, eraser)
    #[serde(default = "default_tool")]
    pub default_tool: Tool,

    /// Outline color - a name, "#rrggbb", or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_stroke_color")]
    pub stroke_color: ColorSpec,

    /// Fill color for closed shapes; "transparent" disables filling
    #[serde(default = "default_fill_color")]
    pub fill_color: ColorSpec,

    /// Brush size in pixels (valid range: 1 - 10); also the eraser square size
    #[serde(default = "default_brush_size")]
    pub brush_size: f64,

    /// Dash pattern (solid, dashed, dotted)
    #[serde(default)]
    pub brush_style: DashStyle,

    /// Line cap (round, square, butt)
    #[serde(default)]
    pub line_cap: LineCap,

    /// Line join (round, bevel, miter)
    #[serde(default)]
    pub line_join: LineJoin,

    /// Stroke opacity (valid range: 0.1 - 1.0)
    #[serde(default = "default_opacity")]
    pub opacity: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_tool: default_tool(),
            stroke_color: default_stroke_color(),
            fill_color: default_fill_color(),
            brush_size: default_brush_size(),
            brush_style: DashStyle::default(),
            line_cap: LineCap::default(),
            line_join: LineJoin::default(),
            opacity: default_opacity(),
        }
    }
}

impl DrawingConfig {
    /// Builds the initial stroke style from these settings.
    pub fn stroke_style(&self) -> StrokeStyle {
        let mut style = StrokeStyle {
            color: self.stroke_color.to_color(),
            fill: None,
            width: self.brush_size,
            dash: self.brush_style,
            cap: self.line_cap,
            join: self.line_join,
            opacity: self.opacity,
        };
        style.set_fill(self.fill_color.to_color());
        style
    }
}

/// Text insertion settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TextConfig {
    /// Font family, weight and style
    #[serde(default)]
    pub font: FontDescriptor,

    /// Text size in pixels (valid range: 10 - 50)
    #[serde(default = "default_text_size")]
    pub size: f64,

    /// Baseline position used when text is added without clicking first
    #[serde(default = "default_text_position")]
    pub position: [f64; 2],
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            font: FontDescriptor::default(),
            size: default_text_size(),
            position: default_text_position(),
        }
    }
}

impl TextConfig {
    pub fn anchor(&self) -> Point {
        Point::new(self.position[0], self.position[1])
    }
}

/// Arrow drawing settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ArrowConfig {
    /// Arrowhead length in pixels (valid range: 5.0 - 50.0)
    #[serde(default = "default_arrow_length")]
    pub length: f64,

    /// Arrowhead angle in degrees (valid range: 15.0 - 60.0)
    #[serde(default = "default_arrow_angle")]
    pub angle_degrees: f64,
}

impl Default for ArrowConfig {
    fn default() -> Self {
        Self {
            length: default_arrow_length(),
            angle_degrees: default_arrow_angle(),
        }
    }
}

/// Grid overlay and snapping.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GridConfig {
    /// Draw the grid over the board (never exported)
    #[serde(default)]
    pub show: bool,

    /// Round pointer positions to the nearest grid intersection
    #[serde(default)]
    pub snap: bool,

    /// Grid spacing in pixels (valid range: 10 - 50)
    #[serde(default = "default_grid_size")]
    pub size: f64,

    /// Grid line color
    #[serde(default = "default_grid_color")]
    pub color: ColorSpec,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            show: false,
            snap: false,
            size: default_grid_size(),
            color: default_grid_color(),
        }
    }
}

/// Board background settings for light and dark mode.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BoardConfig {
    /// Mode at startup ("light" or "dark")
    #[serde(default = "default_board_mode")]
    pub default_mode: String,

    /// Background in light mode
    #[serde(default = "default_light_color")]
    pub light_color: ColorSpec,

    /// Background in dark mode
    #[serde(default = "default_dark_color")]
    pub dark_color: ColorSpec,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_mode: default_board_mode(),
            light_color: default_light_color(),
            dark_color: default_dark_color(),
        }
    }
}

/// Drawing surface dimensions.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Width in pixels (valid range: 16 - 8192)
    #[serde(default = "default_canvas_width")]
    pub width: i32,

    /// Height in pixels (valid range: 16 - 8192)
    #[serde(default = "default_canvas_height")]
    pub height: i32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
        }
    }
}

/// Undo/redo history settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HistoryConfig {
    /// Maximum snapshots kept for undo (0 = unlimited). Each snapshot holds a
    /// full copy of the canvas pixels.
    #[serde(default = "default_max_snapshots")]
    pub max_snapshots: usize,

    /// Record eraser drags in the undo history
    #[serde(default = "default_capture_erasures")]
    pub capture_erasures: bool,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_snapshots: default_max_snapshots(),
            capture_erasures: default_capture_erasures(),
        }
    }
}

/// PNG export settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Directory for exports without an explicit path (supports `~/`)
    #[serde(default = "default_export_directory")]
    pub directory: String,

    /// File name template (chrono format specifiers), without extension
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
            filename_template: default_filename_template(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_tool() -> Tool {
    Tool::Pencil
}

fn default_stroke_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_fill_color() -> ColorSpec {
    ColorSpec::Name("transparent".to_string())
}

fn default_brush_size() -> f64 {
    3.0
}

fn default_opacity() -> f64 {
    1.0
}

fn default_text_size() -> f64 {
    16.0
}

fn default_text_position() -> [f64; 2] {
    [50.0, 50.0]
}

fn default_arrow_length() -> f64 {
    20.0
}

fn default_arrow_angle() -> f64 {
    30.0
}

fn default_grid_size() -> f64 {
    20.0
}

fn default_grid_color() -> ColorSpec {
    ColorSpec::Name("#ccc".to_string())
}

fn default_board_mode() -> String {
    "light".to_string()
}

fn default_light_color() -> ColorSpec {
    ColorSpec::Name("#f8f9fa".to_string())
}

fn default_dark_color() -> ColorSpec {
    ColorSpec::Name("#333".to_string())
}

fn default_canvas_width() -> i32 {
    800
}

fn default_canvas_height() -> i32 {
    500
}

fn default_max_snapshots() -> usize {
    50
}

fn default_capture_erasures() -> bool {
    true
}

fn default_export_directory() -> String {
    "~/Pictures/Sketchboard".to_string()
}

fn default_filename_template() -> String {
    "whiteboard_%Y-%m-%d_%H%M%S".to_string()
}
