mod actions;
mod core;
mod mouse;
mod render;

pub use self::core::{CanvasState, DrawingState, ExportRequest, GridSettings, TextSettings};
