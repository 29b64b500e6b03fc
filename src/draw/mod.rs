//! Rendering primitives and shape definitions (Cairo-based).
//!
//! This module defines the core drawing types of the board:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Shape`]: Resolved geometry for each drawing tool
//! - [`StrokeStyle`]: How a stroke is painted (width, dash, caps, joins, opacity)
//! - [`Surface`]: The raster the board draws into, with full-surface [`Snapshot`]s
//! - Rendering functions for Cairo-based output

pub mod color;
pub mod font;
pub mod render;
pub mod shape;
pub mod style;
pub mod surface;

// Re-export commonly used types at module level
pub use color::Color;
pub use font::FontDescriptor;
pub use render::{
    render_board_background, render_grid, render_segment, render_shape, render_text,
};
pub use shape::{ArrowHead, Point, Shape, ShapeKind};
pub use style::{DashStyle, LineCap, LineJoin, StrokeStyle};
pub use surface::{Rgba, Snapshot, Surface, SurfaceError};

pub use color::{BLACK, BLUE, GRAY, GREEN, ORANGE, PINK, RED, TRANSPARENT, WHITE, YELLOW};
