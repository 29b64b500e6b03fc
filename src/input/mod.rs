//! Input handling and stroke state machine.
//!
//! This module turns pointer events, control changes and remote segments into
//! drawing on the canvas. Events arrive through an [`EventQueue`] and are applied
//! to a [`CanvasState`], which owns the surface, the undo history, the current
//! tool and style, and the stroke in progress.

pub mod board_mode;
pub mod events;
pub mod queue;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use board_mode::BoardMode;
pub use events::InputEvent;
pub use queue::{EventQueue, EventSender};
pub use state::{CanvasState, DrawingState, ExportRequest};
pub use tool::Tool;
