//! Library exports for the sketchboard drawing engine.
//!
//! A board is a [`CanvasState`]: a Cairo raster with undo history, driven by
//! [`InputEvent`]s from local input and from remote participants. The binary
//! replays recorded event scripts through it; embedders can feed events from a
//! UI or a network transport instead.

pub mod config;
pub mod draw;
pub mod export;
pub mod history;
pub mod input;
pub mod relay;
pub mod replay;
pub mod util;

pub use config::Config;
pub use input::{BoardMode, CanvasState, EventQueue, InputEvent, Tool};
