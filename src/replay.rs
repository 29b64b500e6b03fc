//! Deterministic replay of recorded event scripts.
//!
//! A script is JSON lines: one [`InputEvent`] object per line. Blank lines and
//! lines starting with `#` are skipped.
//!
//! ```text
//! # draw a red rectangle, then export it
//! {"type":"set_stroke_color","color":"red"}
//! {"type":"select_tool","tool":"rectangle"}
//! {"type":"pointer_down","x":10,"y":10}
//! {"type":"pointer_move","x":50,"y":40}
//! {"type":"pointer_up"}
//! {"type":"export","path":"board.png"}
//! ```

use crate::config::{Config, ExportConfig};
use crate::draw::SurfaceError;
use crate::export::{self, ExportError};
use crate::input::{BoardMode, CanvasState, EventQueue, InputEvent};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("Failed to read script {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid event on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),
}

/// What a replay did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Events applied
    pub events: usize,
    /// Undoable actions left at the end
    pub history_len: usize,
    /// Redoable actions left at the end
    pub redo_len: usize,
    /// Files written by `export` events, in order
    pub exports: Vec<PathBuf>,
    /// Local freehand segments that would have been broadcast
    pub outgoing_segments: usize,
}

/// Parses a script into events.
///
/// # Errors
/// Returns [`ReplayError::Parse`] with the 1-based line number of the first
/// line that is not a valid event.
pub fn parse_script(script: &str) -> Result<Vec<InputEvent>, ReplayError> {
    script
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(index, line)| {
            serde_json::from_str(line.trim()).map_err(|source| ReplayError::Parse {
                line: index + 1,
                source,
            })
        })
        .collect()
}

/// Feeds `events` through an [`EventQueue`] into `state`.
///
/// Exports requested along the way are written as soon as their event has
/// been applied, so each captures the board at that point of the script.
pub fn replay(
    events: Vec<InputEvent>,
    state: &mut CanvasState,
    export_config: &ExportConfig,
) -> Result<ReplaySummary, ReplayError> {
    let queue = EventQueue::new();
    let mut summary = ReplaySummary::default();

    for event in events {
        queue.push(event);
        summary.events += queue.dispatch(state)?;

        if let Some(request) = state.take_pending_export() {
            let path = export::export_canvas(state, &request, export_config)?;
            summary.exports.push(path);
        }
        summary.outgoing_segments += state.take_outgoing().len();
    }

    summary.history_len = state.history().len();
    summary.redo_len = state.history().redo_len();
    debug!("Replay summary: {summary:?}");
    Ok(summary)
}

/// Replays the script at `path` onto a fresh board.
pub fn run_script(
    path: &Path,
    config: &Config,
    mode: BoardMode,
) -> Result<(CanvasState, ReplaySummary), ReplayError> {
    let script = fs::read_to_string(path).map_err(|source| ReplayError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let events = parse_script(&script)?;
    info!("Replaying {} events from {}", events.len(), path.display());

    let mut state = CanvasState::new(config, mode)?;
    let summary = replay(events, &mut state, &config.export)?;
    Ok((state, summary))
}
