//! Drawing state machine and canvas state.

use crate::config::{BoardConfig, Config};
use crate::draw::{
    ArrowHead, Color, FontDescriptor, Point, Rgba, ShapeKind, StrokeStyle, Surface, SurfaceError,
    render_board_background,
};
use crate::history::History;
use crate::input::{board_mode::BoardMode, tool::Tool};
use crate::relay::RemoteSegment;
use log::debug;
use std::path::PathBuf;

/// Current stroke state machine.
///
/// The eraser never enters `Drawing`: it acts on each pointer event directly.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawingState {
    /// Not actively drawing - waiting for a pointer press
    Idle,
    /// A stroke is in progress (button held since `start`)
    Drawing {
        /// Tool the stroke was started with
        tool: Tool,
        /// Shape this stroke produces
        kind: ShapeKind,
        /// Where the pointer went down
        start: Point,
        /// Most recent pointer sample
        last: Point,
        /// Style frozen at pointer-down
        style: StrokeStyle,
    },
}

/// Grid overlay and snapping state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSettings {
    /// Draw the grid over the composited frame
    pub show: bool,
    /// Round pointer positions to grid intersections
    pub snap: bool,
    /// Spacing in pixels
    pub size: f64,
    pub color: Color,
}

/// Text insertion state.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSettings {
    pub font: FontDescriptor,
    /// Pixel size
    pub size: f64,
    /// Baseline position for the next insertion
    pub anchor: Point,
}

/// A PNG export requested through the event stream, waiting for the runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    /// Explicit destination; `None` uses the configured directory and template
    pub path: Option<PathBuf>,
}

/// Everything one board owns: the committed raster, the undo history, the
/// current tool and style, and the stroke in progress.
///
/// The visible frame is never drawn to directly. Finished strokes, text,
/// erasures and remote segments go onto the committed layer; the shape being
/// dragged lives only in [`DrawingState`] and is painted on top by
/// [`CanvasState::composite`]. A remote segment that arrives mid-drag therefore
/// survives the next preview redraw.
pub struct CanvasState {
    /// Finished local strokes and remote segments
    pub(crate) committed: Surface,
    pub(crate) history: History,
    /// Current stroke state machine
    pub(crate) state: DrawingState,
    pub(crate) tool: Tool,
    /// Style the next stroke starts with
    pub(crate) style: StrokeStyle,
    pub(crate) text: TextSettings,
    pub(crate) arrow: ArrowHead,
    pub(crate) grid: GridSettings,
    pub(crate) mode: BoardMode,
    pub(crate) board_config: BoardConfig,
    /// Record eraser drags in the history
    pub(crate) capture_erasures: bool,
    /// Pixels were erased since the last history capture
    pub(crate) erased_since_capture: bool,
    /// Local freehand segments not yet handed to the relay
    pub(crate) outgoing: Vec<RemoteSegment>,
    pub(crate) pending_export: Option<ExportRequest>,
    /// Whether the composited frame changed since it was last taken
    pub needs_redraw: bool,
}

impl std::fmt::Debug for CanvasState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CanvasState")
            .field("committed", &self.committed)
            .field("history", &self.history.len())
            .field("redo", &self.history.redo_len())
            .field("state", &self.state)
            .field("tool", &self.tool)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl CanvasState {
    /// Creates a board of the configured size, filled with the background of
    /// `mode`. The freshly filled surface is the history baseline.
    pub fn new(config: &Config, mode: BoardMode) -> Result<Self, SurfaceError> {
        let mut committed = Surface::new(config.canvas.width, config.canvas.height)?;
        committed.draw(|ctx| render_board_background(ctx, mode, &config.board))?;
        let baseline = committed.snapshot()?;

        debug!(
            "Created {}x{} {} board",
            committed.width(),
            committed.height(),
            mode.name()
        );

        Ok(Self {
            committed,
            history: History::new(baseline, config.history.max_snapshots),
            state: DrawingState::Idle,
            tool: config.drawing.default_tool,
            style: config.drawing.stroke_style(),
            text: TextSettings {
                font: config.text.font.clone(),
                size: config.text.size,
                anchor: config.text.anchor(),
            },
            arrow: ArrowHead {
                length: config.arrow.length,
                angle_degrees: config.arrow.angle_degrees,
            },
            grid: GridSettings {
                show: config.grid.show,
                snap: config.grid.snap,
                size: config.grid.size,
                color: config.grid.color.to_color(),
            },
            mode,
            board_config: config.board.clone(),
            capture_erasures: config.history.capture_erasures,
            erased_since_capture: false,
            outgoing: Vec::new(),
            pending_export: None,
            needs_redraw: true,
        })
    }

    /// The committed layer: what gets exported and snapshotted.
    pub fn committed(&self) -> &Surface {
        &self.committed
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn drawing_state(&self) -> &DrawingState {
        &self.state
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawingState::Drawing { .. })
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    pub fn text(&self) -> &TextSettings {
        &self.text
    }

    pub fn grid(&self) -> &GridSettings {
        &self.grid
    }

    pub fn mode(&self) -> BoardMode {
        self.mode
    }

    /// Current board background color.
    pub fn background_color(&self) -> Color {
        self.mode.background_color(&self.board_config)
    }

    /// Pixel of the committed layer, for inspection.
    pub fn committed_pixel(&mut self, x: i32, y: i32) -> Result<Option<Rgba>, SurfaceError> {
        self.committed.pixel(x, y)
    }

    /// Hands over local freehand segments queued for broadcasting.
    pub fn take_outgoing(&mut self) -> Vec<RemoteSegment> {
        std::mem::take(&mut self.outgoing)
    }

    /// Takes the export request parked by the last `export` event, if any.
    pub fn take_pending_export(&mut self) -> Option<ExportRequest> {
        self.pending_export.take()
    }

    /// Snapshots the committed layer into the history.
    pub(crate) fn capture(&mut self) -> Result<(), SurfaceError> {
        let snapshot = self.committed.snapshot()?;
        self.history.capture(snapshot);
        self.erased_since_capture = false;
        debug!(
            "Captured snapshot ({} undoable, redo cleared)",
            self.history.len()
        );
        Ok(())
    }

    /// Records pending erasures as their own history entry.
    ///
    /// Nothing is recorded (and redo survives) when the eraser only passed
    /// over pixels that already matched the last recorded state.
    pub(crate) fn flush_erasure(&mut self) -> Result<(), SurfaceError> {
        if !std::mem::take(&mut self.erased_since_capture) || !self.capture_erasures {
            return Ok(());
        }

        let snapshot = self.committed.snapshot()?;
        if &snapshot == self.history.latest() {
            debug!("Eraser left the board unchanged, nothing to record");
            return Ok(());
        }
        self.history.capture(snapshot);
        debug!("Captured erasure ({} undoable)", self.history.len());
        Ok(())
    }
}
