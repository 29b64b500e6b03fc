use crate::draw::color::BLACK;
use crate::draw::{
    Color, DashStyle, LineCap, LineJoin, Point, SurfaceError, render_board_background,
    render_segment, render_text,
};
use crate::input::{events::InputEvent, tool::Tool};
use crate::relay::RemoteSegment;
use log::{debug, info, warn};
use std::path::PathBuf;

use super::{CanvasState, DrawingState, ExportRequest};

impl CanvasState {
    /// Applies one event from the queue.
    pub fn handle_event(&mut self, event: InputEvent) -> Result<(), SurfaceError> {
        match event {
            InputEvent::PointerDown { x, y } => self.on_pointer_down(x, y)?,
            InputEvent::PointerMove { x, y } => self.on_pointer_move(x, y)?,
            InputEvent::PointerUp => self.on_pointer_up()?,
            InputEvent::PointerLeave => self.on_pointer_leave()?,
            InputEvent::SelectTool { tool } => self.select_tool(tool)?,
            InputEvent::SetStrokeColor { color } => self.set_stroke_color(parse_color(&color)),
            InputEvent::SetFillColor { color } => self.set_fill_color(parse_color(&color)),
            InputEvent::SetBrushSize { size } => self.set_brush_size(size),
            InputEvent::SetBrushStyle { style } => self.set_brush_style(style),
            InputEvent::SetLineCap { cap } => self.set_line_cap(cap),
            InputEvent::SetLineJoin { join } => self.set_line_join(join),
            InputEvent::SetOpacity { opacity } => self.set_opacity(opacity),
            InputEvent::SetFont { family } => self.set_font_family(family),
            InputEvent::SetTextSize { size } => self.set_text_size(size),
            InputEvent::AddText { text, x, y } => {
                let anchor = (x.is_some() || y.is_some()).then(|| {
                    Point::new(
                        x.unwrap_or(self.text.anchor.x),
                        y.unwrap_or(self.text.anchor.y),
                    )
                });
                self.add_text(&text, anchor)?;
            }
            InputEvent::Undo => {
                self.undo()?;
            }
            InputEvent::Redo => {
                self.redo()?;
            }
            InputEvent::ToggleMode => self.toggle_mode()?,
            InputEvent::ToggleGrid => self.toggle_grid(),
            InputEvent::ToggleSnap => self.toggle_snap(),
            InputEvent::SetGridSize { size } => self.set_grid_size(size),
            InputEvent::SetGridColor { color } => self.set_grid_color(parse_color(&color)),
            InputEvent::Draw(segment) => self.on_remote_segment(&segment)?,
            InputEvent::Export { path } => self.request_export(path),
        }
        Ok(())
    }

    /// Reverts the most recent recorded action.
    ///
    /// Returns `false` (and changes nothing) when there is nothing to undo or a
    /// stroke is in progress.
    pub fn undo(&mut self) -> Result<bool, SurfaceError> {
        if self.is_drawing() {
            debug!("Ignoring undo during a stroke");
            return Ok(false);
        }
        self.flush_erasure()?;
        if !self.history.can_undo() {
            debug!("Nothing to undo");
            return Ok(false);
        }

        let current = self.committed.snapshot()?;
        if let Some(snapshot) = self.history.undo(current) {
            self.committed.restore(snapshot)?;
        }
        self.needs_redraw = true;
        Ok(true)
    }

    /// Re-applies the most recently undone action.
    ///
    /// Returns `false` when nothing has been undone since the last new action.
    pub fn redo(&mut self) -> Result<bool, SurfaceError> {
        if self.is_drawing() {
            debug!("Ignoring redo during a stroke");
            return Ok(false);
        }
        self.flush_erasure()?;

        match self.history.redo() {
            Some(snapshot) => {
                self.committed.restore(snapshot)?;
                self.needs_redraw = true;
                Ok(true)
            }
            None => {
                debug!("Nothing to redo");
                Ok(false)
            }
        }
    }

    /// Draws `text` with the current font, size and stroke color, then records
    /// it in the history.
    ///
    /// `anchor` is the baseline start; `None` uses the last text-tool click (or
    /// the configured default position). Empty text is ignored.
    pub fn add_text(&mut self, text: &str, anchor: Option<Point>) -> Result<bool, SurfaceError> {
        if text.trim().is_empty() {
            return Ok(false);
        }
        self.flush_erasure()?;

        let anchor = anchor.unwrap_or(self.text.anchor);
        let color = self.style.color.with_opacity(self.style.opacity);
        let size = self.text.size;
        let font = &self.text.font;
        self.committed
            .draw(|ctx| render_text(ctx, anchor, text, color, size, font))?;
        debug!("Added text at ({}, {})", anchor.x, anchor.y);

        self.needs_redraw = true;
        self.capture()?;
        Ok(true)
    }

    /// Switches between light and dark board.
    ///
    /// The surface is cleared to the new background and both history stacks
    /// start over from it; any stroke in progress is dropped.
    pub fn toggle_mode(&mut self) -> Result<(), SurfaceError> {
        self.mode = self.mode.toggled();
        self.state = DrawingState::Idle;
        self.erased_since_capture = false;

        let (mode, board) = (self.mode, &self.board_config);
        self.committed
            .draw(|ctx| render_board_background(ctx, mode, board))?;
        let baseline = self.committed.snapshot()?;
        self.history.reset(baseline);

        info!("Switched to {} board", self.mode.name());
        self.needs_redraw = true;
        Ok(())
    }

    /// Paints a segment received from another participant onto the committed
    /// layer with the sender's style.
    ///
    /// Local tool, style and history are not touched.
    pub fn on_remote_segment(&mut self, segment: &RemoteSegment) -> Result<(), SurfaceError> {
        let style = segment.stroke_style();
        let (from, to) = (segment.from_point(), segment.to_point());
        self.committed
            .draw(|ctx| render_segment(ctx, from, to, &style))?;
        self.needs_redraw = true;
        Ok(())
    }

    /// Selects the tool for the next stroke.
    ///
    /// A stroke already in progress keeps the tool it started with. Leaving the
    /// eraser records its pending erasures.
    pub fn select_tool(&mut self, tool: Tool) -> Result<(), SurfaceError> {
        if tool != self.tool {
            self.flush_erasure()?;
            debug!("Tool changed to {}", tool.name());
            self.tool = tool;
        }
        Ok(())
    }

    pub fn set_stroke_color(&mut self, color: Color) {
        self.style.color = color;
    }

    /// Sets the fill for closed shapes; a transparent color turns filling off.
    pub fn set_fill_color(&mut self, color: Color) {
        self.style.set_fill(color);
    }

    /// Sets the line width, which is also the eraser size.
    pub fn set_brush_size(&mut self, size: f64) {
        self.style.width = size;
    }

    pub fn set_brush_style(&mut self, dash: DashStyle) {
        self.style.dash = dash;
    }

    pub fn set_line_cap(&mut self, cap: LineCap) {
        self.style.cap = cap;
    }

    pub fn set_line_join(&mut self, join: LineJoin) {
        self.style.join = join;
    }

    pub fn set_opacity(&mut self, opacity: f64) {
        self.style.opacity = opacity;
    }

    pub fn set_font_family(&mut self, family: String) {
        self.text.font.family = family;
    }

    pub fn set_text_size(&mut self, size: f64) {
        self.text.size = size;
    }

    pub fn toggle_grid(&mut self) {
        self.grid.show = !self.grid.show;
        self.needs_redraw = true;
    }

    pub fn toggle_snap(&mut self) {
        self.grid.snap = !self.grid.snap;
    }

    pub fn set_grid_size(&mut self, size: f64) {
        self.grid.size = size;
        self.needs_redraw = true;
    }

    pub fn set_grid_color(&mut self, color: Color) {
        self.grid.color = color;
        self.needs_redraw = true;
    }

    /// Parks an export request for the runner to pick up.
    pub fn request_export(&mut self, path: Option<PathBuf>) {
        if self.pending_export.is_some() {
            warn!("Export requested before the previous one was written; replacing it");
        }
        self.pending_export = Some(ExportRequest { path });
    }
}

/// Resolves a color from the event stream, falling back to black.
fn parse_color(spec: &str) -> Color {
    Color::parse(spec).unwrap_or_else(|| {
        warn!("Unknown color '{}', using black", spec);
        BLACK
    })
}
