use crate::draw::{Point, Shape, ShapeKind, SurfaceError, render_segment, render_shape};
use crate::input::tool::Tool;
use crate::relay::RemoteSegment;
use crate::util::{self, Rect};
use log::debug;

use super::{CanvasState, DrawingState};

impl CanvasState {
    /// Processes a primary button press.
    ///
    /// # Behavior
    /// - Drawing tools while Idle: start a stroke at `(x, y)` with a frozen copy of
    ///   the current style
    /// - Text tool: moves the anchor for the next text insertion
    /// - Eraser: clears a brush-sized square around the pointer
    /// - A press while a stroke is already in progress is ignored
    pub fn on_pointer_down(&mut self, x: f64, y: f64) -> Result<(), SurfaceError> {
        let point = self.snap(Point::new(x, y));

        if self.is_drawing() {
            return Ok(());
        }

        match self.tool {
            Tool::Eraser => self.erase_at(point)?,
            Tool::Text => {
                self.flush_erasure()?;
                self.text.anchor = point;
                debug!("Text anchor moved to ({}, {})", point.x, point.y);
            }
            tool => {
                let Some(kind) = tool.shape_kind() else {
                    return Ok(());
                };
                self.flush_erasure()?;
                self.state = DrawingState::Drawing {
                    tool,
                    kind,
                    start: point,
                    last: point,
                    style: self.style,
                };
                debug!("Started {kind:?} stroke at ({}, {})", point.x, point.y);
                self.needs_redraw = true;
            }
        }
        Ok(())
    }

    /// Processes pointer motion.
    ///
    /// # Behavior
    /// - Freehand stroke: paints the segment from the previous sample onto the
    ///   committed layer and queues it for the relay
    /// - Other strokes: only tracks the pointer; the preview is rebuilt from the
    ///   drawing state on the next [`CanvasState::composite`]
    /// - Eraser (no stroke in progress): erases under the pointer, button held or not
    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> Result<(), SurfaceError> {
        let point = self.snap(Point::new(x, y));

        if !self.is_drawing() {
            if self.tool == Tool::Eraser {
                self.erase_at(point)?;
            }
            return Ok(());
        }

        match &mut self.state {
            DrawingState::Drawing {
                kind: ShapeKind::Freehand,
                last,
                style,
                ..
            } => {
                let from = *last;
                *last = point;
                let style = *style;
                self.committed
                    .draw(|ctx| render_segment(ctx, from, point, &style))?;
                self.outgoing
                    .push(RemoteSegment::from_local(from, point, &style));
                self.needs_redraw = true;
            }
            DrawingState::Drawing { last, .. } => {
                *last = point;
                self.needs_redraw = true;
            }
            DrawingState::Idle => {}
        }
        Ok(())
    }

    /// Processes a primary button release.
    ///
    /// Commits the stroke in progress using the last pointer sample and records
    /// exactly one history entry. Pending erasures are recorded instead when no
    /// stroke is in progress.
    pub fn on_pointer_up(&mut self) -> Result<(), SurfaceError> {
        self.finish_stroke()
    }

    /// The pointer left the surface; behaves like a release.
    pub fn on_pointer_leave(&mut self) -> Result<(), SurfaceError> {
        self.finish_stroke()
    }

    fn finish_stroke(&mut self) -> Result<(), SurfaceError> {
        let DrawingState::Drawing {
            kind,
            start,
            last,
            style,
            ..
        } = std::mem::replace(&mut self.state, DrawingState::Idle)
        else {
            return self.flush_erasure();
        };

        // Freehand segments are already on the committed layer.
        if let Some(shape) = Shape::from_drag(kind, start, last, self.arrow) {
            self.committed
                .draw(|ctx| render_shape(ctx, &shape, &style))?;
        }
        debug!("Finished {kind:?} stroke");

        self.needs_redraw = true;
        self.capture()
    }

    /// Clears a brush-sized square centered on `point` to the board background.
    pub(crate) fn erase_at(&mut self, point: Point) -> Result<(), SurfaceError> {
        let Some(rect) = Rect::centered_square(point, self.style.width) else {
            return Ok(());
        };
        let background = self.background_color();
        self.committed.fill_rect(rect, background)?;
        self.erased_since_capture = true;
        self.needs_redraw = true;
        Ok(())
    }

    /// Applies grid snapping when enabled.
    pub(crate) fn snap(&self, point: Point) -> Point {
        if self.grid.snap {
            util::snap_to_grid(point, self.grid.size)
        } else {
            point
        }
    }
}
