use crate::draw::{Shape, StrokeStyle, Surface, SurfaceError, render_grid, render_shape};

use super::{CanvasState, DrawingState};

impl CanvasState {
    /// Returns the shape currently being dragged, for live preview.
    ///
    /// # Returns
    /// - `Some((shape, style))` while a non-freehand stroke is in progress
    /// - `None` when idle or drawing freehand (freehand segments are committed
    ///   as they are drawn)
    pub fn provisional_shape(&self) -> Option<(Shape, StrokeStyle)> {
        match &self.state {
            DrawingState::Drawing {
                kind,
                start,
                last,
                style,
                ..
            } => Shape::from_drag(*kind, *start, *last, self.arrow).map(|shape| (shape, *style)),
            DrawingState::Idle => None,
        }
    }

    /// Builds the visible frame: the committed layer, the grid overlay when
    /// shown, and the preview of the stroke in progress.
    ///
    /// The committed layer is left untouched, so a preview never erases
    /// anything that was drawn underneath it, including remote segments.
    pub fn composite(&mut self) -> Result<Surface, SurfaceError> {
        let mut frame = Surface::new(self.committed.width(), self.committed.height())?;
        let (width, height) = (frame.width(), frame.height());
        let preview = self.provisional_shape();
        let grid = self.grid;

        frame.draw(|ctx| {
            ctx.set_source_surface(self.committed.image(), 0.0, 0.0)?;
            ctx.set_operator(cairo::Operator::Source);
            ctx.paint()?;
            ctx.set_operator(cairo::Operator::Over);

            if grid.show {
                render_grid(ctx, grid.size, grid.color, width, height)?;
            }
            if let Some((shape, style)) = &preview {
                render_shape(ctx, shape, style)?;
            }
            Ok(())
        })?;

        self.needs_redraw = false;
        Ok(frame)
    }
}
