//! Cairo-based rendering functions for shapes, segments, text and the grid.
//!
//! All functions draw into a caller-provided context. Errors from Cairo are
//! returned so the caller can decide whether a failed paint matters.

use super::color::Color;
use super::font::FontDescriptor;
use super::shape::{Point, Shape};
use super::style::StrokeStyle;
use crate::config::BoardConfig;
use crate::input::BoardMode;
use std::f64::consts::PI;

/// Fills the whole surface with the board background for `mode`.
///
/// Should be called after clearing the canvas but before rendering strokes.
pub fn render_board_background(
    ctx: &cairo::Context,
    mode: BoardMode,
    config: &BoardConfig,
) -> Result<(), cairo::Error> {
    let color = mode.background_color(config);
    ctx.save()?;
    ctx.set_operator(cairo::Operator::Source);
    color.apply(ctx);
    ctx.paint()?;
    ctx.restore()
}

/// Renders a single shape with the given style.
///
/// The outline is stroked first; closed shapes are then filled when the style
/// carries a fill color.
pub fn render_shape(
    ctx: &cairo::Context,
    shape: &Shape,
    style: &StrokeStyle,
) -> Result<(), cairo::Error> {
    ctx.save()?;
    ctx.new_path();
    style.apply_stroke(ctx);

    match shape {
        Shape::Line { from, to } => {
            ctx.move_to(from.x, from.y);
            ctx.line_to(to.x, to.y);
        }
        Shape::Rect {
            x,
            y,
            width,
            height,
        } => {
            ctx.rectangle(*x, *y, *width, *height);
        }
        Shape::Circle { center, radius } => {
            ctx.arc(center.x, center.y, *radius, 0.0, 2.0 * PI);
        }
        Shape::Ellipse { center, rx, ry } => {
            if *rx <= 0.0 || *ry <= 0.0 {
                return ctx.restore();
            }
            // Scale a unit circle, then restore the identity matrix before
            // stroking so the line width is not distorted.
            ctx.save()?;
            ctx.translate(center.x, center.y);
            ctx.scale(*rx, *ry);
            ctx.arc(0.0, 0.0, 1.0, 0.0, 2.0 * PI);
            ctx.restore()?;
        }
        Shape::Closed { vertices } => {
            trace_polygon(ctx, vertices);
        }
        Shape::Arrow { tail, tip, head } => {
            ctx.move_to(tail.x, tail.y);
            ctx.line_to(tip.x, tip.y);
            for point in head {
                ctx.move_to(tip.x, tip.y);
                ctx.line_to(point.x, point.y);
            }
        }
    }

    if shape.is_closed() {
        ctx.stroke_preserve()?;
        if style.apply_fill(ctx) {
            ctx.fill()?;
        } else {
            ctx.new_path();
        }
    } else {
        ctx.stroke()?;
    }

    ctx.restore()
}

fn trace_polygon(ctx: &cairo::Context, vertices: &[Point]) {
    let Some((first, rest)) = vertices.split_first() else {
        return;
    };
    ctx.move_to(first.x, first.y);
    for vertex in rest {
        ctx.line_to(vertex.x, vertex.y);
    }
    ctx.close_path();
}

/// Renders one straight segment, as produced by freehand drawing or a remote peer.
pub fn render_segment(
    ctx: &cairo::Context,
    from: Point,
    to: Point,
    style: &StrokeStyle,
) -> Result<(), cairo::Error> {
    ctx.save()?;
    ctx.new_path();
    style.apply_stroke(ctx);
    ctx.move_to(from.x, from.y);
    ctx.line_to(to.x, to.y);
    ctx.stroke()?;
    ctx.restore()
}

/// Renders text with its baseline starting at `anchor` using Pango.
///
/// Text containing newline characters is laid out across multiple lines.
/// Font sizes are pixel sizes.
pub fn render_text(
    ctx: &cairo::Context,
    anchor: Point,
    text: &str,
    color: Color,
    size: f64,
    font: &FontDescriptor,
) -> Result<(), cairo::Error> {
    ctx.save()?;
    ctx.set_antialias(cairo::Antialias::Best);

    let layout = pangocairo::functions::create_layout(ctx);
    layout.set_font_description(Some(&font.to_pango(size)));
    layout.set_text(text);

    // Pango positions layouts by their top-left corner; shift up to the baseline.
    let baseline = layout.baseline() as f64 / pango::SCALE as f64;
    ctx.move_to(anchor.x, anchor.y - baseline);
    color.apply(ctx);
    pangocairo::functions::show_layout(ctx, &layout);

    ctx.restore()
}

/// Draws a square grid overlay with lines every `spacing` pixels.
pub fn render_grid(
    ctx: &cairo::Context,
    spacing: f64,
    color: Color,
    width: i32,
    height: i32,
) -> Result<(), cairo::Error> {
    if spacing <= 0.0 {
        return Ok(());
    }
    let (width, height) = (width as f64, height as f64);

    ctx.save()?;
    ctx.new_path();
    color.apply(ctx);
    ctx.set_line_width(1.0);

    // Offset by half a pixel so 1px lines land on whole pixels.
    let mut x = spacing;
    while x < width {
        ctx.move_to(x.floor() + 0.5, 0.0);
        ctx.line_to(x.floor() + 0.5, height);
        x += spacing;
    }
    let mut y = spacing;
    while y < height {
        ctx.move_to(0.0, y.floor() + 0.5);
        ctx.line_to(width, y.floor() + 0.5);
        y += spacing;
    }
    ctx.stroke()?;
    ctx.restore()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLUE, RED, WHITE};
    use crate::draw::shape::{ArrowHead, ShapeKind};
    use crate::draw::surface::Surface;

    fn white_surface(width: i32, height: i32) -> Surface {
        let mut surface = Surface::new(width, height).unwrap();
        surface.fill(WHITE).unwrap();
        surface
    }

    fn red_style(width: f64) -> StrokeStyle {
        StrokeStyle {
            color: RED,
            width,
            ..StrokeStyle::default()
        }
    }

    fn is_red(surface: &mut Surface, x: i32, y: i32) -> bool {
        let p = surface.pixel(x, y).unwrap().unwrap();
        p.r > 200 && p.g < 60 && p.b < 60
    }

    fn is_white(surface: &mut Surface, x: i32, y: i32) -> bool {
        let p = surface.pixel(x, y).unwrap().unwrap();
        p.r > 250 && p.g > 250 && p.b > 250
    }

    #[test]
    fn rectangle_outline_hits_its_corners_only() {
        let mut surface = white_surface(80, 60);
        let shape = Shape::from_drag(
            ShapeKind::Rectangle,
            Point::new(10.0, 10.0),
            Point::new(50.0, 40.0),
            ArrowHead::default(),
        )
        .unwrap();
        surface
            .draw(|ctx| render_shape(ctx, &shape, &red_style(2.0)))
            .unwrap();

        assert!(is_red(&mut surface, 10, 10));
        assert!(is_red(&mut surface, 49, 39));
        assert!(is_red(&mut surface, 30, 10));
        assert!(is_white(&mut surface, 30, 25));
        assert!(is_white(&mut surface, 60, 50));
    }

    #[test]
    fn fill_colors_the_interior() {
        let mut surface = white_surface(80, 80);
        let shape = Shape::Circle {
            center: Point::new(40.0, 40.0),
            radius: 20.0,
        };
        let style = StrokeStyle {
            fill: Some(BLUE),
            ..red_style(2.0)
        };
        surface.draw(|ctx| render_shape(ctx, &shape, &style)).unwrap();

        let center = surface.pixel(40, 40).unwrap().unwrap();
        assert_eq!((center.r, center.g, center.b), (0, 0, 255));
        assert!(is_white(&mut surface, 2, 2));
    }

    #[test]
    fn degenerate_ellipse_draws_nothing() {
        let mut surface = white_surface(20, 20);
        let before = surface.snapshot().unwrap();
        let shape = Shape::Ellipse {
            center: Point::new(10.0, 10.0),
            rx: 0.0,
            ry: 5.0,
        };
        surface
            .draw(|ctx| render_shape(ctx, &shape, &red_style(3.0)))
            .unwrap();
        assert_eq!(surface.snapshot().unwrap(), before);
    }

    #[test]
    fn dashed_segment_leaves_gaps() {
        let mut surface = white_surface(40, 10);
        let style = StrokeStyle {
            dash: crate::draw::DashStyle::Dashed,
            cap: crate::draw::LineCap::Butt,
            ..red_style(4.0)
        };
        surface
            .draw(|ctx| render_segment(ctx, Point::new(0.0, 5.0), Point::new(40.0, 5.0), &style))
            .unwrap();

        // 10px on, 5px off
        assert!(is_red(&mut surface, 5, 5));
        assert!(is_white(&mut surface, 12, 5));
        assert!(is_red(&mut surface, 20, 5));
    }

    #[test]
    fn opacity_blends_with_background() {
        let mut surface = white_surface(20, 20);
        let style = StrokeStyle {
            opacity: 0.5,
            ..red_style(6.0)
        };
        surface
            .draw(|ctx| render_segment(ctx, Point::new(0.0, 10.0), Point::new(20.0, 10.0), &style))
            .unwrap();

        let p = surface.pixel(10, 10).unwrap().unwrap();
        assert_eq!(p.r, 255);
        assert!((120..=135).contains(&p.g));
    }

    #[test]
    fn grid_lines_follow_spacing() {
        let mut surface = white_surface(60, 60);
        surface
            .draw(|ctx| render_grid(ctx, 20.0, BLUE, 60, 60))
            .unwrap();
        assert_eq!(surface.pixel(20, 7).unwrap().unwrap().b, 255);
        assert!(surface.pixel(20, 7).unwrap().unwrap().r < 10);
        assert!(is_white(&mut surface, 10, 10));
    }

    #[test]
    fn text_puts_ink_near_anchor() {
        let mut surface = white_surface(200, 80);
        surface
            .draw(|ctx| {
                render_text(
                    ctx,
                    Point::new(10.0, 50.0),
                    "Hello",
                    RED,
                    32.0,
                    &FontDescriptor::default(),
                )
            })
            .unwrap();

        let mut inked = 0;
        for y in 0..80 {
            for x in 0..200 {
                if !is_white(&mut surface, x, y) {
                    inked += 1;
                }
            }
        }
        assert!(inked > 0);
    }
}
