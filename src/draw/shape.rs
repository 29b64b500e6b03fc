//! Shape geometry resolved from a pointer drag.

use crate::util;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Outer radius of the star stamp in pixels.
pub const STAR_OUTER_RADIUS: f64 = 30.0;
/// Inner radius of the star stamp in pixels.
pub const STAR_INNER_RADIUS: f64 = 15.0;
/// Number of spikes on the star stamp.
pub const STAR_SPIKES: usize = 5;
/// Circumradius of the hexagon stamp in pixels.
pub const POLYGON_RADIUS: f64 = 50.0;
/// Number of sides on the polygon stamp.
pub const POLYGON_SIDES: usize = 6;

/// A position on the drawing surface in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Geometric primitive a drawing tool produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Incremental polyline following the pointer
    Freehand,
    Line,
    Rectangle,
    Circle,
    Triangle,
    Star,
    Polygon,
    Ellipse,
    Arrow,
}

/// Arrowhead proportions for [`ShapeKind::Arrow`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowHead {
    /// Arrowhead length in pixels
    pub length: f64,
    /// Angle between each head stroke and the shaft, in degrees
    pub angle_degrees: f64,
}

impl Default for ArrowHead {
    fn default() -> Self {
        Self {
            length: 20.0,
            angle_degrees: 30.0,
        }
    }
}

/// Fully resolved geometry ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Straight line between two points
    Line { from: Point, to: Point },
    /// Axis-aligned rectangle, normalized so `width` and `height` are non-negative
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    /// Circle around `center`
    Circle { center: Point, radius: f64 },
    /// Axis-aligned ellipse around `center`
    Ellipse { center: Point, rx: f64, ry: f64 },
    /// Closed polygon through `vertices` (triangle, star and hexagon stamps)
    Closed { vertices: Vec<Point> },
    /// Line with a two-stroke head at `tip`
    Arrow {
        tail: Point,
        tip: Point,
        head: [Point; 2],
    },
}

impl Shape {
    /// Resolves the shape a drag from `start` to `current` describes.
    ///
    /// Returns `None` for [`ShapeKind::Freehand`], which is drawn segment by
    /// segment instead of from the drag rectangle. Star and polygon are stamps
    /// of fixed size centered on `start`; `current` does not affect them.
    pub fn from_drag(kind: ShapeKind, start: Point, current: Point, arrow: ArrowHead) -> Option<Self> {
        let shape = match kind {
            ShapeKind::Freehand => return None,
            ShapeKind::Line => Shape::Line {
                from: start,
                to: current,
            },
            ShapeKind::Rectangle => Shape::Rect {
                x: start.x.min(current.x),
                y: start.y.min(current.y),
                width: (current.x - start.x).abs(),
                height: (current.y - start.y).abs(),
            },
            ShapeKind::Circle => Shape::Circle {
                center: start,
                radius: start.distance_to(current),
            },
            ShapeKind::Ellipse => Shape::Ellipse {
                center: start,
                rx: (current.x - start.x).abs(),
                ry: (current.y - start.y).abs(),
            },
            ShapeKind::Triangle => Shape::Closed {
                vertices: triangle_vertices(start, current),
            },
            ShapeKind::Star => Shape::Closed {
                vertices: star_vertices(start, STAR_SPIKES, STAR_OUTER_RADIUS, STAR_INNER_RADIUS),
            },
            ShapeKind::Polygon => Shape::Closed {
                vertices: regular_polygon_vertices(start, POLYGON_SIDES, POLYGON_RADIUS),
            },
            ShapeKind::Arrow => Shape::Arrow {
                tail: start,
                tip: current,
                head: util::calculate_arrowhead_custom(
                    current,
                    start,
                    arrow.length,
                    arrow.angle_degrees,
                ),
            },
        };
        Some(shape)
    }

    /// Whether the renderer fills this shape when a fill color is set.
    pub fn is_closed(&self) -> bool {
        !matches!(self, Shape::Line { .. } | Shape::Arrow { .. })
    }
}

/// Isosceles triangle with its apex at `start` and base through `current`,
/// mirrored about the vertical line through `start`.
pub fn triangle_vertices(start: Point, current: Point) -> Vec<Point> {
    vec![
        start,
        current,
        Point::new(start.x * 2.0 - current.x, current.y),
    ]
}

/// Alternating outer/inner vertices of a star, starting with the spike straight up.
pub fn star_vertices(center: Point, spikes: usize, outer: f64, inner: f64) -> Vec<Point> {
    let step = PI / spikes as f64;
    let mut rotation = PI / 2.0 * 3.0;
    let mut vertices = Vec::with_capacity(spikes * 2);
    for _ in 0..spikes {
        for radius in [outer, inner] {
            vertices.push(Point::new(
                center.x + rotation.cos() * radius,
                center.y + rotation.sin() * radius,
            ));
            rotation += step;
        }
    }
    vertices
}

/// Vertices of a regular polygon, the first one at angle zero (pointing right).
pub fn regular_polygon_vertices(center: Point, sides: usize, radius: f64) -> Vec<Point> {
    (0..sides)
        .map(|i| {
            let angle = i as f64 * 2.0 * PI / sides as f64;
            Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
        })
        .collect()
}
