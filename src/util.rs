//! Utility functions for colors, geometry, and arrowhead calculations.
//!
//! This module provides:
//! - Color name lookup for the whiteboard palette (constants live in draw::color)
//! - Arrowhead geometry calculations
//! - Integer rectangles and grid snapping

use crate::draw::{Color, Point, color::*};

// ============================================================================
// Arrowhead Geometry
// ============================================================================

/// Calculates arrowhead points with custom length and angle.
///
/// Creates a V-shaped arrowhead at `tip` pointing in the direction from `tail`
/// to `tip`. The arrowhead length is capped at 30% of the line length so short
/// arrows don't turn into a blob.
///
/// # Returns
/// Array of two points `[left, right]` for the arrowhead strokes.
/// If the line is shorter than one pixel, both points equal `tip`.
pub fn calculate_arrowhead_custom(
    tip: Point,
    tail: Point,
    length: f64,
    angle_degrees: f64,
) -> [Point; 2] {
    let dx = tip.x - tail.x;
    let dy = tip.y - tail.y;
    let line_length = (dx * dx + dy * dy).sqrt();

    if line_length < 1.0 {
        return [tip, tip];
    }

    let ux = dx / line_length;
    let uy = dy / line_length;

    let arrow_length = length.min(line_length * 0.3);

    let angle = angle_degrees.to_radians();
    let cos_a = angle.cos();
    let sin_a = angle.sin();

    let left = Point::new(
        tip.x - arrow_length * (ux * cos_a - uy * sin_a),
        tip.y - arrow_length * (uy * cos_a + ux * sin_a),
    );
    let right = Point::new(
        tip.x - arrow_length * (ux * cos_a + uy * sin_a),
        tip.y - arrow_length * (uy * cos_a - ux * sin_a),
    );

    [left, right]
}

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by [`Color::parse`] and the configuration system.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "gray"/"grey",
///   "white", "black", "transparent"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "gray" | "grey" => Some(GRAY),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        "transparent" => Some(TRANSPARENT),
        _ => None,
    }
}

// ============================================================================
// Geometry Utilities
// ============================================================================

/// Axis-aligned integer rectangle in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Builds a rectangle from min/max bounds (inclusive min, exclusive max).
    pub fn from_min_max(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Self> {
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Square of side `size` centered on `center`, snapped outward to whole pixels.
    pub fn centered_square(center: Point, size: f64) -> Option<Self> {
        let half = size / 2.0;
        Self::from_min_max(
            (center.x - half).floor() as i32,
            (center.y - half).floor() as i32,
            (center.x + half).ceil() as i32,
            (center.y + half).ceil() as i32,
        )
    }

    /// Returns true if the point lies inside the rectangle.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && y >= self.y && x < self.x + self.width && y < self.y + self.height
    }
}

/// Rounds a point to the nearest intersection of a square grid.
///
/// A non-positive `spacing` leaves the point untouched.
pub fn snap_to_grid(point: Point, spacing: f64) -> Point {
    if spacing <= 0.0 {
        return point;
    }
    Point::new(
        (point.x / spacing).round() * spacing,
        (point.y / spacing).round() * spacing,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, WHITE};

    #[test]
    fn arrowhead_caps_at_thirty_percent_of_line_length() {
        let [left, _] =
            calculate_arrowhead_custom(Point::new(10.0, 10.0), Point::new(0.0, 10.0), 100.0, 30.0);
        let distance = ((10.0 - left.x).powi(2) + (10.0 - left.y).powi(2)).sqrt();
        assert!((distance - 3.0).abs() < 1e-9);
    }

    #[test]
    fn arrowhead_handles_degenerate_lines() {
        let tip = Point::new(5.0, 5.0);
        let [left, right] = calculate_arrowhead_custom(tip, tip, 15.0, 45.0);
        assert_eq!(left, tip);
        assert_eq!(right, tip);
    }

    #[test]
    fn arrowhead_points_back_along_the_shaft() {
        let [left, right] =
            calculate_arrowhead_custom(Point::new(100.0, 0.0), Point::new(0.0, 0.0), 20.0, 30.0);
        assert!(left.x < 100.0 && right.x < 100.0);
        assert!((left.y + right.y).abs() < 1e-9);
    }

    #[test]
    fn name_lookup_is_case_insensitive() {
        assert_eq!(name_to_color("White").unwrap(), WHITE);
        assert_eq!(name_to_color("BLACK").unwrap(), BLACK);
        assert!(name_to_color("chartreuse").is_none());
    }

    #[test]
    fn centered_square_covers_brush() {
        let rect = Rect::centered_square(Point::new(10.0, 10.0), 4.0).unwrap();
        assert_eq!(rect, Rect::new(8, 8, 4, 4).unwrap());
        assert!(rect.contains(8, 11));
        assert!(!rect.contains(12, 12));

        let odd = Rect::centered_square(Point::new(10.0, 10.0), 3.0).unwrap();
        assert_eq!(odd, Rect::new(8, 8, 4, 4).unwrap());
    }

    #[test]
    fn snapping_rounds_to_nearest_intersection() {
        assert_eq!(
            snap_to_grid(Point::new(29.0, 11.0), 20.0),
            Point::new(20.0, 20.0)
        );
        assert_eq!(
            snap_to_grid(Point::new(31.0, 9.0), 20.0),
            Point::new(40.0, 0.0)
        );
        assert_eq!(snap_to_grid(Point::new(3.3, 4.4), 0.0), Point::new(3.3, 4.4));
    }
}
