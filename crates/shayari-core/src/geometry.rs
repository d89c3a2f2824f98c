//! Geometric primitives for card layout and drawing.
//!
//! - [`Point`] - A 2D coordinate in canvas space
//! - [`Size`] - Width and height dimensions
//!
//! # Coordinate System
//!
//! Coordinates follow the raster/SVG convention:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! One unit is one output pixel.

/// A 2D point representing a position in canvas space.
///
/// # Examples
///
/// ```
/// # use shayari_core::geometry::Point;
/// let origin = Point::new(540.0, 60.0);
/// let offset = Point::new(-15.0, 8.0);
///
/// let moved = origin.add_point(offset);
/// assert_eq!(moved.x(), 525.0);
/// assert_eq!(moved.y(), 68.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

/// Width and height of a canvas or primitive.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(self) -> f32 {
        self.width
    }

    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns the size rounded to whole pixels, as used for raster surfaces.
    pub fn to_pixels(self) -> (u32, u32) {
        (
            self.width.round().max(0.0) as u32,
            self.height.round().max(0.0) as u32,
        )
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_add() {
        let point = Point::new(1.0, 2.0).add_point(Point::new(9.0, 18.0));
        assert_approx_eq!(f32, point.x(), 10.0);
        assert_approx_eq!(f32, point.y(), 20.0);
    }

    #[test]
    fn test_size_to_pixels() {
        assert_eq!(Size::new(1080.0, 1080.0).to_pixels(), (1080, 1080));
        assert_eq!(Size::new(10.4, 9.6).to_pixels(), (10, 10));
        assert_eq!(Size::new(-3.0, 0.0).to_pixels(), (0, 0));
    }
}
