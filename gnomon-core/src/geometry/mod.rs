//! Hand and tick-mark geometry
//!
//! Shapes are declared once as percentages of the face radius, converted to
//! pixel trapezoids at layout time, and rotated about the face centre on
//! every tick.

pub mod rotate;
pub mod shape;
pub mod sine;

pub use rotate::{HandAngle, Quad, Rotator};
pub use shape::{GeometryTable, ShapeGeometryPx, ShapeKind, ShapeSpec, SHAPE_COUNT};
pub use sine::SineTable;

/// Integer pixel coordinate
///
/// Used both for absolute screen positions and for offsets relative to the
/// face centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset this point by another
    pub const fn offset(self, by: Point) -> Self {
        Self {
            x: self.x + by.x,
            y: self.y + by.y,
        }
    }
}

/// Round to the nearest pixel with a half-pixel bias
///
/// `floor(v + 0.5)` is applied uniformly, including to negative values, so
/// rotated and unrotated coordinates never drift apart by a pixel.
#[inline]
pub fn round_px(value: f32) -> i32 {
    libm::floorf(value + 0.5) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_px_bias() {
        assert_eq!(round_px(1.49), 1);
        assert_eq!(round_px(1.5), 2);
        assert_eq!(round_px(-0.4), 0);
        assert_eq!(round_px(-0.5), 0);
        assert_eq!(round_px(-0.6), -1);
        assert_eq!(round_px(-49.5), -49);
    }

    #[test]
    fn test_point_offset() {
        let p = Point::new(10, -4).offset(Point::new(-3, 7));
        assert_eq!(p, Point::new(7, 3));
    }
}
