//! Rotation of shape corners about the face centre
//!
//! Angles are measured clockwise from 12 o'clock. Screen y grows downward,
//! so a clockwise rotation of offset `(x, y)` by `a` is
//! `(x cos a - y sin a, x sin a + y cos a)`.

use core::f32::consts::TAU;

use super::shape::ShapeGeometryPx;
use super::sine::SineTable;
use super::{round_px, Point};

/// Four rotated, translated corners in screen space
pub type Quad = [Point; 4];

/// Hand angle
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HandAngle {
    /// Arbitrary angle in radians, evaluated with `sinf`/`cosf`
    Radians(f32),
    /// Sixtieth-of-a-turn index (0-59), resolved through the sine table
    Tick(u8),
}

impl HandAngle {
    /// Hour hand angle, advancing continuously with the minute
    pub fn hour(hour: u8, minute: u8) -> Self {
        let minutes_into_turn = (hour % 12) as f32 * 60.0 + minute as f32;
        HandAngle::Radians(minutes_into_turn * TAU / 720.0)
    }

    /// Minute hand angle (steps once per minute)
    pub const fn minute(minute: u8) -> Self {
        HandAngle::Tick(minute)
    }

    /// Second hand angle
    pub const fn second(second: u8) -> Self {
        HandAngle::Tick(second)
    }
}

/// Rotates shape geometry about a fixed face centre
///
/// Pure: identical inputs always give identical integer output, which is what
/// makes caching per-second records sound.
#[derive(Debug, Clone)]
pub struct Rotator {
    table: SineTable,
    center: Point,
}

impl Rotator {
    /// Create a rotator for the given face centre
    pub fn new(center: Point) -> Self {
        Self {
            table: SineTable::new(),
            center,
        }
    }

    /// Face centre
    pub fn center(&self) -> Point {
        self.center
    }

    /// The shared sine table
    pub fn table(&self) -> &SineTable {
        &self.table
    }

    /// Resolve an angle to `(sin, cos)`
    #[inline]
    pub fn sin_cos(&self, angle: HandAngle) -> (f32, f32) {
        match angle {
            HandAngle::Radians(a) => (libm::sinf(a), libm::cosf(a)),
            HandAngle::Tick(i) => (self.table.sin(i), self.table.cos(i)),
        }
    }

    /// Rotate a single centre-relative offset and translate it to screen space
    pub fn rotate_point(&self, offset: Point, angle: HandAngle) -> Point {
        let (sin, cos) = self.sin_cos(angle);
        rotate_one(offset, sin, cos, self.center)
    }

    /// Rotate all four corners of a shape
    pub fn rotate(&self, shape: &ShapeGeometryPx, angle: HandAngle) -> Quad {
        let (sin, cos) = self.sin_cos(angle);

        #[cfg(feature = "unrolled-rotation")]
        {
            rotate_corners_unrolled(&shape.corners, sin, cos, self.center)
        }

        #[cfg(not(feature = "unrolled-rotation"))]
        {
            rotate_corners(&shape.corners, sin, cos, self.center)
        }
    }
}

#[inline]
fn rotate_one(offset: Point, sin: f32, cos: f32, center: Point) -> Point {
    let x = offset.x as f32;
    let y = offset.y as f32;
    Point::new(
        round_px(center.x as f32 + x * cos - y * sin),
        round_px(center.y as f32 + x * sin + y * cos),
    )
}

#[cfg_attr(feature = "unrolled-rotation", allow(dead_code))]
fn rotate_corners(corners: &[Point; 4], sin: f32, cos: f32, center: Point) -> Quad {
    let mut out = [Point::default(); 4];
    for (dst, src) in out.iter_mut().zip(corners.iter()) {
        *dst = rotate_one(*src, sin, cos, center);
    }
    out
}

#[cfg(any(feature = "unrolled-rotation", test))]
fn rotate_corners_unrolled(corners: &[Point; 4], sin: f32, cos: f32, center: Point) -> Quad {
    let cx = center.x as f32;
    let cy = center.y as f32;

    let (x0, y0) = (corners[0].x as f32, corners[0].y as f32);
    let (x1, y1) = (corners[1].x as f32, corners[1].y as f32);
    let (x2, y2) = (corners[2].x as f32, corners[2].y as f32);
    let (x3, y3) = (corners[3].x as f32, corners[3].y as f32);

    [
        Point::new(
            libm::floorf(cx + x0 * cos - y0 * sin + 0.5) as i32,
            libm::floorf(cy + x0 * sin + y0 * cos + 0.5) as i32,
        ),
        Point::new(
            libm::floorf(cx + x1 * cos - y1 * sin + 0.5) as i32,
            libm::floorf(cy + x1 * sin + y1 * cos + 0.5) as i32,
        ),
        Point::new(
            libm::floorf(cx + x2 * cos - y2 * sin + 0.5) as i32,
            libm::floorf(cy + x2 * sin + y2 * cos + 0.5) as i32,
        ),
        Point::new(
            libm::floorf(cx + x3 * cos - y3 * sin + 0.5) as i32,
            libm::floorf(cy + x3 * sin + y3 * cos + 0.5) as i32,
        ),
    ]
}
