//! Clip rectangle types

use crate::geometry::Point;

/// Axis-aligned rectangle in screen pixels
///
/// `x`/`y` is the top-left pixel; the rectangle covers `width` columns and
/// `height` rows. Coordinates may lie off-screen; clamping happens only when
/// pixels are actually transferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClipRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl ClipRect {
    /// Create a new rectangle
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Full-screen rectangle
    pub const fn screen(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Rectangle spanning two inclusive corners
    pub fn from_inclusive(min: Point, max: Point) -> Self {
        Self {
            x: min.x,
            y: min.y,
            width: (max.x - min.x + 1).max(0) as u32,
            height: (max.y - min.y + 1).max(0) as u32,
        }
    }

    /// One past the right-most column
    pub const fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    /// One past the bottom-most row
    pub const fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    /// Check if the rectangle covers no pixels
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of pixels covered
    pub const fn area(&self) -> u32 {
        self.width * self.height
    }

    /// Check if a pixel lies inside
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Check if another rectangle lies entirely inside
    pub fn contains_rect(&self, other: &ClipRect) -> bool {
        other.is_empty()
            || (other.x >= self.x
                && other.y >= self.y
                && other.right() <= self.right()
                && other.bottom() <= self.bottom())
    }

    /// Grow by `margin` pixels on every side
    pub fn expand(&self, margin: i32) -> Self {
        Self {
            x: self.x - margin,
            y: self.y - margin,
            width: (self.width as i32 + 2 * margin).max(0) as u32,
            height: (self.height as i32 + 2 * margin).max(0) as u32,
        }
    }

    /// Move by an offset
    pub fn translate(&self, by: Point) -> Self {
        Self {
            x: self.x + by.x,
            y: self.y + by.y,
            ..*self
        }
    }

    /// Smallest rectangle covering both
    pub fn union(&self, other: &ClipRect) -> Self {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Self::new(x, y, (right - x) as u32, (bottom - y) as u32)
    }

    /// Overlapping part, or `None` if disjoint
    pub fn intersection(&self, other: &ClipRect) -> Option<Self> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right <= x || bottom <= y {
            None
        } else {
            Some(Self::new(x, y, (right - x) as u32, (bottom - y) as u32))
        }
    }

    /// Clamp to a `width` x `height` screen
    pub fn clamp_to_screen(&self, width: u32, height: u32) -> Option<Self> {
        self.intersection(&Self::screen(width, height))
    }

    /// Union of two optional rectangles
    pub fn merge(a: Option<ClipRect>, b: Option<ClipRect>) -> Option<ClipRect> {
        match (a, b) {
            (Some(a), Some(b)) => Some(a.union(&b)),
            (a, None) => a,
            (None, b) => b,
        }
    }
}

/// Running inclusive bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    min: Point,
    max: Point,
}

impl Bounds {
    /// Start a box around a single point
    pub const fn at(p: Point) -> Self {
        Self { min: p, max: p }
    }

    /// Grow to include a point
    #[inline]
    pub fn include(&mut self, p: Point) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// Grow to include the square around a circle
    #[inline]
    pub fn include_circle(&mut self, center: Point, radius: i32) {
        self.include(Point::new(center.x - radius, center.y - radius));
        self.include(Point::new(center.x + radius, center.y + radius));
    }

    /// Convert to a clip rectangle
    pub fn to_rect(&self) -> ClipRect {
        ClipRect::from_inclusive(self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_inclusive() {
        let r = ClipRect::from_inclusive(Point::new(2, 3), Point::new(5, 3));
        assert_eq!(r, ClipRect::new(2, 3, 4, 1));
        assert!(r.contains(Point::new(5, 3)));
        assert!(!r.contains(Point::new(6, 3)));
    }

    #[test]
    fn test_expand() {
        let r = ClipRect::new(10, 10, 4, 4).expand(2);
        assert_eq!(r, ClipRect::new(8, 8, 8, 8));
    }

    #[test]
    fn test_union_and_empty() {
        let a = ClipRect::new(0, 0, 2, 2);
        let b = ClipRect::new(5, 6, 1, 1);
        assert_eq!(a.union(&b), ClipRect::new(0, 0, 6, 7));
        assert_eq!(a.union(&ClipRect::default()), a);
        assert_eq!(ClipRect::default().union(&b), b);
    }

    #[test]
    fn test_intersection_and_clamp() {
        let r = ClipRect::new(-3, -3, 10, 10);
        assert_eq!(r.clamp_to_screen(100, 100), Some(ClipRect::new(0, 0, 7, 7)));

        let off = ClipRect::new(200, 200, 5, 5);
        assert_eq!(off.clamp_to_screen(100, 100), None);
    }

    #[test]
    fn test_contains_rect() {
        let outer = ClipRect::new(0, 0, 10, 10);
        assert!(outer.contains_rect(&ClipRect::new(2, 2, 8, 8)));
        assert!(!outer.contains_rect(&ClipRect::new(2, 2, 9, 8)));
        assert!(outer.contains_rect(&ClipRect::default()));
    }

    #[test]
    fn test_merge() {
        let a = ClipRect::new(0, 0, 1, 1);
        assert_eq!(ClipRect::merge(Some(a), None), Some(a));
        assert_eq!(ClipRect::merge(None, None), None);
        assert_eq!(
            ClipRect::merge(Some(a), Some(ClipRect::new(3, 0, 1, 1))),
            Some(ClipRect::new(0, 0, 4, 1))
        );
    }

    #[test]
    fn test_bounds_circle() {
        let mut b = Bounds::at(Point::new(10, 10));
        b.include_circle(Point::new(20, 5), 3);
        assert_eq!(b.to_rect(), ClipRect::from_inclusive(Point::new(10, 2), Point::new(23, 10)));
    }
}
