//! Dirty-region calculation for the second hand
//!
//! The second hand is a thin trapezoid with a filled circle centred on its
//! tip edge. Its clip rectangle is the bounding box of the tail corners and
//! the circle's bounding square, grown by [`CLIP_MARGIN`] on every side.
//!
//! Skipping the tip corners (1 and 2) halves the per-tick work on the
//! slowest devices, but it is only sound while those corners sit inside the
//! circle's square. [`BoundsMode::for_second_hand`] checks that once per
//! layout and falls back to all four corners when a shape breaks it.

use super::rect::{Bounds, ClipRect};
use crate::geometry::{Point, Quad, ShapeGeometryPx};

/// Margin added around every clip rectangle (pixels)
pub const CLIP_MARGIN: i32 = 2;

/// Which corners feed the bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BoundsMode {
    /// Tail corners 0 and 3 plus the tip circle; tip corners are interior
    TailCornersAndCircle,
    /// All four corners plus the tip circle
    AllCorners,
}

impl BoundsMode {
    /// Pick the cheapest mode that still covers the given hand
    ///
    /// After rotation each tip corner lies `tip_half_width` from the circle
    /// centre; both are rounded independently, which can add one more pixel
    /// per axis.
    pub fn for_second_hand(shape: &ShapeGeometryPx, circle_radius: i32) -> Self {
        if shape.tip_half_width() + 1 <= circle_radius {
            BoundsMode::TailCornersAndCircle
        } else {
            BoundsMode::AllCorners
        }
    }
}

/// Derives clip rectangles for one second-hand shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirtyRegionCalculator {
    mode: BoundsMode,
    circle_radius: i32,
}

impl DirtyRegionCalculator {
    /// Create a calculator with an explicit bounds mode
    pub const fn new(mode: BoundsMode, circle_radius: i32) -> Self {
        Self {
            mode,
            circle_radius,
        }
    }

    /// Create a calculator for a second-hand shape, checking the tip assumption
    pub fn for_second_hand(shape: &ShapeGeometryPx, circle_radius: i32) -> Self {
        Self::new(BoundsMode::for_second_hand(shape, circle_radius), circle_radius)
    }

    /// Active bounds mode
    pub fn mode(&self) -> BoundsMode {
        self.mode
    }

    /// Radius of the tip circle
    pub fn circle_radius(&self) -> i32 {
        self.circle_radius
    }

    /// Clip rectangle for a rotated hand and its tip circle
    #[inline]
    pub fn hand_clip(&self, corners: &Quad, circle_center: Point) -> ClipRect {
        let mut bounds = Bounds::at(corners[0]);
        bounds.include(corners[3]);
        if self.mode == BoundsMode::AllCorners {
            bounds.include(corners[1]);
            bounds.include(corners[2]);
        }
        bounds.include_circle(circle_center, self.circle_radius);
        bounds.to_rect().expand(CLIP_MARGIN)
    }

    /// Region to repaint when the hand moves from `prev` to `next`
    ///
    /// Either side may be absent (hand not on screen before, or erased now).
    pub fn transition(prev: Option<ClipRect>, next: Option<ClipRect>) -> Option<ClipRect> {
        ClipRect::merge(prev, next)
    }
}
