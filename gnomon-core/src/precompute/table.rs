//! Second-hand precomputer

use crate::geometry::{GeometryTable, HandAngle, Point, Quad, Rotator, ShapeGeometryPx, ShapeKind};
use crate::region::{ClipRect, DirtyRegionCalculator};

/// Positions of the second hand per minute
pub const SECONDS_PER_MINUTE: usize = 60;

/// Everything needed to draw and invalidate the second hand at one second
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RenderRecord {
    /// Centre of the tip circle
    pub circle_center: Point,
    /// Rotated polygon corners (tail-left, tip-left, tip-right, tail-right)
    pub corners: Quad,
    /// Clip rectangle covering polygon and circle plus margin
    pub clip: ClipRect,
}

/// Evaluates second-hand records for one layout
#[derive(Debug, Clone)]
pub struct SecondHandPrecomputer<'a> {
    rotator: &'a Rotator,
    shape: ShapeGeometryPx,
    calculator: DirtyRegionCalculator,
}

impl<'a> SecondHandPrecomputer<'a> {
    /// Create a precomputer for a second-hand kind
    pub fn new(rotator: &'a Rotator, geometry: &GeometryTable, kind: ShapeKind) -> Self {
        let shape = *geometry.get(kind);
        Self {
            rotator,
            shape,
            calculator: DirtyRegionCalculator::for_second_hand(
                &shape,
                geometry.second_circle_radius(),
            ),
        }
    }

    /// Region calculator in use
    pub fn calculator(&self) -> &DirtyRegionCalculator {
        &self.calculator
    }

    /// Record for a single second (0-59), computed on demand
    #[inline]
    pub fn record(&self, second: u8) -> RenderRecord {
        let angle = HandAngle::second(second);
        let corners = self.rotator.rotate(&self.shape, angle);
        let circle_center = self.rotator.rotate_point(self.shape.tip_anchor(), angle);
        RenderRecord {
            circle_center,
            corners,
            clip: self.calculator.hand_clip(&corners, circle_center),
        }
    }

    /// Records for every second of the minute
    pub fn precompute(&self) -> SecondHandTable {
        SecondHandTable {
            records: core::array::from_fn(|s| self.record(s as u8)),
        }
    }
}

/// Cached records for all 60 seconds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecondHandTable {
    records: [RenderRecord; SECONDS_PER_MINUTE],
}

impl SecondHandTable {
    /// Record for a second (0-59)
    #[inline]
    pub fn get(&self, second: u8) -> &RenderRecord {
        &self.records[second as usize]
    }

    /// Iterate over all records in second order
    pub fn iter(&self) -> impl Iterator<Item = &RenderRecord> {
        self.records.iter()
    }
}
