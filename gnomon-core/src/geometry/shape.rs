//! Shape table
//!
//! Converts declarative hand/tick descriptors into device-pixel trapezoids.
//! Runs once per layout; everything downstream reads the result.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{round_px, Point};

/// A value of 50% spans one full face radius
pub const PERCENT_DENOMINATOR: f32 = 50.0;

/// Number of shape kinds in the table
pub const SHAPE_COUNT: usize = 6;

/// Radius of the second hand's tip circle (percent of face radius)
pub const SECOND_TIP_CIRCLE_PERCENT: f32 = 2.2;

/// Declarative hand or tick-mark shape
///
/// All fields are percentages of the face radius using the 50-denominator
/// convention (see [`percent_to_px`]). `tail_offset` is the signed distance
/// from the centre to the tail edge; negative values put the tail behind the
/// pivot.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShapeSpec {
    /// Length from tail edge to tip edge
    pub height: f32,
    /// Width at the tail edge
    pub tail_width: f32,
    /// Width at the tip edge
    pub tip_width: f32,
    /// Signed distance from centre to the tail edge
    pub tail_offset: f32,
}

impl ShapeSpec {
    /// Create a new shape spec
    pub const fn new(height: f32, tail_width: f32, tip_width: f32, tail_offset: f32) -> Self {
        Self {
            height,
            tail_width,
            tip_width,
            tail_offset,
        }
    }
}

/// Shape kinds drawn on the face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ShapeKind {
    /// Hour marker (every fifth tick)
    BigTick,
    /// Minute marker
    SmallTick,
    HourHand,
    MinuteHand,
    SecondHand,
    /// Second hand with a shorter tail for tight layouts
    SecondHandShort,
}

impl ShapeKind {
    /// All kinds, in table order
    pub const ALL: [ShapeKind; SHAPE_COUNT] = [
        ShapeKind::BigTick,
        ShapeKind::SmallTick,
        ShapeKind::HourHand,
        ShapeKind::MinuteHand,
        ShapeKind::SecondHand,
        ShapeKind::SecondHandShort,
    ];

    /// Index into the geometry table
    pub const fn index(self) -> usize {
        match self {
            ShapeKind::BigTick => 0,
            ShapeKind::SmallTick => 1,
            ShapeKind::HourHand => 2,
            ShapeKind::MinuteHand => 3,
            ShapeKind::SecondHand => 4,
            ShapeKind::SecondHandShort => 5,
        }
    }

    /// Built-in shape for this kind
    pub const fn default_spec(self) -> ShapeSpec {
        match self {
            ShapeKind::BigTick => ShapeSpec::new(7.0, 2.0, 2.0, 41.0),
            ShapeKind::SmallTick => ShapeSpec::new(3.0, 1.0, 1.0, 45.0),
            ShapeKind::HourHand => ShapeSpec::new(30.0, 4.0, 2.4, -6.0),
            ShapeKind::MinuteHand => ShapeSpec::new(44.0, 3.2, 1.6, -6.0),
            ShapeKind::SecondHand => ShapeSpec::new(47.9, 1.4, 1.4, -16.5),
            ShapeKind::SecondHandShort => ShapeSpec::new(40.9, 1.4, 1.4, -9.5),
        }
    }

    /// Check if this is one of the second-hand variants
    pub const fn is_second_hand(self) -> bool {
        matches!(self, ShapeKind::SecondHand | ShapeKind::SecondHandShort)
    }
}

/// Default spec for every kind, in table order
pub const DEFAULT_SPECS: [ShapeSpec; SHAPE_COUNT] = [
    ShapeKind::BigTick.default_spec(),
    ShapeKind::SmallTick.default_spec(),
    ShapeKind::HourHand.default_spec(),
    ShapeKind::MinuteHand.default_spec(),
    ShapeKind::SecondHand.default_spec(),
    ShapeKind::SecondHandShort.default_spec(),
];

/// Convert a percent-of-radius value to signed pixels
///
/// `px = floor(percent * radius / 50 + 0.5)`
#[inline]
pub fn percent_to_px(percent: f32, radius: i32) -> i32 {
    round_px(percent * radius as f32 / PERCENT_DENOMINATOR)
}

/// A shape converted to device pixels
///
/// Corners are offsets from the face centre with the hand pointing at
/// 12 o'clock (screen y grows downward):
///
/// - 0: tail-left
/// - 1: tip-left
/// - 2: tip-right
/// - 3: tail-right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ShapeGeometryPx {
    pub height: i32,
    pub tail_width: i32,
    pub tip_width: i32,
    pub tail_offset: i32,
    pub corners: [Point; 4],
}

impl ShapeGeometryPx {
    /// Convert a spec for the given face radius
    pub fn from_spec(spec: &ShapeSpec, radius: i32) -> Self {
        let height = percent_to_px(spec.height, radius);
        let tail_width = percent_to_px(spec.tail_width, radius);
        let tip_width = percent_to_px(spec.tip_width, radius);
        let tail_offset = percent_to_px(spec.tail_offset, radius);

        let tail_half = half_width(tail_width);
        let tip_half = half_width(tip_width);
        let tail_y = -tail_offset;
        let tip_y = -(tail_offset + height);

        Self {
            height,
            tail_width,
            tip_width,
            tail_offset,
            corners: [
                Point::new(-tail_half, tail_y),
                Point::new(-tip_half, tip_y),
                Point::new(tip_half, tip_y),
                Point::new(tail_half, tail_y),
            ],
        }
    }

    /// Distance from the centre to the tip edge
    pub const fn tip_distance(&self) -> i32 {
        self.tail_offset + self.height
    }

    /// Offset of the tip-edge midpoint at 12 o'clock
    pub const fn tip_anchor(&self) -> Point {
        Point::new(0, -self.tip_distance())
    }

    /// Half of the tip width, as used for the tip corners
    pub const fn tip_half_width(&self) -> i32 {
        half_width(self.tip_width)
    }
}

/// Half width rounded up so a 1 px wide shape keeps a visible body
const fn half_width(width: i32) -> i32 {
    (width + 1) / 2
}

/// Per-layout table of pixel geometry for every shape kind
#[derive(Debug, Clone)]
pub struct GeometryTable {
    radius: i32,
    shapes: [ShapeGeometryPx; SHAPE_COUNT],
    second_circle_radius: i32,
}

impl GeometryTable {
    /// Build the table from the built-in specs
    pub fn new(radius: i32) -> Self {
        Self::with_specs(&DEFAULT_SPECS, radius)
    }

    /// Build the table from custom specs (indexed by [`ShapeKind::index`])
    pub fn with_specs(specs: &[ShapeSpec; SHAPE_COUNT], radius: i32) -> Self {
        Self {
            radius,
            shapes: core::array::from_fn(|i| ShapeGeometryPx::from_spec(&specs[i], radius)),
            second_circle_radius: percent_to_px(SECOND_TIP_CIRCLE_PERCENT, radius).max(1),
        }
    }

    /// Face radius this table was built for
    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// Pixel geometry for a shape kind
    pub fn get(&self, kind: ShapeKind) -> &ShapeGeometryPx {
        &self.shapes[kind.index()]
    }

    /// Radius of the second hand's tip circle
    pub fn second_circle_radius(&self) -> i32 {
        self.second_circle_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_to_px() {
        assert_eq!(percent_to_px(50.0, 150), 150);
        assert_eq!(percent_to_px(47.9, 150), 144);
        assert_eq!(percent_to_px(0.0, 150), 0);
        assert_eq!(percent_to_px(1.4, 150), 4);
    }

    #[test]
    fn test_second_hand_scenario_radius_150() {
        let table = GeometryTable::new(150);
        let hand = table.get(ShapeKind::SecondHand);

        assert_eq!(hand.height, 144);
        // -49.5 with the half-pixel bias; within a pixel of -50
        assert!((-50..=-49).contains(&hand.tail_offset));
        assert_eq!(hand.tail_width, 4);
        assert_eq!(hand.tip_width, 4);
    }

    #[test]
    fn test_corners_form_trapezoid() {
        let hand = ShapeGeometryPx::from_spec(&ShapeKind::HourHand.default_spec(), 150);

        let [tail_l, tip_l, tip_r, tail_r] = hand.corners;
        // Tail corners share a row, tip corners share a row
        assert_eq!(tail_l.y, tail_r.y);
        assert_eq!(tip_l.y, tip_r.y);
        // Tip is above the tail (12 o'clock)
        assert!(tip_l.y < tail_l.y);
        // Symmetric about the vertical axis
        assert_eq!(tail_l.x, -tail_r.x);
        assert_eq!(tip_l.x, -tip_r.x);
        // Hour hand narrows toward the tip
        assert!(tip_r.x < tail_r.x);
    }

    #[test]
    fn test_tail_behind_centre() {
        let hand = ShapeGeometryPx::from_spec(&ShapeKind::SecondHand.default_spec(), 150);
        // Negative tail offset: tail edge sits below the pivot
        assert!(hand.corners[0].y > 0);
        assert_eq!(hand.tip_distance(), hand.tail_offset + hand.height);
        assert_eq!(hand.tip_anchor().y, hand.corners[1].y);
    }

    #[test]
    fn test_ticks_near_rim() {
        let table = GeometryTable::new(120);
        for kind in [ShapeKind::BigTick, ShapeKind::SmallTick] {
            let tick = table.get(kind);
            assert!(tick.tail_offset > 0);
            assert!(tick.tip_distance() <= table.radius());
        }
    }

    #[test]
    fn test_thin_shape_keeps_body() {
        let spec = ShapeSpec::new(10.0, 0.2, 0.2, 0.0);
        let shape = ShapeGeometryPx::from_spec(&spec, 100);
        assert_eq!(shape.tail_width, 0);
        // A zero-width shape collapses to a line, never inverts
        assert!(shape.corners[0].x <= shape.corners[3].x);
    }

    #[test]
    fn test_radius_change_rescales() {
        let small = GeometryTable::new(100);
        let large = GeometryTable::new(200);
        let small_min = small.get(ShapeKind::MinuteHand).height;
        let large_min = large.get(ShapeKind::MinuteHand).height;
        assert!((large_min - 2 * small_min).abs() <= 1);
        assert!(large.second_circle_radius() > small.second_circle_radius());
    }

    #[test]
    fn test_kind_index_matches_table_order() {
        for (i, kind) in ShapeKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(DEFAULT_SPECS[i], kind.default_spec());
        }
    }
}
