//! Face layout
//!
//! Built once per layout event: the geometry table, the rotator and, on
//! devices with spare memory, the 60 cached second-hand records.

use alloc::boxed::Box;

use gnomon_core::config::DeviceDescriptor;
use gnomon_core::geometry::{round_px, GeometryTable, Point, Rotator, ShapeKind};
use gnomon_core::precompute::{RenderRecord, SecondHandPrecomputer, SecondHandTable};
use gnomon_core::region::{BoundsMode, ClipRect};

/// Characters reserved for the indicator readout
pub const INDICATOR_CHARS: u32 = 3;

/// Indicator box padding around the text (pixels per side)
const INDICATOR_PADDING: u32 = 2;

/// Glyph size of the face font
pub(crate) const GLYPH_WIDTH: u32 = 6;
pub(crate) const GLYPH_HEIGHT: u32 = 10;

/// Where second-hand records come from
#[derive(Debug, Clone)]
enum SecondHandRecords {
    /// Precomputed for every second
    Cached(Box<SecondHandTable>),
    /// Recomputed on every tick
    OnDemand,
}

/// Geometry for one screen
#[derive(Debug, Clone)]
pub struct FaceLayout {
    width: u32,
    height: u32,
    radius: i32,
    geometry: GeometryTable,
    rotator: Rotator,
    second_kind: ShapeKind,
    records: SecondHandRecords,
}

impl FaceLayout {
    /// Lay out the face for a device
    pub fn new(device: &DeviceDescriptor) -> Self {
        let radius = device.face_radius();
        let geometry = GeometryTable::new(radius);
        let rotator = Rotator::new(device.center());
        let second_kind = device.second_hand_kind();

        let records = if device.spare_memory {
            let table = SecondHandPrecomputer::new(&rotator, &geometry, second_kind).precompute();
            SecondHandRecords::Cached(Box::new(table))
        } else {
            SecondHandRecords::OnDemand
        };

        Self {
            width: device.width,
            height: device.height,
            radius,
            geometry,
            rotator,
            second_kind,
            records,
        }
    }

    /// Screen width
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Screen height
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The whole screen
    pub fn screen(&self) -> ClipRect {
        ClipRect::screen(self.width, self.height)
    }

    /// Face radius
    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// Face centre
    pub fn center(&self) -> Point {
        self.rotator.center()
    }

    pub fn geometry(&self) -> &GeometryTable {
        &self.geometry
    }

    pub fn rotator(&self) -> &Rotator {
        &self.rotator
    }

    /// Second-hand shape in use
    pub fn second_kind(&self) -> ShapeKind {
        self.second_kind
    }

    /// Check if the 60 records are cached
    pub fn is_cached(&self) -> bool {
        matches!(self.records, SecondHandRecords::Cached(_))
    }

    /// Bounds mode the second-hand clip uses
    pub fn bounds_mode(&self) -> BoundsMode {
        self.precomputer().calculator().mode()
    }

    /// Render record for a second (0-59)
    pub fn second_record(&self, second: u8) -> RenderRecord {
        match &self.records {
            SecondHandRecords::Cached(table) => *table.get(second),
            SecondHandRecords::OnDemand => self.precomputer().record(second),
        }
    }

    /// Box reserved for the pulse-rate readout, below the centre
    pub fn indicator_area(&self) -> ClipRect {
        let width = INDICATOR_CHARS * GLYPH_WIDTH + 2 * INDICATOR_PADDING;
        let height = GLYPH_HEIGHT + 2 * INDICATOR_PADDING;
        let anchor = self.indicator_anchor();
        ClipRect::new(
            anchor.x - (width / 2) as i32,
            anchor.y - (height / 2) as i32,
            width,
            height,
        )
    }

    /// Centre of the indicator readout
    pub fn indicator_anchor(&self) -> Point {
        let c = self.center();
        Point::new(c.x, c.y + round_px(self.radius as f32 * 0.45))
    }

    /// Centre of the date text, towards 3 o'clock
    pub fn date_anchor(&self) -> Point {
        let c = self.center();
        Point::new(c.x + round_px(self.radius as f32 * 0.6), c.y)
    }

    fn precomputer(&self) -> SecondHandPrecomputer<'_> {
        SecondHandPrecomputer::new(&self.rotator, &self.geometry, self.second_kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(spare_memory: bool) -> DeviceDescriptor {
        DeviceDescriptor {
            spare_memory,
            ..DeviceDescriptor::round(240)
        }
    }

    #[test]
    fn test_cached_and_on_demand_agree() {
        let cached = FaceLayout::new(&device(true));
        let on_demand = FaceLayout::new(&device(false));
        assert!(cached.is_cached());
        assert!(!on_demand.is_cached());
        for s in 0..60u8 {
            assert_eq!(cached.second_record(s), on_demand.second_record(s));
        }
    }

    #[test]
    fn test_rectangular_uses_short_hand() {
        let layout = FaceLayout::new(&DeviceDescriptor::rectangular(240, 280));
        assert_eq!(layout.second_kind(), ShapeKind::SecondHandShort);
        assert_eq!(layout.radius(), 120);
        assert_eq!(layout.center(), Point::new(120, 140));
        assert_eq!(layout.bounds_mode(), BoundsMode::TailCornersAndCircle);
    }

    #[test]
    fn test_indicator_area_inside_face() {
        let layout = FaceLayout::new(&device(false));
        let area = layout.indicator_area();
        assert!(layout.screen().contains_rect(&area));
        assert!(area.contains(layout.indicator_anchor()));
        // Clear of the tick ring
        let tick_ring = layout.geometry().get(ShapeKind::BigTick).tail_offset;
        assert!(area.bottom() < layout.center().y + tick_ring);
    }
}
