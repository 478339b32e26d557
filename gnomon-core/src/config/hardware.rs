//! Device descriptor
//!
//! Describes the display and the graphics capabilities the host offers.
//! Capability discovery itself happens outside this crate; the descriptor is
//! trusted as given.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::{Point, ShapeKind};

/// Physical display outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DisplayShape {
    #[default]
    Round,
    /// Rectangular panel; the face is clipped to the inscribed circle
    Rectangular,
}

/// Render strategy family for a device class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StrategyKind {
    /// Off-screen framebuffer plus direct second-hand drawing
    Buffered,
    /// Compositor layers
    Layered,
    /// Full repaint on every update
    Direct,
}

impl StrategyKind {
    /// Pick the strategy for a device
    ///
    /// Layers win when available. A framebuffer is only worth its memory on
    /// devices that also get a per-second low-power budget; everything else
    /// repaints directly.
    pub fn select(device: &DeviceDescriptor) -> Self {
        if device.has_layers {
            StrategyKind::Layered
        } else if device.has_offscreen_buffer && device.has_partial_update_budget {
            StrategyKind::Buffered
        } else {
            StrategyKind::Direct
        }
    }
}

/// Display and capability descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeviceDescriptor {
    /// Screen width in pixels
    pub width: u32,
    /// Screen height in pixels
    pub height: u32,
    pub shape: DisplayShape,
    /// Host offers a compositing layer API
    pub has_layers: bool,
    /// Host offers off-screen bitmaps
    pub has_offscreen_buffer: bool,
    /// Host allows per-second partial updates in low power
    pub has_partial_update_budget: bool,
    /// Enough free memory for the 60-entry second-hand table
    pub spare_memory: bool,
}

impl DeviceDescriptor {
    /// Round display with no special capabilities
    pub const fn round(diameter: u32) -> Self {
        Self {
            width: diameter,
            height: diameter,
            shape: DisplayShape::Round,
            has_layers: false,
            has_offscreen_buffer: false,
            has_partial_update_budget: false,
            spare_memory: false,
        }
    }

    /// Rectangular display with no special capabilities
    pub const fn rectangular(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            shape: DisplayShape::Rectangular,
            has_layers: false,
            has_offscreen_buffer: false,
            has_partial_update_budget: false,
            spare_memory: false,
        }
    }

    /// Radius of the inscribed face circle
    pub fn face_radius(&self) -> i32 {
        (self.width.min(self.height) / 2) as i32
    }

    /// Centre of the face
    pub fn center(&self) -> Point {
        Point::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    /// Second-hand shape for this display
    pub fn second_hand_kind(&self) -> ShapeKind {
        match self.shape {
            DisplayShape::Round => ShapeKind::SecondHand,
            DisplayShape::Rectangular => ShapeKind::SecondHandShort,
        }
    }

    /// Strategy for this device
    pub fn strategy(&self) -> StrategyKind {
        StrategyKind::select(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_selection() {
        let mut device = DeviceDescriptor::round(240);
        assert_eq!(device.strategy(), StrategyKind::Direct);

        device.has_offscreen_buffer = true;
        assert_eq!(device.strategy(), StrategyKind::Direct);

        device.has_partial_update_budget = true;
        assert_eq!(device.strategy(), StrategyKind::Buffered);

        device.has_layers = true;
        assert_eq!(device.strategy(), StrategyKind::Layered);
    }

    #[test]
    fn test_rectangular_face_is_inscribed() {
        let device = DeviceDescriptor::rectangular(240, 280);
        assert_eq!(device.face_radius(), 120);
        assert_eq!(device.center(), Point::new(120, 140));
        assert_eq!(device.second_hand_kind(), ShapeKind::SecondHandShort);
    }

    #[test]
    fn test_round_face() {
        let device = DeviceDescriptor::round(300);
        assert_eq!(device.face_radius(), 150);
        assert_eq!(device.center(), Point::new(150, 150));
        assert_eq!(device.second_hand_kind(), ShapeKind::SecondHand);
    }
}
