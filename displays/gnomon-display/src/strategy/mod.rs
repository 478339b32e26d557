//! Render strategies
//!
//! Exactly one strategy is active per device, chosen once from the device
//! descriptor. The per-tick path matches on the enum; there is no dynamic
//! dispatch.

pub mod buffered;
pub mod direct;
pub mod layered;

pub use buffered::BufferedStrategy;
pub use direct::DirectStrategy;
pub use layered::{LayeredStrategy, INDICATOR_REFRESH_SECONDS};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::DrawTarget;
use gnomon_core::config::{DeviceDescriptor, StrategyKind};
use gnomon_core::power::SecondHandAction;
use gnomon_core::precompute::RenderRecord;
use gnomon_core::region::ClipRect;

use crate::context::RenderContext;
use crate::layout::FaceLayout;
use crate::palette::Palette;

/// Everything a strategy needs for one frame
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub layout: &'a FaceLayout,
    pub ctx: &'a RenderContext,
    pub palette: Palette,
    /// Second hand to show, `None` when hidden or erased
    pub second: Option<RenderRecord>,
    /// Shadow offset while the shadow effect is active
    pub shadow: Option<i32>,
}

/// Active render strategy
#[derive(Debug, Clone)]
pub enum RenderStrategy {
    Buffered(BufferedStrategy),
    Layered(LayeredStrategy),
    Direct(DirectStrategy),
}

impl RenderStrategy {
    /// Build the strategy for a device, allocating its surfaces
    pub fn for_device(device: &DeviceDescriptor) -> Self {
        match StrategyKind::select(device) {
            StrategyKind::Buffered => {
                RenderStrategy::Buffered(BufferedStrategy::new(device.width, device.height))
            }
            StrategyKind::Layered => {
                RenderStrategy::Layered(LayeredStrategy::new(device.width, device.height))
            }
            StrategyKind::Direct => RenderStrategy::Direct(DirectStrategy::new()),
        }
    }

    /// Strategy family
    pub fn kind(&self) -> StrategyKind {
        match self {
            RenderStrategy::Buffered(_) => StrategyKind::Buffered,
            RenderStrategy::Layered(_) => StrategyKind::Layered,
            RenderStrategy::Direct(_) => StrategyKind::Direct,
        }
    }

    /// Check if the second hand may be drawn in low power
    pub fn draws_second_in_low_power(&self) -> bool {
        !matches!(self, RenderStrategy::Direct(_))
    }

    /// Check if the strategy can show the hand shadow
    pub fn supports_shadow(&self) -> bool {
        !matches!(self, RenderStrategy::Buffered(_))
    }

    /// Forget what is on screen (after layout or show)
    pub fn reset(&mut self) {
        match self {
            RenderStrategy::Buffered(s) => s.reset(),
            RenderStrategy::Layered(s) => s.reset(),
            RenderStrategy::Direct(_) => {}
        }
    }

    /// Repaint the whole screen
    pub fn full<D>(&mut self, frame: &Frame<'_>, display: &mut D) -> Result<Option<ClipRect>, D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        match self {
            RenderStrategy::Buffered(s) => s.full(frame, display),
            RenderStrategy::Layered(s) => s.full(frame, display),
            RenderStrategy::Direct(s) => s.full(frame, display),
        }
    }

    /// Low-power tick; returns the region sent to the display
    pub fn partial<D>(
        &mut self,
        frame: &Frame<'_>,
        action: SecondHandAction,
        display: &mut D,
    ) -> Result<Option<ClipRect>, D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        match self {
            RenderStrategy::Buffered(s) => s.partial(frame, action, display),
            RenderStrategy::Layered(s) => s.partial(frame, action, display),
            RenderStrategy::Direct(s) => s.partial(frame, action, display),
        }
    }
}
