//! Direct full-redraw strategy
//!
//! No buffer and no layers: every update repaints the whole screen. Only
//! used on devices without a per-second low-power budget, so partial ticks
//! draw nothing.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::DrawTarget;
use gnomon_core::power::SecondHandAction;
use gnomon_core::region::ClipRect;

use super::Frame;
use crate::painter::paint_face;

/// Direct strategy (stateless)
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectStrategy;

impl DirectStrategy {
    pub const fn new() -> Self {
        Self
    }

    /// Repaint everything on the display
    pub fn full<D>(&mut self, frame: &Frame<'_>, display: &mut D) -> Result<Option<ClipRect>, D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        paint_face(
            display,
            frame.layout,
            &frame.palette,
            frame.ctx,
            frame.second.as_ref(),
            frame.shadow,
        )?;
        Ok(Some(frame.layout.screen()))
    }

    /// Nothing to do between full updates
    pub fn partial<D>(
        &mut self,
        _frame: &Frame<'_>,
        _action: SecondHandAction,
        _display: &mut D,
    ) -> Result<Option<ClipRect>, D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        Ok(None)
    }
}
