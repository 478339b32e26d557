//! Buffered-bitmap strategy
//!
//! One off-screen framebuffer holds everything except the second hand.
//! The hand is drawn straight onto the display, clipped to its rectangle, so
//! blitting the buffer over the previous rectangle always erases it.

use embedded_graphics::draw_target::DrawTargetExt;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use gnomon_core::power::SecondHandAction;
use gnomon_core::precompute::RenderRecord;
use gnomon_core::region::{ClipRect, DirtyRegionCalculator};

use super::Frame;
use crate::backend::{infallible, to_rectangle};
use crate::painter::{paint_background, paint_hour_minute, paint_second};
use crate::surface::Framebuffer;

/// Buffered-bitmap strategy state
#[derive(Debug, Clone)]
pub struct BufferedStrategy {
    buffer: Framebuffer,
    /// Clip of the second hand currently on the display
    on_screen: Option<ClipRect>,
}

impl BufferedStrategy {
    /// Allocate the off-screen buffer
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            buffer: Framebuffer::new(width, height, Rgb565::BLACK),
            on_screen: None,
        }
    }

    /// Forget the hand on screen; the next full redraw covers it
    pub fn reset(&mut self) {
        self.on_screen = None;
    }

    /// Render the static face into the buffer, blit it, then add the hand
    pub fn full<D>(&mut self, frame: &Frame<'_>, display: &mut D) -> Result<Option<ClipRect>, D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let buffer = &mut self.buffer;
        infallible(paint_background(buffer, frame.layout, &frame.palette, frame.ctx));
        infallible(paint_hour_minute(buffer, frame.layout, &frame.palette, &frame.ctx.time));

        self.buffer.blit_all(display)?;
        self.on_screen = None;

        if let Some(record) = frame.second {
            self.draw_second(frame, &record, display)?;
        }
        Ok(Some(frame.layout.screen()))
    }

    /// Erase the previous hand from the buffer, then draw the new one
    pub fn partial<D>(
        &mut self,
        frame: &Frame<'_>,
        action: SecondHandAction,
        display: &mut D,
    ) -> Result<Option<ClipRect>, D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        if action == SecondHandAction::Skip {
            return Ok(None);
        }

        let previous = self.on_screen.take();
        if let Some(area) = previous {
            self.buffer.blit(area, display)?;
        }

        let next = match frame.second {
            Some(record) if action.draws() => {
                self.draw_second(frame, &record, display)?;
                Some(record.clip)
            }
            _ => None,
        };
        Ok(DirtyRegionCalculator::transition(previous, next))
    }

    fn draw_second<D>(
        &mut self,
        frame: &Frame<'_>,
        record: &RenderRecord,
        display: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let mut clipped = display.clipped(&to_rectangle(record.clip));
        paint_second(&mut clipped, frame.layout, record, frame.palette.second)?;
        self.on_screen = Some(record.clip);
        Ok(())
    }
}
