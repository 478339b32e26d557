//! Layered strategy
//!
//! Four surfaces in fixed order: background (face, ticks, date,
//! indicators), second-hand shadow, hour/minute hands, second hand. A tick
//! only touches the second-hand layer and its shadow, then composites the
//! region that changed.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use gnomon_core::power::SecondHandAction;
use gnomon_core::region::{ClipRect, DirtyRegionCalculator};

use super::Frame;
use crate::backend::infallible;
use crate::painter::{
    paint_background, paint_hour_minute, paint_indicators, paint_second, paint_second_shadow,
    shadow_clip,
};
use crate::surface::LayerStack;

/// Indicator readout refresh period on the partial path (seconds)
pub const INDICATOR_REFRESH_SECONDS: u8 = 5;

/// Layered strategy state
#[derive(Debug, Clone)]
pub struct LayeredStrategy {
    stack: LayerStack,
    /// Clip of the hand on the second-hand layer
    second_rect: Option<ClipRect>,
    /// Clip of the shadow on the shadow layer
    shadow_rect: Option<ClipRect>,
}

impl LayeredStrategy {
    /// Allocate the layers
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            stack: LayerStack::new(width, height),
            second_rect: None,
            shadow_rect: None,
        }
    }

    /// Drop the second hand and its shadow from their layers
    pub fn reset(&mut self) {
        self.stack.shadow.erase_all();
        self.stack.seconds.erase_all();
        self.second_rect = None;
        self.shadow_rect = None;
    }

    /// Redraw every layer and composite the whole screen
    pub fn full<D>(&mut self, frame: &Frame<'_>, display: &mut D) -> Result<Option<ClipRect>, D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let stack = &mut self.stack;
        infallible(paint_background(
            &mut stack.background,
            frame.layout,
            &frame.palette,
            frame.ctx,
        ));

        stack.hands.erase_all();
        infallible(paint_hour_minute(
            &mut stack.hands,
            frame.layout,
            &frame.palette,
            &frame.ctx.time,
        ));

        self.reset();
        self.draw_second(frame);

        let screen = frame.layout.screen();
        self.stack.composite(screen, display)?;
        Ok(Some(screen))
    }

    /// Move the second hand and refresh the indicators when due
    pub fn partial<D>(
        &mut self,
        frame: &Frame<'_>,
        action: SecondHandAction,
        display: &mut D,
    ) -> Result<Option<ClipRect>, D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let mut dirty = None;

        if frame.ctx.time.second % INDICATOR_REFRESH_SECONDS == 0 {
            infallible(paint_indicators(
                &mut self.stack.background,
                frame.layout,
                &frame.palette,
                frame.ctx.pulse_rate,
            ));
            dirty = Some(frame.layout.indicator_area());
        }

        if action != SecondHandAction::Skip {
            let second = self.second_rect.take();
            if let Some(area) = second {
                self.stack.seconds.erase(area);
            }
            let shadow = self.shadow_rect.take();
            if let Some(area) = shadow {
                self.stack.shadow.erase(area);
            }

            let drawn = if action.draws() {
                self.draw_second(frame)
            } else {
                None
            };
            let previous = ClipRect::merge(second, shadow);
            dirty = ClipRect::merge(dirty, DirtyRegionCalculator::transition(previous, drawn));
        }

        if let Some(area) = dirty {
            self.stack.composite(area, display)?;
        }
        Ok(dirty)
    }

    /// Draw hand and shadow into their layers; returns the covered region
    fn draw_second(&mut self, frame: &Frame<'_>) -> Option<ClipRect> {
        let record = frame.second?;
        let mut covered = record.clip;

        if let Some(offset) = frame.shadow {
            infallible(paint_second_shadow(
                &mut self.stack.shadow,
                frame.layout,
                &record,
                offset,
                frame.palette.shadow,
            ));
            let area = shadow_clip(&record, offset);
            self.shadow_rect = Some(area);
            covered = covered.union(&area);
        }

        infallible(paint_second(
            &mut self.stack.seconds,
            frame.layout,
            &record,
            frame.palette.second,
        ));
        self.second_rect = Some(record.clip);
        Some(covered)
    }
}
