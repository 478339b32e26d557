//! Watch face entry point
//!
//! The host lifecycle calls into [`WatchFace`]: layout and power edges as
//! they happen, `render` on every regular update and `render_partial` on
//! every low-power tick. All state is owned here and touched from the
//! render thread only.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::DrawTarget;
use gnomon_core::config::{DeviceDescriptor, FaceSettings, StrategyKind};
use gnomon_core::power::{PowerModeController, RedrawGuard, SecondHandAction};
use gnomon_core::region::ClipRect;

use crate::backend::RenderError;
use crate::context::RenderContext;
use crate::layout::FaceLayout;
use crate::palette::Palette;
use crate::strategy::{Frame, RenderStrategy};

/// What a tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameReport {
    /// The whole screen was repainted
    pub full_redraw: bool,
    /// What happened to the second hand
    pub second_hand: SecondHandAction,
    /// Region sent to the display
    pub dirty: Option<ClipRect>,
}

impl FrameReport {
    /// A tick that touched nothing
    pub const fn idle() -> Self {
        Self {
            full_redraw: false,
            second_hand: SecondHandAction::Skip,
            dirty: None,
        }
    }
}

/// Analog watch face
#[derive(Debug, Clone)]
pub struct WatchFace {
    device: DeviceDescriptor,
    layout: Option<FaceLayout>,
    strategy: RenderStrategy,
    power: PowerModeController,
    guard: RedrawGuard,
    /// Settings of the last full redraw
    drawn_settings: Option<FaceSettings>,
}

impl WatchFace {
    /// Create a face for a device; the strategy is fixed from here on
    pub fn new(device: DeviceDescriptor) -> Self {
        let strategy = RenderStrategy::for_device(&device);

        #[cfg(feature = "defmt")]
        defmt::info!(
            "Watch face {}x{} using {} strategy",
            device.width,
            device.height,
            strategy.kind()
        );

        Self {
            device,
            layout: None,
            strategy,
            power: PowerModeController::new(),
            guard: RedrawGuard::new(),
            drawn_settings: None,
        }
    }

    pub fn device(&self) -> &DeviceDescriptor {
        &self.device
    }

    /// Active strategy family
    pub fn strategy_kind(&self) -> StrategyKind {
        self.strategy.kind()
    }

    /// Active strategy
    pub fn strategy(&self) -> &RenderStrategy {
        &self.strategy
    }

    /// Power-mode state
    pub fn power(&self) -> &PowerModeController {
        &self.power
    }

    /// Current layout, once laid out
    pub fn layout(&self) -> Option<&FaceLayout> {
        self.layout.as_ref()
    }

    /// Host laid out the face: rebuild geometry and the second-hand table
    pub fn on_layout(&mut self) {
        let layout = FaceLayout::new(&self.device);

        #[cfg(feature = "defmt")]
        defmt::info!(
            "Layout: radius {} px, second-hand table {}",
            layout.radius(),
            if layout.is_cached() { "cached" } else { "on demand" }
        );

        self.layout = Some(layout);
        self.strategy.reset();
        self.guard.invalidate();
    }

    /// Face became visible
    pub fn on_show(&mut self) {
        self.strategy.reset();
        self.guard.invalidate();
    }

    pub fn on_enter_low_power(&mut self) {
        self.power.enter_low_power();
        self.guard.invalidate();

        #[cfg(feature = "defmt")]
        defmt::debug!("Entered low power: {}", self.power.state());
    }

    pub fn on_exit_low_power(&mut self) {
        self.power.exit_low_power();
        self.guard.invalidate();

        #[cfg(feature = "defmt")]
        defmt::debug!("Exited low power");
    }

    /// Host revoked per-second updates; never re-enabled
    pub fn on_power_budget_exceeded(&mut self) {
        if self.power.on_power_budget_exceeded() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Low-power budget exceeded, second hand disabled in low power");

            self.guard.invalidate();
        }
    }

    /// Regular update
    ///
    /// Awake, this repaints everything, except on layered devices where
    /// ticks within an already drawn minute only move the second hand. In
    /// low power it repaints once per minute and ignores repeated calls for
    /// the same minute.
    pub fn render<D>(
        &mut self,
        ctx: &RenderContext,
        display: &mut D,
    ) -> Result<FrameReport, RenderError<D::Error>>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        if self.layout.is_none() {
            return Err(RenderError::NotLaidOut);
        }

        let stale = self.needs_full_redraw(ctx);
        if !self.power.is_awake() && !stale {
            return Ok(FrameReport::idle());
        }
        if !stale && self.strategy.kind() == StrategyKind::Layered {
            return self.second_tick(ctx, SecondHandAction::Draw, display);
        }

        let action = if self
            .power
            .second_hand_visible(ctx.settings.hide_seconds, ctx.settings.color_mode)
        {
            SecondHandAction::Draw
        } else {
            SecondHandAction::Skip
        };
        self.full_redraw(ctx, action, display)
    }

    /// Low-power tick
    ///
    /// Consumes one tick of the second-hand countdown and moves, erases or
    /// leaves the hand accordingly. A new minute turns the tick into a full
    /// redraw.
    pub fn render_partial<D>(
        &mut self,
        ctx: &RenderContext,
        display: &mut D,
    ) -> Result<FrameReport, RenderError<D::Error>>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        if self.layout.is_none() {
            return Err(RenderError::NotLaidOut);
        }
        if self.power.is_awake() {
            return self.render(ctx, display);
        }

        let stale = self.needs_full_redraw(ctx);
        if !self.power.partial_updates_enabled() {
            return if stale {
                self.full_redraw(ctx, SecondHandAction::Skip, display)
            } else {
                Ok(FrameReport::idle())
            };
        }

        let action = self
            .power
            .low_power_tick(ctx.settings.hide_seconds, ctx.settings.color_mode);
        if stale {
            return self.full_redraw(ctx, action, display);
        }
        self.second_tick(ctx, action, display)
    }

    /// New minute, or settings changed since the last full redraw
    fn needs_full_redraw(&self, ctx: &RenderContext) -> bool {
        self.guard.needs_full_redraw(ctx.time.minute) || self.drawn_settings != Some(ctx.settings)
    }

    /// Move or erase the second hand only
    fn second_tick<D>(
        &mut self,
        ctx: &RenderContext,
        action: SecondHandAction,
        display: &mut D,
    ) -> Result<FrameReport, RenderError<D::Error>>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let layout = self.layout.as_ref().ok_or(RenderError::NotLaidOut)?;
        let frame = build_frame(layout, ctx, &self.power, &self.strategy, action.draws());
        let dirty = self.strategy.partial(&frame, action, display)?;

        let second_hand = if self.power.is_awake() || self.strategy.draws_second_in_low_power() {
            action
        } else {
            SecondHandAction::Skip
        };
        Ok(FrameReport {
            full_redraw: false,
            second_hand,
            dirty,
        })
    }

    fn full_redraw<D>(
        &mut self,
        ctx: &RenderContext,
        action: SecondHandAction,
        display: &mut D,
    ) -> Result<FrameReport, RenderError<D::Error>>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let layout = self.layout.as_ref().ok_or(RenderError::NotLaidOut)?;
        let frame = build_frame(layout, ctx, &self.power, &self.strategy, action.draws());
        let dirty = self.strategy.full(&frame, display)?;
        self.guard.mark_drawn(ctx.time.minute);
        self.drawn_settings = Some(ctx.settings);

        let second_hand = match (frame.second, action) {
            (Some(_), _) => SecondHandAction::Draw,
            (None, SecondHandAction::Erase) if self.strategy.draws_second_in_low_power() => {
                SecondHandAction::Erase
            }
            _ => SecondHandAction::Skip,
        };
        Ok(FrameReport {
            full_redraw: true,
            second_hand,
            dirty,
        })
    }
}

/// Resolve colours, second-hand record and shadow for one frame
fn build_frame<'a>(
    layout: &'a FaceLayout,
    ctx: &'a RenderContext,
    power: &PowerModeController,
    strategy: &RenderStrategy,
    show_second: bool,
) -> Frame<'a> {
    let awake = power.is_awake();
    let settings = &ctx.settings;
    let show_second = show_second && (awake || strategy.draws_second_in_low_power());
    let shadow_on = strategy.supports_shadow() && settings.shadow_active(awake);

    Frame {
        layout,
        ctx,
        palette: Palette::resolve(settings, !power.partial_updates_enabled()),
        second: show_second.then(|| layout.second_record(ctx.time.second)),
        shadow: shadow_on.then(|| settings.shadow.offset_px()),
    }
}
