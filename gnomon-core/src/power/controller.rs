//! Power-mode controller
//!
//! Owns the [`PowerMode`], the second-hand countdown and the budget latch.
//! The display side asks it, once per low-power tick, what to do with the
//! second hand.

use super::events::PowerEvent;
use super::machine::PowerMode;
use crate::config::{ColorMode, HideSeconds};

/// Low-power ticks the second hand stays visible under a hiding policy
pub const SECOND_HAND_TIMER: u8 = 30;

/// What a low-power tick does with the second hand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SecondHandAction {
    /// Erase the previous position and draw the current one
    Draw,
    /// Erase the previous position and draw nothing
    Erase,
    /// Leave the screen untouched
    Skip,
}

impl SecondHandAction {
    /// Check if the hand ends up on screen
    pub fn draws(&self) -> bool {
        matches!(self, SecondHandAction::Draw)
    }
}

/// Snapshot of the controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PowerState {
    pub is_awake: bool,
    /// Counts down from [`SECOND_HAND_TIMER`] while in low power
    pub sleep_timer: u8,
    /// Latched false forever once the budget is exceeded
    pub partial_updates_enabled: bool,
}

/// Power-mode controller
#[derive(Debug, Clone)]
pub struct PowerModeController {
    mode: PowerMode,
    sleep_timer: u8,
    partial_updates_enabled: bool,
}

impl Default for PowerModeController {
    fn default() -> Self {
        Self::new()
    }
}

impl PowerModeController {
    /// Create a controller in the awake mode
    pub const fn new() -> Self {
        Self {
            mode: PowerMode::Awake,
            sleep_timer: SECOND_HAND_TIMER,
            partial_updates_enabled: true,
        }
    }

    /// Current mode
    pub fn mode(&self) -> PowerMode {
        self.mode
    }

    /// Check if the display is awake
    pub fn is_awake(&self) -> bool {
        self.mode.is_awake()
    }

    /// Check if per-tick low-power drawing is still allowed
    pub fn partial_updates_enabled(&self) -> bool {
        self.partial_updates_enabled
    }

    /// Snapshot of the current state
    pub fn state(&self) -> PowerState {
        PowerState {
            is_awake: self.is_awake(),
            sleep_timer: self.sleep_timer,
            partial_updates_enabled: self.partial_updates_enabled,
        }
    }

    /// Host entered low power
    pub fn enter_low_power(&mut self) {
        self.mode = self.mode.transition(PowerEvent::EnterLowPower);
        self.sleep_timer = SECOND_HAND_TIMER;
    }

    /// Host left low power
    pub fn exit_low_power(&mut self) {
        self.mode = self.mode.transition(PowerEvent::ExitLowPower);
        self.sleep_timer = SECOND_HAND_TIMER;
    }

    /// Host reported a blown low-power budget
    ///
    /// Returns true on the first notification only.
    pub fn on_power_budget_exceeded(&mut self) -> bool {
        let edge = self.partial_updates_enabled;
        self.partial_updates_enabled = false;
        edge
    }

    /// Advance one low-power tick and decide the second hand's fate
    ///
    /// While awake this always draws and leaves the countdown alone. In low
    /// power the first [`SECOND_HAND_TIMER`] ticks draw; after that a hiding
    /// policy erases the hand once and suppresses it until the next wake.
    pub fn low_power_tick(&mut self, hide: HideSeconds, color_mode: ColorMode) -> SecondHandAction {
        if self.is_awake() {
            return SecondHandAction::Draw;
        }
        if !self.partial_updates_enabled {
            return SecondHandAction::Skip;
        }

        match self.mode {
            PowerMode::LowPowerActive if self.sleep_timer > 0 => {
                self.sleep_timer -= 1;
                SecondHandAction::Draw
            }
            PowerMode::LowPowerActive if hide.hides_in(color_mode) => {
                self.mode = self.mode.transition(PowerEvent::TimerExpired);
                SecondHandAction::Erase
            }
            PowerMode::LowPowerActive => SecondHandAction::Draw,
            _ => SecondHandAction::Skip,
        }
    }

    /// Check if a full redraw right now should include the second hand
    pub fn second_hand_visible(&self, hide: HideSeconds, color_mode: ColorMode) -> bool {
        match self.mode {
            PowerMode::Awake => true,
            PowerMode::LowPowerActive => {
                self.partial_updates_enabled
                    && (self.sleep_timer > 0 || !hide.hides_in(color_mode))
            }
            PowerMode::LowPowerSuppressed => false,
        }
    }
}
