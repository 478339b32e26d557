//! Face settings
//!
//! User-facing options the host's settings storage hands over on every
//! tick.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// When to hide the second hand in low power
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HideSeconds {
    /// Keep drawing the second hand for the whole low-power period
    Never,
    /// Hide after the countdown expires
    #[default]
    Always,
    /// Hide after the countdown only while in the reduced colour mode
    InReducedColorMode,
}

impl HideSeconds {
    /// Check if this policy hides the hand in the given colour mode
    pub fn hides_in(&self, color_mode: ColorMode) -> bool {
        match self {
            HideSeconds::Never => false,
            HideSeconds::Always => true,
            HideSeconds::InReducedColorMode => color_mode.is_reduced(),
        }
    }
}

/// Device colour mode, derived by the host from time of day and schedules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ColorMode {
    #[default]
    Day,
    /// Dimmed palette for night or do-not-disturb
    Night,
}

impl ColorMode {
    /// Check if this is the reduced colour mode
    pub fn is_reduced(&self) -> bool {
        matches!(self, ColorMode::Night)
    }
}

/// 3D-shadow effect strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ShadowLevel {
    #[default]
    Off,
    /// Shadow cast close to the hand
    Low,
    /// Shadow cast further out
    High,
}

impl ShadowLevel {
    /// Check if a shadow is drawn at all
    pub fn is_enabled(&self) -> bool {
        !matches!(self, ShadowLevel::Off)
    }

    /// Shadow displacement in pixels (applied to both axes)
    pub fn offset_px(&self) -> i32 {
        match self {
            ShadowLevel::Off => 0,
            ShadowLevel::Low => 2,
            ShadowLevel::High => 4,
        }
    }
}

/// 24-bit colour as stored in settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new colour
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Face settings consumed by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FaceSettings {
    /// Second-hand / accent colour
    pub accent: Rgb,
    /// Second-hand hiding policy in low power
    pub hide_seconds: HideSeconds,
    /// 3D-shadow effect
    pub shadow: ShadowLevel,
    /// Current colour mode
    pub color_mode: ColorMode,
    /// Paint a diagnostic background once partial updates are revoked
    pub diagnostic_color: bool,
}

impl Default for FaceSettings {
    fn default() -> Self {
        Self {
            accent: Rgb::new(0xE0, 0x20, 0x20),
            hide_seconds: HideSeconds::Always,
            shadow: ShadowLevel::Off,
            color_mode: ColorMode::Day,
            diagnostic_color: false,
        }
    }
}

impl FaceSettings {
    /// Check if the hand shadow should be drawn in the given power state
    pub fn shadow_active(&self, is_awake: bool) -> bool {
        self.shadow.is_enabled() && is_awake && self.color_mode == ColorMode::Day
    }
}
