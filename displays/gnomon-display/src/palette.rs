//! Face colours

use embedded_graphics::pixelcolor::{Rgb565, Rgb888};
use embedded_graphics::prelude::*;
use gnomon_core::config::{ColorMode, FaceSettings, Rgb};

/// Background shown once partial updates are revoked
pub const DIAGNOSTIC_BACKGROUND: Rgb565 = Rgb565::MAGENTA;

/// Colours for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Palette {
    pub background: Rgb565,
    pub ticks: Rgb565,
    pub hands: Rgb565,
    pub second: Rgb565,
    pub shadow: Rgb565,
    pub text: Rgb565,
}

impl Palette {
    /// Resolve the palette for the given settings
    ///
    /// `degraded` is true once the host revoked per-second updates.
    pub fn resolve(settings: &FaceSettings, degraded: bool) -> Self {
        let mut palette = match settings.color_mode {
            ColorMode::Day => Self {
                background: Rgb565::WHITE,
                ticks: Rgb565::new(8, 16, 8),
                hands: Rgb565::BLACK,
                second: accent(settings.accent, false),
                shadow: Rgb565::new(22, 44, 22),
                text: Rgb565::new(8, 16, 8),
            },
            ColorMode::Night => Self {
                background: Rgb565::BLACK,
                ticks: Rgb565::new(12, 24, 12),
                hands: Rgb565::new(24, 48, 24),
                second: accent(settings.accent, true),
                shadow: Rgb565::BLACK,
                text: Rgb565::new(12, 24, 12),
            },
        };
        if degraded && settings.diagnostic_color {
            palette.background = DIAGNOSTIC_BACKGROUND;
        }
        palette
    }
}

/// Accent colour, halved in the reduced colour mode
fn accent(color: Rgb, dimmed: bool) -> Rgb565 {
    let shift = dimmed as u8;
    Rgb565::from(Rgb888::new(color.r >> shift, color.g >> shift, color.b >> shift))
}
