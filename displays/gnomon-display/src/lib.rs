//! Rendering side of the Gnomon watch-face engine
//!
//! This crate provides:
//! - In-memory surfaces (`Framebuffer`, `Layer`, `LayerStack`) implementing
//!   embedded-graphics `DrawTarget`
//! - The face painter (ticks, date, indicators, hands) and its palette
//! - The three render strategies (`Buffered`, `Layered`, `Direct`)
//! - `WatchFace`, the entry point the host lifecycle calls into
//!
//! # Architecture
//!
//! All geometry, dirty-region and power-mode decisions live in `gnomon-core`.
//! This crate turns those decisions into pixels on any
//! `DrawTarget<Color = Rgb565>`:
//!
//! - **Buffered** devices keep one off-screen framebuffer without the second
//!   hand and draw the hand straight onto the display.
//! - **Layered** devices keep one surface per layer and composite only the
//!   region that changed.
//! - **Direct** devices repaint the whole screen on every update.

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod backend;
pub mod context;
pub mod face;
pub mod layout;
pub mod painter;
pub mod palette;
pub mod strategy;
pub mod surface;

// Re-export key types
pub use backend::RenderError;
pub use context::RenderContext;
pub use face::{FrameReport, WatchFace};
pub use layout::FaceLayout;
pub use palette::Palette;
pub use strategy::RenderStrategy;
pub use surface::{Framebuffer, Layer, LayerStack};
