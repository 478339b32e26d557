//! Board-agnostic core logic for the Gnomon watch-face renderer
//!
//! This crate contains everything that does not depend on a graphics stack
//! or a specific device:
//!
//! - Hand and tick-mark geometry (percent specs to pixel trapezoids)
//! - Rotation through a 60-entry sine table
//! - Dirty-region (clip rectangle) calculation
//! - Per-second second-hand precomputation
//! - Power-mode state machine and the budget-exceeded latch
//! - Configuration type definitions
//! - Traits for the host-side collaborators (clock, settings, indicators)

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod geometry;
pub mod power;
pub mod precompute;
pub mod region;
pub mod traits;
