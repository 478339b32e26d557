//! Per-second render records
//!
//! Devices with spare memory evaluate the second hand for all 60 positions
//! once per layout and read the cached records on every tick. Devices
//! without it call [`SecondHandPrecomputer::record`] per tick; both paths run
//! the same arithmetic, so cached and uncached output are identical.

pub mod table;

pub use table::{RenderRecord, SecondHandPrecomputer, SecondHandTable, SECONDS_PER_MINUTE};
